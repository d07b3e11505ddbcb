use crate::base;
use crate::shell;
use crate::shell::testing::ResultMatcher;
use crate::shell::testing::state;

/// A single prompt line evaluated during a test case.
pub struct Invocation<'a> {
    pub line: &'a str,
    pub res: ResultMatcher<'a>,
}

/// Test case encapsulating expectations for the given prompt lines, all
/// evaluated in one session. Commands may mutate the filesystem.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Filesystem state prior to loading the session.
    pub initial_state: state::StrState<'a>,

    /// Desired filesystem state after running every line.
    pub final_state: state::State,
}

impl MutCase<'_> {
    /// 1. Creates a tempdir and initializes files based on `initial_state`
    /// 1. Loads one session and evaluates each line, checking results
    /// 1. Checks if files match `final_state`
    pub fn run(self) {
        let td = tempfile::TempDir::new().unwrap();
        let fs = base::Fs::new(td.path());
        self.initial_state.to_fs(&fs);

        let mut session = shell::Session::load(base::Fs::new(td.path())).unwrap();
        for inv in self.invocations {
            let res = session.eval(inv.line);
            inv.res.assert_matches(res);
        }

        let got_final_state = state::State::from_fs(&fs);
        assert_eq!(got_final_state, self.final_state);
    }
}

/// Test case encapsulating expectations for the given prompt lines. Commands
/// are expected to leave filesystem state unchanged.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: state::StrState<'a>,
}

impl Case<'_> {
    /// 1. Creates a tempdir and initializes files based on `initial_state`
    /// 1. Loads one session and evaluates each line, checking results
    /// 1. Checks if files match `initial_state`
    pub fn run(self) {
        let tc = MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        };
        tc.run()
    }
}
