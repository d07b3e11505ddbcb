mod add;
mod bye;
mod delete;
mod edit;
mod find;
mod help;
mod list;
mod purge;

pub use add::Add;
pub use bye::Bye;
pub use delete::Delete;
pub use edit::Edit;
pub use find::Find;
pub use help::Help;
pub use list::List;
pub use purge::Purge;

use crate::base;
use crate::shell;

/// A fully configured prompt command. Instances are built once by the parser,
/// executed at most once, then discarded.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add(Add),
    List(List),
    Find(Find),
    Edit(Edit),
    Delete(Delete),
    Purge(Purge),
    Help(Help),
    Bye(Bye),
}

impl Command {
    pub fn run(
        self,
        txs: &mut base::TransactionList,
        config: &base::Config,
        fs: &base::Fs,
    ) -> Result<shell::Output, shell::Error> {
        match self {
            Command::Add(cmd) => cmd.run(txs, config, fs),
            Command::List(cmd) => cmd.run(txs, config),
            Command::Find(cmd) => cmd.run(txs, config),
            Command::Edit(cmd) => cmd.run(txs, config, fs),
            Command::Delete(cmd) => cmd.run(txs, config, fs),
            Command::Purge(cmd) => cmd.run(txs, fs),
            Command::Help(cmd) => cmd.run(),
            Command::Bye(cmd) => cmd.run(),
        }
    }

    /// Whether running this command should end the session loop.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Bye(_))
    }
}
