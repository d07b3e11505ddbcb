use crate::shell;

/// Ends the session.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Bye;

impl Bye {
    pub const USAGE: &str = "bye";

    pub fn from_tags(tags: &shell::Tagmap) -> Result<Self, shell::Error> {
        tags.check_recognized(&[])?;
        Ok(Self)
    }

    pub fn run(self) -> Result<shell::Output, shell::Error> {
        Ok(shell::Output::Str("Goodbye. Hope to see you again soon!"))
    }
}
