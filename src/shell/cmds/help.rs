use crate::shell;
use crate::shell::cmds;

/// Shows the usage of every command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Help;

impl Help {
    pub const USAGE: &str = "help";

    pub fn from_tags(tags: &shell::Tagmap) -> Result<Self, shell::Error> {
        tags.check_recognized(&[])?;
        Ok(Self)
    }

    pub fn run(self) -> Result<shell::Output, shell::Error> {
        let text = [
            "Available commands:".to_string(),
            format!("  {}", cmds::Add::USAGE),
            format!("  {}", cmds::List::USAGE),
            format!("  {}", cmds::Find::USAGE),
            format!("  {}", cmds::Edit::USAGE),
            format!("  {}", cmds::Delete::USAGE),
            format!("  {}", cmds::Purge::USAGE),
            format!("  {}", Self::USAGE),
            format!("  {}", cmds::Bye::USAGE),
            String::new(),
            "TYPE is either 'income' or 'expense'.".to_string(),
            "CATEGORY is a single word containing only letters.".to_string(),
            "DATE is in yyyyMMdd format, e.g. 20230105.".to_string(),
            "AMOUNT is a non-negative number of up to two decimal places.".to_string(),
            "INDEX is a transaction's position as shown by 'list' with no filters.".to_string(),
        ];
        Ok(shell::Output::String(text.join("\n")))
    }
}
