use crate::base;
use crate::shell;

/// Searches transaction descriptions and categories for a keyword,
/// case-insensitively.
#[derive(Debug, PartialEq, Eq)]
pub struct Find {
    pattern: String,
}

impl Find {
    pub const USAGE: &str = "find KEYWORD";

    /// Builds the command from the text following the command word. The
    /// keyword becomes a wildcard pattern matching anywhere in a field unless
    /// the keyword already carries its own `*` anchors.
    pub fn from_keyword(keyword: &str) -> Result<Self, shell::Error> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(shell::Error::MissingKeyword);
        }
        let mut pattern = keyword.to_lowercase();
        if !pattern.starts_with('*') {
            pattern.insert(0, '*');
        }
        if !pattern.ends_with('*') {
            pattern.push('*');
        }
        Ok(Self { pattern })
    }

    pub fn run(
        self,
        txs: &base::TransactionList,
        config: &base::Config,
    ) -> Result<shell::Output, shell::Error> {
        let pattern = wildmatch::WildMatch::new(&self.pattern);
        let list = txs
            .iter()
            .filter(|tx| {
                pattern.matches(tx.description().to_lowercase().as_str())
                    || pattern.matches(tx.category().str().to_lowercase().as_str())
            })
            .collect::<base::TransactionList>();
        Ok(shell::Output::Transactions(shell::Listing {
            header: "Here are the transactions matching your search:",
            list,
            first_index: config.first_index,
            colored: config.use_colored_output,
        }))
    }
}
