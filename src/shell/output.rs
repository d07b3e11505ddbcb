use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(&'static str),
    String(String),
    Transactions(Listing),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::String(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Transactions(listing) => {
                if listing.list.is_empty() {
                    writeln!(f, "No transactions found.")
                } else {
                    write!(f, "{}", listing)
                }
            }
        }
    }
}

/// What `Display` needs to render a numbered transaction listing.
#[derive(Debug, PartialEq, Eq)]
pub struct Listing {
    pub header: &'static str,
    pub list: base::TransactionList,

    /// Index shown for the listing's first entry; subsequent entries count up
    /// from it.
    pub first_index: usize,
    pub colored: bool,
}

impl Listing {
    fn entry(&self, index: usize, tx: &base::Transaction) -> String {
        let mut sign = format!("[{}]", tx.txtype().sign());
        if self.colored {
            sign = match tx.txtype() {
                base::Txtype::Income => colored::Colorize::green(sign.as_str()).to_string(),
                base::Txtype::Expense => colored::Colorize::red(sign.as_str()).to_string(),
            };
        }
        let mut line = format!(
            "{}. {} {} {} {}",
            index,
            sign,
            tx.date(),
            tx.category(),
            tx.amount(),
        );
        if !tx.description().is_empty() {
            line.push(' ');
            line.push_str(tx.description());
        }
        line
    }
}

impl std::fmt::Display for Listing {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header)?;
        for (k, tx) in self.list.iter().enumerate() {
            writeln!(f, "{}", self.entry(self.first_index + k, tx))?;
        }
        Ok(())
    }
}
