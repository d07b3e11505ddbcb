use crate::base;
use crate::shell;

/// Lists transactions, optionally narrowed by type, category, and date.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct List {
    filter: base::Filter,
}

impl List {
    pub const USAGE: &str = "list [t/TYPE] [c/CATEGORY] [d/DATE]";

    const RECOGNIZED: &[shell::Tag] = &[shell::Tag::Type, shell::Tag::Category, shell::Tag::Date];

    pub fn from_tags(tags: &shell::Tagmap) -> Result<Self, shell::Error> {
        tags.check_recognized(Self::RECOGNIZED)?;
        Ok(Self {
            filter: base::Filter {
                txtype: tags.txtype()?,
                category: tags.category()?,
                date: tags.date()?,
            },
        })
    }

    pub fn run(
        self,
        txs: &base::TransactionList,
        config: &base::Config,
    ) -> Result<shell::Output, shell::Error> {
        Ok(shell::Output::Transactions(shell::Listing {
            header: "Here are the transactions in your records:",
            list: txs.filter(&self.filter),
            first_index: config.first_index,
            colored: config.use_colored_output,
        }))
    }
}
