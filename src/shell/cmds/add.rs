use crate::base;
use crate::shell;

/// Records a new transaction at the end of the store.
#[derive(Debug, PartialEq, Eq)]
pub struct Add {
    txtype: base::Txtype,
    category: base::Category,
    date: time::Date,
    amount: base::Amount,
    description: String,
}

impl Add {
    pub const USAGE: &str = "add t/TYPE c/CATEGORY a/AMOUNT [d/DATE] [s/DESCRIPTION]";

    const RECOGNIZED: &[shell::Tag] = &[
        shell::Tag::Type,
        shell::Tag::Category,
        shell::Tag::Date,
        shell::Tag::Amount,
        shell::Tag::Description,
    ];

    pub fn from_tags(tags: &shell::Tagmap) -> Result<Self, shell::Error> {
        tags.check_recognized(Self::RECOGNIZED)?;
        Ok(Self {
            txtype: tags.txtype()?.ok_or(shell::Error::MissingTag)?,
            category: tags.category()?.ok_or(shell::Error::MissingTag)?,
            amount: tags.amount()?.ok_or(shell::Error::MissingTag)?,
            date: tags.date()?.unwrap_or_else(base::date::today),
            description: tags.description().unwrap_or_default().to_string(),
        })
    }

    pub fn run(
        self,
        txs: &mut base::TransactionList,
        config: &base::Config,
        fs: &base::Fs,
    ) -> Result<shell::Output, shell::Error> {
        let tx = base::Transaction::new(
            self.txtype,
            self.category,
            self.date,
            self.amount,
            self.description,
        );
        txs.add(tx.clone());
        fs.write(txs).map_err(shell::Error::Save)?;
        Ok(shell::Output::Transactions(shell::Listing {
            header: "Added the following transaction:",
            list: std::iter::once(tx).collect(),
            first_index: config.first_index + txs.len() - 1,
            colored: config.use_colored_output,
        }))
    }
}
