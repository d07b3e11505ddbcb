use crate::base;
use crate::shell;

/// Rewrites the given fields of the transaction at the given store position,
/// keeping the rest.
#[derive(Debug, PartialEq, Eq)]
pub struct Edit {
    index: usize,
    txtype: Option<base::Txtype>,
    category: Option<base::Category>,
    date: Option<time::Date>,
    amount: Option<base::Amount>,
    description: Option<String>,
}

impl Edit {
    pub const USAGE: &str = "edit x/INDEX [t/TYPE] [c/CATEGORY] [d/DATE] [a/AMOUNT] [s/DESCRIPTION]";

    const RECOGNIZED: &[shell::Tag] = &[
        shell::Tag::Index,
        shell::Tag::Type,
        shell::Tag::Category,
        shell::Tag::Date,
        shell::Tag::Amount,
        shell::Tag::Description,
    ];

    pub fn from_tags(tags: &shell::Tagmap) -> Result<Self, shell::Error> {
        tags.check_recognized(Self::RECOGNIZED)?;
        let edit = Self {
            index: tags.index()?.ok_or(shell::Error::MissingTag)?,
            txtype: tags.txtype()?,
            category: tags.category()?,
            date: tags.date()?,
            amount: tags.amount()?,
            description: tags.description().map(str::to_string),
        };
        // An edit that changes nothing is a missing-tag mistake, not a no-op.
        if edit.txtype.is_none()
            && edit.category.is_none()
            && edit.date.is_none()
            && edit.amount.is_none()
            && edit.description.is_none()
        {
            return Err(shell::Error::MissingTag);
        }
        Ok(edit)
    }

    pub fn run(
        self,
        txs: &mut base::TransactionList,
        config: &base::Config,
        fs: &base::Fs,
    ) -> Result<shell::Output, shell::Error> {
        let i0 = self.index.wrapping_sub(config.first_index);
        let updated = {
            let old = txs.get(i0).ok_or(shell::Error::InvalidIndex)?;
            base::Transaction::new(
                self.txtype.unwrap_or(old.txtype()),
                self.category.unwrap_or_else(|| old.category().clone()),
                self.date.unwrap_or(old.date()),
                self.amount.unwrap_or(old.amount()),
                self.description
                    .unwrap_or_else(|| old.description().to_string()),
            )
        };
        txs.set(i0, updated.clone())
            .expect("transaction should have already been verified to exist");
        fs.write(txs).map_err(shell::Error::Save)?;
        Ok(shell::Output::Transactions(shell::Listing {
            header: "Edited the following transaction:",
            list: std::iter::once(updated).collect(),
            first_index: self.index,
            colored: config.use_colored_output,
        }))
    }
}
