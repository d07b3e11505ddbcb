use crate::base;
use crate::shell;

/// Removes the transaction at the given store position.
#[derive(Debug, PartialEq, Eq)]
pub struct Delete {
    index: usize,
}

impl Delete {
    pub const USAGE: &str = "delete x/INDEX";

    const RECOGNIZED: &[shell::Tag] = &[shell::Tag::Index];

    pub fn from_tags(tags: &shell::Tagmap) -> Result<Self, shell::Error> {
        tags.check_recognized(Self::RECOGNIZED)?;
        Ok(Self {
            index: tags.index()?.ok_or(shell::Error::MissingTag)?,
        })
    }

    pub fn run(
        self,
        txs: &mut base::TransactionList,
        config: &base::Config,
        fs: &base::Fs,
    ) -> Result<shell::Output, shell::Error> {
        let i0 = self.index.wrapping_sub(config.first_index);
        let removed = txs.remove(i0).ok_or(shell::Error::InvalidIndex)?;
        fs.write(txs).map_err(shell::Error::Save)?;
        Ok(shell::Output::Transactions(shell::Listing {
            header: "Removed the following transaction:",
            list: std::iter::once(removed).collect(),
            first_index: self.index,
            colored: config.use_colored_output,
        }))
    }
}
