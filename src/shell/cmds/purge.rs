use crate::base;
use crate::shell;

/// Removes every recorded transaction.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Purge;

impl Purge {
    pub const USAGE: &str = "purge";

    pub fn from_tags(tags: &shell::Tagmap) -> Result<Self, shell::Error> {
        tags.check_recognized(&[])?;
        Ok(Self)
    }

    pub fn run(
        self,
        txs: &mut base::TransactionList,
        fs: &base::Fs,
    ) -> Result<shell::Output, shell::Error> {
        let n = txs.clear();
        fs.write(txs).map_err(shell::Error::Save)?;
        Ok(shell::Output::String(format!(
            "Deleted {} transaction(s).",
            n
        )))
    }
}
