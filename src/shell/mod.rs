mod cmds;
mod error;
mod output;
mod parser;
mod tag;

#[cfg(test)]
mod testing;

pub use cmds::Command;
pub use error::Error;
pub use output::Listing;
pub use output::Output;
pub use parser::parse;
pub use tag::Tag;
pub use tag::Tagmap;

use anyhow::Context;

use crate::base;

/// One interactive session: the transaction store plus everything needed to
/// run commands against it.
pub struct Session {
    txs: base::TransactionList,
    config: base::Config,
    fs: base::Fs,
    done: bool,
}

impl Session {
    /// Reads the config and transaction files under `fs`. Missing files load
    /// as defaults; unreadable or corrupt ones are fatal.
    pub fn load(fs: base::Fs) -> anyhow::Result<Self> {
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let txs = fs.read::<base::TransactionList>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::TransactionList>().display()
            )
        })?;
        Ok(Self {
            txs,
            config,
            fs,
            done: false,
        })
    }

    /// Parses and runs one input line. An error leaves the store untouched
    /// and the session open.
    pub fn eval(&mut self, line: &str) -> Result<Output, Error> {
        let cmd = parser::parse(line)?;
        if cmd.is_exit() {
            self.done = true;
        }
        cmd.run(&mut self.txs, &self.config, &self.fs)
    }

    /// Whether an exit command has run.
    pub fn is_done(&self) -> bool {
        self.done
    }
}
