use strum::EnumCount as _;
use strum::IntoEnumIterator as _;

use crate::base;
use crate::shell;

/// Named argument prefixes accepted at the prompt, e.g. the `t` in
/// `t/income`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::EnumIter, strum::EnumCount,
)]
pub enum Tag {
    #[strum(serialize = "t")]
    Type,
    #[strum(serialize = "c")]
    Category,
    #[strum(serialize = "d")]
    Date,
    #[strum(serialize = "a")]
    Amount,
    #[strum(serialize = "s")]
    Description,
    #[strum(serialize = "x")]
    Index,
}

/// The tag values bound for a single command invocation. A command accepts a
/// binding only for tags in its recognized set; everything else is rejected
/// before the command is built.
#[derive(Debug, Default)]
pub struct Tagmap<'a> {
    values: [Option<&'a str>; Tag::COUNT],
}

impl<'a> Tagmap<'a> {
    pub fn bind(&mut self, tag: Tag, value: &'a str) -> Result<(), shell::Error> {
        if value.is_empty() {
            return Err(shell::Error::EmptyTagValue);
        }
        let slot = &mut self.values[tag as usize];
        if slot.is_some() {
            return Err(shell::Error::DuplicateTag);
        }
        *slot = Some(value);
        Ok(())
    }

    pub fn get(&self, tag: Tag) -> Option<&'a str> {
        self.values[tag as usize]
    }

    /// Rejects any bound tag outside the given set.
    pub fn check_recognized(&self, recognized: &[Tag]) -> Result<(), shell::Error> {
        for tag in Tag::iter() {
            if self.get(tag).is_some() && !recognized.contains(&tag) {
                return Err(shell::Error::UnrecognizedTag);
            }
        }
        Ok(())
    }

    pub fn txtype(&self) -> Result<Option<base::Txtype>, shell::Error> {
        self.get(Tag::Type)
            .map(|s| s.parse().map_err(|_| shell::Error::UnknownTxtype))
            .transpose()
    }

    pub fn category(&self) -> Result<Option<base::Category>, shell::Error> {
        self.get(Tag::Category)
            .map(|s| s.parse().map_err(|_| shell::Error::InvalidCategory))
            .transpose()
    }

    pub fn date(&self) -> Result<Option<time::Date>, shell::Error> {
        self.get(Tag::Date)
            .map(|s| base::date::parse_compact(s).map_err(|_| shell::Error::InvalidDate))
            .transpose()
    }

    pub fn amount(&self) -> Result<Option<base::Amount>, shell::Error> {
        self.get(Tag::Amount)
            .map(|s| {
                s.parse().map_err(|e| match e {
                    base::amount::ParseError::NotNumeric => shell::Error::NumberNotNumeric,
                    base::amount::ParseError::OutOfRange => shell::Error::AmountOutOfRange,
                })
            })
            .transpose()
    }

    pub fn description(&self) -> Option<&'a str> {
        self.get(Tag::Description)
    }

    pub fn index(&self) -> Result<Option<usize>, shell::Error> {
        self.get(Tag::Index)
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| shell::Error::NumberNotNumeric)
            })
            .transpose()
    }
}
