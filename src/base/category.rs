#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "&str")]
pub struct Category(String);

impl Category {
    pub fn str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.str().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("input contains a character that is not an ASCII letter")]
    NotAlphabetic,
}

impl ParseError {
    fn check(s: &str) -> Result<(), Self> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseError::NotAlphabetic);
        }
        Ok(())
    }
}

impl std::str::FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::Err::check(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<&str> for Category {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
