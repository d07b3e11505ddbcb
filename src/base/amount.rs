/// Integral representation of a non-negative monetary quantity, in cents.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Amount(pub i64);

impl Amount {
    /// 10,000,000.00, the largest amount a single transaction may carry.
    pub const MAX: Self = Self(1_000_000_000);
}

impl std::fmt::Display for Amount {
    /// Formats with two decimal places and thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.0;
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is not an unsigned number")]
    NotNumeric,
    #[error("amount exceeds {}", Amount::MAX)]
    OutOfRange,
}

impl std::str::FromStr for Amount {
    type Err = ParseError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded. Signs are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.replace(',', "");
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s.as_str(), ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseError::NotNumeric);
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(ParseError::NotNumeric);
        }

        let mut frac = frac.to_string();
        while frac.len() < 2 {
            frac.push('0');
        }
        frac.truncate(2);
        let whole = match whole {
            "" => 0,
            _ => whole.parse::<i64>().map_err(|_| ParseError::OutOfRange)?,
        };
        let frac = frac.parse::<i64>().expect("two digits should parse");
        let cents = whole
            .checked_mul(100)
            .and_then(|x| x.checked_add(frac))
            .ok_or(ParseError::OutOfRange)?;
        if cents > Self::MAX.0 {
            return Err(ParseError::OutOfRange);
        }
        Ok(Self(cents))
    }
}

impl TryFrom<&str> for Amount {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
