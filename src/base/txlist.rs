use crate::base;

/// Conjunction of equality constraints on transaction fields. Unset fields
/// match every transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub txtype: Option<base::Txtype>,
    pub category: Option<base::Category>,
    pub date: Option<time::Date>,
}

impl Filter {
    pub fn matches(&self, tx: &base::Transaction) -> bool {
        self.txtype.is_none_or(|ty| ty == tx.txtype())
            && self.category.as_ref().is_none_or(|c| c == tx.category())
            && self.date.is_none_or(|dt| dt == tx.date())
    }
}

/// Ordered container of transactions. Order reflects entry order; duplicate
/// entries are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionList(Vec<base::Transaction>);

impl TransactionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn add(&mut self, tx: base::Transaction) {
        self.0.push(tx);
    }

    /// Returns the transaction at the given zero-based position, or `None` if
    /// input is out of bounds.
    pub fn get(&self, i: usize) -> Option<&base::Transaction> {
        self.0.get(i)
    }

    /// Removes and returns the transaction at the given zero-based position.
    /// If input is out of bounds, returns `None` and leaves the list
    /// unmodified.
    pub fn remove(&mut self, i: usize) -> Option<base::Transaction> {
        if i >= self.0.len() {
            return None;
        }
        Some(self.0.remove(i))
    }

    /// Replaces the transaction at the given zero-based position, returning
    /// the previous occupant. If input is out of bounds, returns `None` and
    /// leaves the list unmodified.
    pub fn set(&mut self, i: usize, tx: base::Transaction) -> Option<base::Transaction> {
        let slot = self.0.get_mut(i)?;
        Some(std::mem::replace(slot, tx))
    }

    /// Removes every transaction, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.0.len();
        self.0.clear();
        n
    }

    /// Returns a new list holding the transactions that satisfy `filter`, in
    /// this list's order. A filter with no constraints set copies the whole
    /// list.
    pub fn filter(&self, filter: &Filter) -> Self {
        self.iter().filter(|tx| filter.matches(tx)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Transaction> {
        self.0.iter()
    }
}

impl IntoIterator for TransactionList {
    type Item = base::Transaction;
    type IntoIter = std::vec::IntoIter<base::Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Transaction> for TransactionList {
    fn from_iter<T: IntoIterator<Item = base::Transaction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Transaction> for TransactionList {
    fn from_iter<T: IntoIterator<Item = &'a base::Transaction>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for TransactionList {
    /// Writes one JSON object per line, with a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tx in self.iter() {
            writeln!(f, "{}", tx)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid transaction at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for TransactionList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Transaction>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for TransactionList {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
