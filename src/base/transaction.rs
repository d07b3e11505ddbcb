use crate::base;

/// A single recorded income or expense event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    #[serde(rename = "t")]
    txtype: base::Txtype,
    #[serde(rename = "c")]
    category: base::Category,
    #[serde(rename = "d")]
    date: time::Date,
    #[serde(rename = "a")]
    amount: base::Amount,
    #[serde(rename = "n", skip_serializing_if = "String::is_empty", default)]
    description: String,
}

impl Transaction {
    pub fn new(
        txtype: base::Txtype,
        category: base::Category,
        date: time::Date,
        amount: base::Amount,
        description: String,
    ) -> Self {
        Self {
            txtype,
            category,
            date,
            amount,
            description,
        }
    }

    pub fn txtype(&self) -> base::Txtype {
        self.txtype
    }

    pub fn category(&self) -> &base::Category {
        &self.category
    }

    pub fn date(&self) -> time::Date {
        self.date
    }

    pub fn amount(&self) -> base::Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
