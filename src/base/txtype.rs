/// Whether a transaction adds money to or draws money from the balance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Txtype {
    Income,
    Expense,
}

impl Txtype {
    pub fn sign(self) -> char {
        match self {
            Txtype::Income => '+',
            Txtype::Expense => '-',
        }
    }
}
