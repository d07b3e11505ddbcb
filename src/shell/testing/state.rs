use crate::base;

/// The expected or actual objects deserialized from a data directory. Unset
/// fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Default)]
pub struct State {
    config: Option<base::Config>,
    txs: Option<base::TransactionList>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the directory's [`base::TransactionList`].
    pub fn with_txs<T>(mut self, txs: T) -> Self
    where
        T: TryInto<base::TransactionList> + std::fmt::Debug,
        <T as TryInto<base::TransactionList>>::Error: std::fmt::Debug,
    {
        self.txs = Some(txs.try_into().unwrap());
        self
    }

    /// Deserializes objects from `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            txs: read!(base::TransactionList),
        }
    }
}

/// Representation of a data directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    txs: Option<&'a str>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the directory's [`base::TransactionList`] file contents.
    pub fn with_txs(mut self, s: &'a str) -> Self {
        self.txs = Some(s);
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if any field is not a
    /// valid serialization of a real type.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: std::fmt::Debug + base::fs::Serde,
            <T as std::str::FromStr>::Err: std::error::Error,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::TransactionList>(fs, self.txs);
    }

    pub fn to_state(&self) -> State {
        let mut st = State::new();
        if let Some(s) = self.config {
            st = st.with_config(s);
        }
        if let Some(s) = self.txs {
            st = st.with_txs(s);
        }
        st
    }
}
