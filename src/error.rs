use thiserror::Error;

/// Failures talking to the static-data provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request to provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("provider payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider has no such image/splash for the requested version.
    #[error("missing asset: {0}")]
    MissingAsset(String),
}

/// Failures of the embedded store. A missing key is not one of these.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not open store: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("commit failed: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("could not encode entity: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Unrecoverable population failures. Per-entity problems are logged and
/// skipped instead.
#[derive(Error, Debug)]
pub enum PopulateError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("attack speed denominator is zero for input {0}")]
    ZeroDenominator(f64),

    #[error("attack speed is not finite for input {0}")]
    NonFinite(f64),
}
