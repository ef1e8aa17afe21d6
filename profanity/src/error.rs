use thiserror::Error;

/// Errors raised while configuring an engine or applying a document policy.
///
/// Scanning and purifying a value never fail; only configuration and the
/// document policy's write hooks do.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot purify field `{field}`: arrays of nested records are not supported")]
    NestedRecordArray { field: String },

    #[error(
        "forbidden list has {terms} entries but replacements list has {replacements}; \
         paired lists must have the same length"
    )]
    MismatchedReplacements { terms: usize, replacements: usize },

    #[error("forbidden term at index {index} is empty")]
    EmptyTerm { index: usize },

    #[error("replacement pool is empty")]
    EmptyReplacementPool,

    #[error("obscure symbol {symbol:?} is a word character")]
    InvalidObscureSymbol { symbol: char },

    #[error("failed to encode flag: {0}")]
    FlagEncoding(#[source] serde_json::Error),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("failed to compile term pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
