use thiserror::Error;

use crate::dialect::Dialect;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown dialect '{0}' (expected central, raiano or sendinese)")]
    UnknownDialect(String),

    #[error("invalid {dialect} lexicon: {source}")]
    Lexicon {
        dialect: Dialect,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
