use thiserror::Error;

use crate::value::Path;

#[derive(Debug, Error)]
pub enum Error {
    /// The host handed over a node whose runtime type has no normalized
    /// representation. The whole conversion fails; dropping the field
    /// silently could corrupt a downstream record.
    #[error("unsupported host value type `{tag}` at {path}")]
    UnsupportedType { path: Path, tag: &'static str },

    /// Defensive guard against payloads nested deeply enough to exhaust the
    /// stack during traversal.
    #[error("nesting exceeds {limit} levels at {path}")]
    DepthExceeded { path: Path, limit: usize },

    /// Required setup is missing or an argument fails a delegating
    /// operation's contract, including refusals reported by the wrapped SDK.
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
