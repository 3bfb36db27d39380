use std::path::PathBuf;

/// Result alias carrying [`OrstError`].
pub type Result<T> = std::result::Result<T, OrstError>;

/// Recoverable errors raised outside of a running sort.
///
/// Broken invariants inside a sort (an index out of range, removing from a sequence that is not
/// eliminating) are not represented here. Those panic, and the race reports the run as failed.
#[derive(Debug, thiserror::Error)]
pub enum OrstError {
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unable to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
