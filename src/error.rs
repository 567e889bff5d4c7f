//! Errors raised by the code around the tree. The tree itself never fails.

use thiserror::Error;

/// Everything that can go wrong while building a visitor report.
#[derive(Error, Debug)]
pub enum Error {
    /// A key was looked up in a [`Registry`](crate::registry::Registry) that
    /// has no entry for it.
    #[error("UnknownKey no registry entry for {0}")]
    UnknownKey(String),
    /// Stats were requested for a log nobody has been recorded in.
    #[error("NoVisitors no visitors have been recorded")]
    NoVisitors,
    /// The dataset couldn't be parsed.
    #[error("Dataset couldn't parse dataset: {0}")]
    Dataset(#[from] serde_json::Error),
    /// The dataset couldn't be read.
    #[error("Io couldn't read dataset: {0}")]
    Io(#[from] std::io::Error),
}
