//! Result and Error types for stools-branching

/// Type alias for Result<T, branching::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `stools-branching` crate
///
/// Every variant is fatal to a parse. Line numbers are 1-based and only there
/// to help track down the problem.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    #[error("attempted to read from a closed stream")]
    ClosedStream,

    #[error("unexpected end of file after line {line}")]
    UnexpectedEndOfFile { line: usize },

    #[error("malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("inconsistent length of uncertainties (expected {expected:?}, found {found:?})")]
    UnexpectedLength { expected: usize, found: usize },
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}
