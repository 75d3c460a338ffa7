/// Errors that can occur at the byte-transport level.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// An I/O error occurred on the underlying stream (includes read
    /// timeouts configured on the stream itself).
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before the expected number of bytes arrived.
    #[error("short read ({actual} of {expected} bytes)")]
    ShortRead { expected: usize, actual: usize },

    /// The stream refused further writes.
    #[error("transport closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
