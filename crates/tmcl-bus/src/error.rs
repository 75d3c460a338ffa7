use tmcl_frame::{Command, FrameError, Reply};
use tmcl_transport::TransportError;

/// Client-side validation failures. Raised before any I/O; the wire is
/// never touched.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The command is outside the motor allow-list and must be sent at
    /// module scope instead.
    #[error("command {} cannot target a motor axis", .0.mnemonic())]
    CommandNotPermitted(Command),

    /// A value is outside its domain-specific bounds.
    #[error("{what} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Errors that can occur in bus transactions.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    /// Byte-transport failure (write error, read timeout, short read).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The reply could not be decoded.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Caller input rejected before any I/O.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The module answered with an error-class status (< 100).
    #[error("module reported {message} (status {status})")]
    Protocol {
        status: u8,
        message: &'static str,
        reply: Reply,
    },
}

pub type Result<T> = std::result::Result<T, BusError>;
