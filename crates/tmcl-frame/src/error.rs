/// Errors that can occur while decoding reply frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The reply buffer does not match the frame size of the active framing.
    #[error("reply length mismatch (expected {expected} bytes, got {actual})")]
    Length { expected: usize, actual: usize },

    /// The reply checksum did not match the recomputed value.
    ///
    /// Only raised when checksum verification is enabled in
    /// [`FrameConfig`](crate::FrameConfig).
    #[error("reply checksum mismatch (expected {expected:#04x}, got {actual:#04x})")]
    Checksum { expected: u8, actual: u8 },
}

pub type Result<T> = std::result::Result<T, FrameError>;
