use std::io::{ErrorKind, Read, Write};

use crate::error::{Result, TransportError};

/// A half-duplex byte transport carrying TMCL frames.
///
/// The transaction layer issues exactly one `write_frame` followed by
/// one `read_frame` per command. Implementations must deliver writes
/// intact and block on reads until the requested byte count is available
/// or the stream fails (timeout, disconnect, EOF).
pub trait Transport {
    /// Write one complete frame to the device.
    fn write_frame(&mut self, buf: &[u8]) -> Result<()>;

    /// Read exactly `buf.len()` bytes from the device, blocking until
    /// satisfied.
    fn read_frame(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Any blocking byte stream is a valid transport. Serial port handles,
/// TCP bridges, and in-memory test doubles all come in through here.
impl<T: Read + Write> Transport for T {
    fn write_frame(&mut self, buf: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < buf.len() {
            match self.write(&buf[offset..]) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }

        loop {
            match self.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }

    fn read_frame(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0usize;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(TransportError::ShortRead {
                        expected: buf.len(),
                        actual: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
        Ok(())
    }
}
