//! Byte-transport contract for TMCL transactions.
//!
//! TMCL modules sit behind a serial line (RS-232/RS-485) or a CAN
//! interface. This crate does not open either — it only defines the
//! [`Transport`] contract the transaction layer drives: write a whole
//! request, then block until an exact-length reply has been read.
//!
//! Any `std::io::Read + Write` stream (a serial port handle, a TCP
//! bridge, an in-memory test double) satisfies the contract through the
//! blanket implementation. Read timeouts are a property of the
//! underlying stream and must be configured there.

pub mod error;
pub mod traits;

pub use error::{Result, TransportError};
pub use traits::Transport;
