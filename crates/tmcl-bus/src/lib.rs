//! TMCL transaction executor and addressing layer.
//!
//! [`Bus`] owns the transport and drives one full request→reply exchange
//! per call: encode, write, blocking read of the fixed-length reply,
//! decode, status classification. [`Module`] and [`Motor`] bind a module
//! address (and axis id) to that primitive and expose the named
//! operations — move, stop, reference search, parameter access.
//!
//! The bus is a shared half-duplex resource: at most one transaction may
//! be in flight, which the `&mut` receivers enforce at compile time.
//! Callers fanning out from several threads must wrap the bus in their
//! own lock and hold it across the whole round trip.
//!
//! There are no retries at this layer. Most TMCL commands are not
//! idempotent (a relative MVP moves again on every resend), so retry
//! policy has to be command-aware and belongs to the caller.

pub mod bus;
pub mod error;
pub mod module;
pub mod motor;

#[cfg(test)]
mod testutil;

pub use bus::Bus;
pub use error::{BusError, Result, ValidationError};
pub use module::Module;
pub use motor::{Motor, RfsAction, DEFAULT_MAX_VELOCITY, POSITION_LIMIT};
