//! TMCL wire codec.
//!
//! Every TMCL exchange is one fixed-length request frame followed by one
//! fixed-length reply frame. This crate owns the byte layouts and nothing
//! else — no I/O, no status policy:
//!
//! - [`Command`]: the instruction opcode table
//! - [`Instruction`]: one outbound operation (command, type, motor/bank, value)
//! - [`Reply`]: the decoded reply record, status kept as a raw byte
//! - [`encode_request`] / [`decode_reply`]: the codec itself
//!
//! ## Byte order
//!
//! The 32-bit value field travels big-endian, as a signed two's-complement
//! integer. The serial checksum is the mod-256 running sum of all preceding
//! frame bytes; CAN framing drops both the address and the checksum because
//! CAN arbitration and CRC carry them.

pub mod codec;
pub mod command;
pub mod error;
pub mod instruction;
pub mod reply;

pub use codec::{
    checksum, decode_reply, encode_request, FrameConfig, Framing, CAN_REPLY_LEN, CAN_REQUEST_LEN,
    SERIAL_REPLY_LEN, SERIAL_REQUEST_LEN,
};
pub use command::Command;
pub use error::{FrameError, Result};
pub use instruction::Instruction;
pub use reply::{status_message, Reply, Status};
