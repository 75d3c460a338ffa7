use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};
use crate::instruction::Instruction;
use crate::reply::Reply;

/// Serial request frame: address + command + type + motor/bank + value + checksum.
pub const SERIAL_REQUEST_LEN: usize = 9;

/// Serial reply frame: reply address + module address + status + command echo
/// + value + checksum.
pub const SERIAL_REPLY_LEN: usize = 9;

/// CAN request frame: command + type + motor/bank + value. Addressing and
/// CRC live in the CAN layer.
pub const CAN_REQUEST_LEN: usize = 7;

/// CAN reply frame: module address + status + command echo + value.
pub const CAN_REPLY_LEN: usize = 7;

/// Which physical framing the bus speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Framing {
    /// RS-232/RS-485: 9-byte frames with target address and additive checksum.
    #[default]
    Serial,
    /// CAN: 7-byte payloads, address and checksum delegated to CAN framing.
    Can,
}

impl Framing {
    /// Wire size of a request frame under this framing.
    pub fn request_len(self) -> usize {
        match self {
            Framing::Serial => SERIAL_REQUEST_LEN,
            Framing::Can => CAN_REQUEST_LEN,
        }
    }

    /// Wire size of a reply frame under this framing.
    pub fn reply_len(self) -> usize {
        match self {
            Framing::Serial => SERIAL_REPLY_LEN,
            Framing::Can => CAN_REPLY_LEN,
        }
    }
}

/// Configuration for the frame codec.
#[derive(Debug, Clone, Default)]
pub struct FrameConfig {
    /// Physical framing. Default: serial.
    pub framing: Framing,
    /// Verify the checksum of incoming serial replies.
    ///
    /// The TMCL host side traditionally trusts reply integrity to the
    /// line and never re-checks; this matches that behavior when `false`
    /// (the default). Enable for stricter validation on noisy links.
    pub verify_reply_checksum: bool,
}

/// The TMCL additive checksum: the mod-256 running sum of all preceding
/// frame bytes. Wraps at every accumulation step. Not a CRC.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
}

/// Encode a request frame into `dst`.
///
/// Serial wire format:
/// ```text
/// ┌─────────┬─────────┬────────┬──────────┬──────────────┬──────────┐
/// │ Address │ Command │ Type   │ Mot/Bank │ Value        │ Checksum │
/// │ (1B)    │ (1B)    │ (1B)   │ (1B)     │ (4B BE i32)  │ (1B)     │
/// └─────────┴─────────┴────────┴──────────┴──────────────┴──────────┘
/// ```
/// CAN framing drops the address and checksum columns; `address` is
/// ignored there. Field widths are enforced by the types, so encoding
/// cannot fail.
pub fn encode_request(address: u8, instruction: &Instruction, framing: Framing, dst: &mut BytesMut) {
    dst.reserve(framing.request_len());
    let start = dst.len();

    if framing == Framing::Serial {
        dst.put_u8(address);
    }
    dst.put_u8(instruction.command.into());
    dst.put_u8(instruction.type_number);
    dst.put_u8(instruction.bank_or_axis);
    dst.put_i32(instruction.value);

    if framing == Framing::Serial {
        let sum = checksum(&dst[start..]);
        dst.put_u8(sum);
    }
}

/// Decode a reply frame.
///
/// `src` must be exactly the reply length of the configured framing.
/// The status byte is passed through raw; see
/// [`Reply::is_success`](crate::Reply::is_success) and the transaction
/// layer for classification.
pub fn decode_reply(src: &[u8], config: &FrameConfig) -> Result<Reply> {
    let expected = config.framing.reply_len();
    if src.len() != expected {
        return Err(FrameError::Length {
            expected,
            actual: src.len(),
        });
    }

    match config.framing {
        Framing::Serial => {
            let reply = Reply {
                reply_address: src[0],
                module_address: src[1],
                status: src[2],
                command: src[3],
                value: i32::from_be_bytes(src[4..8].try_into().expect("slice is 4 bytes")),
                checksum: src[8],
            };

            if config.verify_reply_checksum {
                let computed = checksum(&src[..8]);
                if computed != reply.checksum {
                    return Err(FrameError::Checksum {
                        expected: computed,
                        actual: reply.checksum,
                    });
                }
            }

            Ok(reply)
        }
        // CAN framing has no addressing or checksum bytes of its own; the
        // decoded record zeroes those fields.
        Framing::Can => Ok(Reply {
            reply_address: 0,
            module_address: src[0],
            status: src[1],
            command: src[2],
            value: i32::from_be_bytes(src[3..7].try_into().expect("slice is 4 bytes")),
            checksum: 0,
        }),
    }
}
