use num_enum::{IntoPrimitive, TryFromPrimitive};

/// A decoded TMCL reply frame.
///
/// `status` is kept as the raw wire byte; classifying it into
/// success/error is the transaction layer's job, not the codec's.
/// For CAN framing `reply_address` and `checksum` are always zero —
/// the CAN layer carries addressing and integrity itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reply {
    pub reply_address: u8,
    pub module_address: u8,
    pub status: u8,
    /// Echo of the command opcode this reply answers.
    pub command: u8,
    pub value: i32,
    pub checksum: u8,
}

impl Reply {
    /// Whether the status byte is success-class (`>= 100`).
    ///
    /// Note that `COMMAND_LOADED` (101) is success-class but distinct
    /// from `SUCCESS` (100); callers that care must inspect `status`.
    pub fn is_success(&self) -> bool {
        self.status >= Status::Success as u8
    }
}

/// Reply status codes. Values `>= 100` are success-class; 1–6 are the
/// fixed error codes defined by the TMCL reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Status {
    WrongChecksum = 1,
    InvalidCommand = 2,
    WrongType = 3,
    InvalidValue = 4,
    EepromLocked = 5,
    CommandNotAvailable = 6,
    Success = 100,
    CommandLoaded = 101,
}

/// The canonical human-readable message for a status byte.
pub fn status_message(status: u8) -> &'static str {
    match Status::try_from(status) {
        Ok(Status::WrongChecksum) => "Incorrect Checksum",
        Ok(Status::InvalidCommand) => "Invalid Command",
        Ok(Status::WrongType) => "Wrong Type",
        Ok(Status::InvalidValue) => "Invalid Value",
        Ok(Status::EepromLocked) => "EEPROM Locked",
        Ok(Status::CommandNotAvailable) => "Command not Available",
        Ok(Status::Success) => "Success",
        Ok(Status::CommandLoaded) => "Command Loaded",
        Err(_) => "Unknown Status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_classification_uses_the_100_threshold() {
        let mut reply = Reply {
            reply_address: 2,
            module_address: 1,
            status: 100,
            command: 6,
            value: 0,
            checksum: 0,
        };
        assert!(reply.is_success());

        reply.status = 101;
        assert!(reply.is_success());

        for status in 1..=6 {
            reply.status = status;
            assert!(!reply.is_success());
        }
    }

    #[test]
    fn canonical_messages() {
        assert_eq!(status_message(1), "Incorrect Checksum");
        assert_eq!(status_message(4), "Invalid Value");
        assert_eq!(status_message(6), "Command not Available");
        assert_eq!(status_message(100), "Success");
        assert_eq!(status_message(42), "Unknown Status");
    }
}
