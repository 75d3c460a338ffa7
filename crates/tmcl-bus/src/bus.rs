use bytes::BytesMut;
use tmcl_frame::{
    decode_reply, encode_request, status_message, Command, FrameConfig, Instruction, Reply,
    SERIAL_REPLY_LEN,
};
use tmcl_transport::Transport;
use tracing::{debug, trace};

use crate::error::{BusError, Result};
use crate::module::Module;
use crate::motor::Motor;

/// Drives single request→reply transactions against a shared TMCL bus.
///
/// Exactly one write and one read per call; the blocking read duration
/// is whatever timeout the transport was configured with.
pub struct Bus<T> {
    transport: T,
    config: FrameConfig,
    buf: BytesMut,
}

impl<T: Transport> Bus<T> {
    /// Create a bus with the default serial framing.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, FrameConfig::default())
    }

    /// Create a bus with explicit framing configuration.
    pub fn with_config(transport: T, config: FrameConfig) -> Self {
        Self {
            transport,
            config,
            buf: BytesMut::with_capacity(SERIAL_REPLY_LEN),
        }
    }

    /// The active codec configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Address the module at `address`.
    pub fn module(&mut self, address: u8) -> Module<'_, T> {
        Module::new(self, address)
    }

    /// Address axis `axis` on the module at `address`.
    pub fn motor(&mut self, address: u8, axis: u8) -> Motor<'_, T> {
        Motor::new(self, address, axis)
    }

    /// Send a command tuple and wait for the reply.
    ///
    /// Fails with [`BusError::Protocol`] when the module answers with an
    /// error-class status. Success-class replies (100 and 101) are
    /// returned unchanged — callers that distinguish `SUCCESS` from
    /// `COMMAND_LOADED` must inspect `status` themselves.
    pub fn send(
        &mut self,
        address: u8,
        command: Command,
        type_number: u8,
        bank_or_axis: u8,
        value: i32,
    ) -> Result<Reply> {
        self.transact(
            address,
            Instruction::new(command, type_number, bank_or_axis, value),
        )
    }

    /// Execute one full request→reply exchange.
    pub fn transact(&mut self, address: u8, instruction: Instruction) -> Result<Reply> {
        self.buf.clear();
        encode_request(address, &instruction, self.config.framing, &mut self.buf);
        trace!(
            address,
            command = instruction.command.mnemonic(),
            tx = ?&self.buf[..],
            "sending request"
        );
        self.transport.write_frame(&self.buf)?;

        let mut rx = [0u8; SERIAL_REPLY_LEN];
        let reply_len = self.config.framing.reply_len();
        self.transport.read_frame(&mut rx[..reply_len])?;

        let reply = decode_reply(&rx[..reply_len], &self.config)?;
        if !reply.is_success() {
            let message = status_message(reply.status);
            debug!(
                address,
                status = reply.status,
                message,
                "module reported error status"
            );
            return Err(BusError::Protocol {
                status: reply.status,
                message,
                reply,
            });
        }

        trace!(address, status = reply.status, value = reply.value, "reply ok");
        Ok(reply)
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the bus and return the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }
}

#[cfg(test)]
mod tests {
    use tmcl_frame::Framing;
    use tmcl_transport::TransportError;

    use super::*;
    use crate::testutil::{can_reply, serial_reply, ScriptedTransport};

    #[test]
    fn one_write_one_read_per_transaction() {
        let transport = ScriptedTransport::replying(&serial_reply(100, 0));
        let mut bus = Bus::new(transport);
        bus.send(1, Command::Mst, 0, 0, 0).unwrap();
        assert_eq!(bus.get_ref().tx.len(), 9);
    }

    #[test]
    fn success_statuses_pass_through() {
        for status in [100u8, 101] {
            let transport = ScriptedTransport::replying(&serial_reply(status, 7));
            let mut bus = Bus::new(transport);
            let reply = bus.send(1, Command::Gap, 1, 0, 0).unwrap();
            assert_eq!(reply.status, status);
            assert_eq!(reply.value, 7);
        }
    }

    #[test]
    fn error_statuses_become_protocol_errors_with_canonical_messages() {
        let expected = [
            (1u8, "Incorrect Checksum"),
            (2, "Invalid Command"),
            (3, "Wrong Type"),
            (4, "Invalid Value"),
            (5, "EEPROM Locked"),
            (6, "Command not Available"),
        ];

        for (status, message) in expected {
            let transport = ScriptedTransport::replying(&serial_reply(status, 0));
            let mut bus = Bus::new(transport);
            let err = bus.send(1, Command::Sap, 0, 0, 0).unwrap_err();
            match err {
                BusError::Protocol {
                    status: got,
                    message: got_message,
                    ..
                } => {
                    assert_eq!(got, status);
                    assert_eq!(got_message, message);
                }
                other => panic!("expected Protocol, got {other:?}"),
            }
        }
    }

    #[test]
    fn short_reply_is_a_transport_error() {
        let transport = ScriptedTransport::replying(&[2, 1, 100]);
        let mut bus = Bus::new(transport);
        let err = bus.send(1, Command::Mst, 0, 0, 0).unwrap_err();
        match err {
            BusError::Transport(TransportError::ShortRead { expected, actual }) => {
                assert_eq!(expected, 9);
                assert_eq!(actual, 3);
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
    }

    #[test]
    fn can_framing_reads_seven_byte_replies() {
        let transport = ScriptedTransport::replying(&can_reply(100, 88));
        let config = FrameConfig {
            framing: Framing::Can,
            ..FrameConfig::default()
        };
        let mut bus = Bus::with_config(transport, config);
        let reply = bus.send(1, Command::Gap, 3, 0, 0).unwrap();
        assert_eq!(reply.value, 88);
        assert_eq!(bus.get_ref().tx.len(), 7);
        assert_eq!(bus.get_ref().tx[0], u8::from(Command::Gap));
    }
}
