use std::io::{self, Cursor, Read, Write};

use tmcl_frame::checksum;

/// In-memory transport double: replies come from a canned buffer,
/// requests are captured for inspection.
pub struct ScriptedTransport {
    pub rx: Cursor<Vec<u8>>,
    pub tx: Vec<u8>,
}

impl ScriptedTransport {
    pub fn replying(reply: &[u8]) -> Self {
        Self {
            rx: Cursor::new(reply.to_vec()),
            tx: Vec::new(),
        }
    }
}

impl Read for ScriptedTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.rx.read(buf)
    }
}

impl Write for ScriptedTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.tx.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A well-formed 9-byte serial reply from module 1 to host 2.
pub fn serial_reply(status: u8, value: i32) -> [u8; 9] {
    serial_reply_echoing(status, 0, value)
}

/// Same, with an explicit command echo byte.
pub fn serial_reply_echoing(status: u8, command: u8, value: i32) -> [u8; 9] {
    let mut frame = [0u8; 9];
    frame[0] = 2;
    frame[1] = 1;
    frame[2] = status;
    frame[3] = command;
    frame[4..8].copy_from_slice(&value.to_be_bytes());
    frame[8] = checksum(&frame[..8]);
    frame
}

/// A well-formed 7-byte CAN reply from module 1.
pub fn can_reply(status: u8, value: i32) -> [u8; 7] {
    let mut frame = [0u8; 7];
    frame[0] = 1;
    frame[1] = status;
    frame[2] = 0;
    frame[3..7].copy_from_slice(&value.to_be_bytes());
    frame
}
