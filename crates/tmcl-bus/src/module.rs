use tmcl_frame::{Command, Reply};
use tmcl_params::GlobalParam;
use tmcl_transport::Transport;

use crate::bus::Bus;
use crate::error::Result;
use crate::motor::Motor;

/// A module addressing handle: one controller board on the bus.
///
/// Any TMCL command can be issued at module scope through [`send`];
/// the typed helpers cover global and axis parameter access. For
/// axis-scoped operation with client-side command gating, get a
/// [`Motor`] via [`Module::motor`].
///
/// [`send`]: Module::send
pub struct Module<'a, T> {
    bus: &'a mut Bus<T>,
    address: u8,
}

impl<'a, T: Transport> Module<'a, T> {
    pub(crate) fn new(bus: &'a mut Bus<T>, address: u8) -> Self {
        Self { bus, address }
    }

    /// The module's bus address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Re-scope this handle to axis `axis`.
    pub fn motor(self, axis: u8) -> Motor<'a, T> {
        Motor::new(self.bus, self.address, axis)
    }

    /// Send any TMCL command to this module.
    pub fn send(
        &mut self,
        command: Command,
        type_number: u8,
        bank_or_axis: u8,
        value: i32,
    ) -> Result<Reply> {
        self.bus
            .send(self.address, command, type_number, bank_or_axis, value)
    }

    /// Read a global parameter (GGP).
    pub fn get_global(&mut self, param: GlobalParam) -> Result<i32> {
        let reply = self.send(Command::Ggp, param.id, param.bank.into(), 0)?;
        Ok(reply.value)
    }

    /// Write a global parameter (SGP).
    ///
    /// Bank 0 parameters with ids 64..128 are EEPROM-backed, so writing
    /// them is always permanent.
    pub fn set_global(&mut self, param: GlobalParam, value: i32) -> Result<Reply> {
        self.send(Command::Sgp, param.id, param.bank.into(), value)
    }

    /// Store a global parameter's current value into EEPROM (STGP).
    pub fn store_global(&mut self, param: GlobalParam) -> Result<Reply> {
        self.send(Command::Stgp, param.id, param.bank.into(), 0)
    }

    /// Restore a global parameter from EEPROM (RSGP).
    pub fn restore_global(&mut self, param: GlobalParam) -> Result<Reply> {
        self.send(Command::Rsgp, param.id, param.bank.into(), 0)
    }

    /// Read an axis parameter from axis `axis` (GAP).
    pub fn get_axis_param(&mut self, axis: u8, param: u8) -> Result<i32> {
        let reply = self.send(Command::Gap, param, axis, 0)?;
        Ok(reply.value)
    }

    /// Write an axis parameter on axis `axis` (SAP).
    pub fn set_axis_param(&mut self, axis: u8, param: u8, value: i32) -> Result<Reply> {
        self.send(Command::Sap, param, axis, value)
    }

    /// Read user TMCL variable `n` (bank 2).
    pub fn get_user_variable(&mut self, n: u8) -> Result<i32> {
        self.get_global(GlobalParam::user_tmcl(n))
    }

    /// Write user TMCL variable `n` (bank 2). Variables 56..63 persist
    /// across power cycles.
    pub fn set_user_variable(&mut self, n: u8, value: i32) -> Result<Reply> {
        self.set_global(GlobalParam::user_tmcl(n), value)
    }

    /// Read the firmware version in binary format.
    ///
    /// The reply value packs the module type and the version digits; the
    /// layout is module-specific, see the module manual.
    pub fn firmware_version(&mut self) -> Result<i32> {
        let reply = self.send(Command::GetFirmwareVersion, 1, 0, 0)?;
        Ok(reply.value)
    }
}

#[cfg(test)]
mod tests {
    use tmcl_params::{Bank, GlobalParam, SERIAL_ADDRESS};

    use super::*;
    use crate::testutil::{serial_reply, ScriptedTransport};

    fn bus_with_reply(status: u8, value: i32) -> Bus<ScriptedTransport> {
        Bus::new(ScriptedTransport::replying(&serial_reply(status, value)))
    }

    #[test]
    fn get_global_issues_ggp_with_bank_and_id() {
        let mut bus = bus_with_reply(100, 1);
        let value = bus.module(1).get_global(SERIAL_ADDRESS).unwrap();
        assert_eq!(value, 1);

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Ggp));
        assert_eq!(tx[2], 66); // parameter id
        assert_eq!(tx[3], 0); // bank 0
    }

    #[test]
    fn set_global_issues_sgp_with_value() {
        let mut bus = bus_with_reply(100, 0);
        bus.module(1)
            .set_global(GlobalParam::new(Bank::Configuration, 65), 7)
            .unwrap();

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Sgp));
        assert_eq!(tx[2], 65);
        assert_eq!(tx[3], 0);
        assert_eq!(&tx[4..8], &[0, 0, 0, 7]);
    }

    #[test]
    fn user_variables_live_in_bank_two() {
        let mut bus = bus_with_reply(100, 42);
        let value = bus.module(1).get_user_variable(17).unwrap();
        assert_eq!(value, 42);

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Ggp));
        assert_eq!(tx[2], 17);
        assert_eq!(tx[3], 2);
    }

    #[test]
    fn axis_param_access_targets_the_given_axis() {
        let mut bus = bus_with_reply(100, 0);
        bus.module(3).set_axis_param(2, 4, 1500).unwrap();

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[0], 3); // module address
        assert_eq!(tx[1], u8::from(Command::Sap));
        assert_eq!(tx[2], 4); // parameter id
        assert_eq!(tx[3], 2); // axis
    }

    #[test]
    fn firmware_version_uses_binary_format() {
        let mut bus = bus_with_reply(100, 0x015A_0101);
        let version = bus.module(1).firmware_version().unwrap();
        assert_eq!(version, 0x015A_0101);

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], 136);
        assert_eq!(tx[2], 1);
    }
}
