use num_enum::IntoPrimitive;
use tmcl_frame::{Command, Reply};
use tmcl_params::axis;
use tmcl_transport::Transport;

use crate::bus::Bus;
use crate::error::{Result, ValidationError};

/// Upper velocity bound accepted by all known modules except the
/// TMCM-100 (which takes 8191); override with
/// [`Motor::with_max_velocity`].
pub const DEFAULT_MAX_VELOCITY: i32 = 2047;

/// Positions and offsets must stay within ±2^23 (boundary inclusive).
pub const POSITION_LIMIT: i32 = 1 << 23;

/// Commands that may target a motor axis. Everything else must go
/// through [`Module::send`](crate::Module::send).
const AXIS_COMMANDS: [Command; 12] = [
    Command::Ror,
    Command::Rol,
    Command::Mst,
    Command::Mvp,
    Command::Sap,
    Command::Gap,
    Command::Stap,
    Command::Rsap,
    Command::Rfs,
    Command::Sco,
    Command::Gco,
    Command::Cco,
];

/// Reference-search control codes (RFS).
///
/// The search itself runs in firmware; this layer only issues the
/// control codes. Poll with [`Motor::reference_search`] passing
/// [`RfsAction::Status`] — a non-zero reply value means the search is
/// still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum RfsAction {
    Start = 0,
    Stop = 1,
    Status = 2,
}

/// A motor addressing handle: one axis on one module.
///
/// Bounds are enforced client-side — out-of-range velocities or
/// positions and non-axis commands fail before anything touches the
/// wire.
pub struct Motor<'a, T> {
    bus: &'a mut Bus<T>,
    address: u8,
    axis: u8,
    max_velocity: i32,
}

impl<'a, T: Transport> Motor<'a, T> {
    pub(crate) fn new(bus: &'a mut Bus<T>, address: u8, axis: u8) -> Self {
        Self {
            bus,
            address,
            axis,
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }

    /// Override the velocity bound used by [`rotate_left`] /
    /// [`rotate_right`].
    ///
    /// [`rotate_left`]: Motor::rotate_left
    /// [`rotate_right`]: Motor::rotate_right
    pub fn with_max_velocity(mut self, max_velocity: i32) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    /// The axis id this handle targets.
    pub fn axis(&self) -> u8 {
        self.axis
    }

    /// Send an axis-scoped TMCL command to this motor.
    ///
    /// Only the axis command subset is permitted; anything else fails
    /// with [`ValidationError::CommandNotPermitted`] without a
    /// transaction.
    pub fn send(&mut self, command: Command, type_number: u8, value: i32) -> Result<Reply> {
        if !AXIS_COMMANDS.contains(&command) {
            return Err(ValidationError::CommandNotPermitted(command).into());
        }
        self.bus
            .send(self.address, command, type_number, self.axis, value)
    }

    /// Read an axis parameter (GAP).
    pub fn get_axis_param(&mut self, param: u8) -> Result<i32> {
        let reply = self.send(Command::Gap, param, 0)?;
        Ok(reply.value)
    }

    /// Write an axis parameter (SAP).
    pub fn set_axis_param(&mut self, param: u8, value: i32) -> Result<Reply> {
        self.send(Command::Sap, param, value)
    }

    /// Store an axis parameter's current value into EEPROM (STAP).
    pub fn store_axis_param(&mut self, param: u8) -> Result<Reply> {
        self.send(Command::Stap, param, 0)
    }

    /// Restore an axis parameter from EEPROM (RSAP).
    pub fn restore_axis_param(&mut self, param: u8) -> Result<Reply> {
        self.send(Command::Rsap, param, 0)
    }

    /// Stop the motor (MST).
    pub fn stop(&mut self) -> Result<Reply> {
        self.send(Command::Mst, 0, 0)
    }

    /// Rotate in "left" direction, decreasing the position counter (ROL).
    pub fn rotate_left(&mut self, velocity: i32) -> Result<Reply> {
        self.check_velocity(velocity)?;
        self.send(Command::Rol, 0, velocity)
    }

    /// Rotate in "right" direction, increasing the position counter (ROR).
    pub fn rotate_right(&mut self, velocity: i32) -> Result<Reply> {
        self.check_velocity(velocity)?;
        self.send(Command::Ror, 0, velocity)
    }

    /// Move to an absolute position within ±2^23 (MVP ABS).
    ///
    /// Ramps are generated by the module; the speed and acceleration
    /// limits come from the MAX_POSITIONING_SPEED and MAX_ACCELERATION
    /// axis parameters.
    pub fn move_absolute(&mut self, position: i32) -> Result<Reply> {
        check_position("position", position)?;
        self.send(Command::Mvp, 0, position)
    }

    /// Move by an offset relative to the current position (MVP REL).
    /// The resulting position must stay within ±2^23.
    pub fn move_relative(&mut self, offset: i32) -> Result<Reply> {
        check_position("offset", offset)?;
        self.send(Command::Mvp, 1, offset)
    }

    /// Start, stop or poll the firmware reference search (RFS).
    ///
    /// This layer does not await completion — loop on
    /// [`RfsAction::Status`] and inspect the reply value.
    pub fn reference_search(&mut self, action: RfsAction) -> Result<Reply> {
        self.send(Command::Rfs, action.into(), 0)
    }

    /// Store `position` into coordinate slot `number` (SCO).
    pub fn store_coordinate(&mut self, number: u8, position: i32) -> Result<Reply> {
        check_position("coordinate", position)?;
        self.send(Command::Sco, number, position)
    }

    /// Read coordinate slot `number` (GCO).
    pub fn get_coordinate(&mut self, number: u8) -> Result<i32> {
        let reply = self.send(Command::Gco, number, 0)?;
        Ok(reply.value)
    }

    /// Capture the current position into coordinate slot `number` (CCO).
    pub fn capture_coordinate(&mut self, number: u8) -> Result<Reply> {
        self.send(Command::Cco, number, 0)
    }

    fn check_velocity(&self, velocity: i32) -> Result<()> {
        if !(0..=self.max_velocity).contains(&velocity) {
            return Err(ValidationError::OutOfRange {
                what: "velocity",
                value: velocity as i64,
                min: 0,
                max: self.max_velocity as i64,
            }
            .into());
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Axis parameter accessors. Each is a remote round trip; the
    // explicit getter/setter spelling keeps the I/O and its failure
    // modes visible at call sites.
    // ------------------------------------------------------------------

    /// Target position in position mode.
    pub fn target_position(&mut self) -> Result<i32> {
        self.get_axis_param(axis::TARGET_POSITION)
    }

    pub fn set_target_position(&mut self, value: i32) -> Result<()> {
        self.set_axis_param(axis::TARGET_POSITION, value).map(drop)
    }

    /// Current motor position.
    pub fn actual_position(&mut self) -> Result<i32> {
        self.get_axis_param(axis::ACTUAL_POSITION)
    }

    /// Overwrite the position counter (reference point setting only).
    pub fn set_actual_position(&mut self, value: i32) -> Result<()> {
        self.set_axis_param(axis::ACTUAL_POSITION, value).map(drop)
    }

    /// Target speed in velocity mode.
    pub fn target_speed(&mut self) -> Result<i32> {
        self.get_axis_param(axis::TARGET_SPEED)
    }

    pub fn set_target_speed(&mut self, value: i32) -> Result<()> {
        self.set_axis_param(axis::TARGET_SPEED, value).map(drop)
    }

    /// Current rotation speed.
    pub fn actual_speed(&mut self) -> Result<i32> {
        self.get_axis_param(axis::ACTUAL_SPEED)
    }

    pub fn max_positioning_speed(&mut self) -> Result<i32> {
        self.get_axis_param(axis::MAX_POSITIONING_SPEED)
    }

    pub fn set_max_positioning_speed(&mut self, value: i32) -> Result<()> {
        self.set_axis_param(axis::MAX_POSITIONING_SPEED, value)
            .map(drop)
    }

    pub fn max_acceleration(&mut self) -> Result<i32> {
        self.get_axis_param(axis::MAX_ACCELERATION)
    }

    pub fn set_max_acceleration(&mut self, value: i32) -> Result<()> {
        self.set_axis_param(axis::MAX_ACCELERATION, value).map(drop)
    }

    /// Motor current limit. Too-high values can damage the motor.
    pub fn max_current(&mut self) -> Result<i32> {
        self.get_axis_param(axis::MAX_CURRENT)
    }

    pub fn set_max_current(&mut self, value: i32) -> Result<()> {
        self.set_axis_param(axis::MAX_CURRENT, value).map(drop)
    }

    pub fn standby_current(&mut self) -> Result<i32> {
        self.get_axis_param(axis::STANDBY_CURRENT)
    }

    pub fn set_standby_current(&mut self, value: i32) -> Result<()> {
        self.set_axis_param(axis::STANDBY_CURRENT, value).map(drop)
    }

    /// Whether the actual position equals the target position.
    pub fn target_position_reached(&mut self) -> Result<bool> {
        Ok(self.get_axis_param(axis::TARGET_POSITION_REACHED)? == 1)
    }

    /// Logical state of the reference (left) switch.
    pub fn ref_switch_status(&mut self) -> Result<bool> {
        Ok(self.get_axis_param(axis::REF_SWITCH_STATUS)? == 1)
    }

    pub fn right_limit_status(&mut self) -> Result<bool> {
        Ok(self.get_axis_param(axis::RIGHT_LIMIT_SWITCH_STATUS)? == 1)
    }

    pub fn left_limit_status(&mut self) -> Result<bool> {
        Ok(self.get_axis_param(axis::LEFT_LIMIT_SWITCH_STATUS)? == 1)
    }

    pub fn right_limit_switch_disabled(&mut self) -> Result<bool> {
        Ok(self.get_axis_param(axis::RIGHT_LIMIT_SWITCH_DISABLE)? == 1)
    }

    pub fn set_right_limit_switch_disabled(&mut self, disabled: bool) -> Result<()> {
        self.set_axis_param(axis::RIGHT_LIMIT_SWITCH_DISABLE, i32::from(disabled))
            .map(drop)
    }

    pub fn left_limit_switch_disabled(&mut self) -> Result<bool> {
        Ok(self.get_axis_param(axis::LEFT_LIMIT_SWITCH_DISABLE)? == 1)
    }

    pub fn set_left_limit_switch_disabled(&mut self, disabled: bool) -> Result<()> {
        self.set_axis_param(axis::LEFT_LIMIT_SWITCH_DISABLE, i32::from(disabled))
            .map(drop)
    }
}

fn check_position(what: &'static str, value: i32) -> Result<()> {
    if !(-POSITION_LIMIT..=POSITION_LIMIT).contains(&value) {
        return Err(ValidationError::OutOfRange {
            what,
            value: value as i64,
            min: -POSITION_LIMIT as i64,
            max: POSITION_LIMIT as i64,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::BusError;
    use crate::testutil::{serial_reply, ScriptedTransport};

    use super::*;

    fn bus_with_reply(status: u8, value: i32) -> Bus<ScriptedTransport> {
        Bus::new(ScriptedTransport::replying(&serial_reply(status, value)))
    }

    #[test]
    fn non_axis_command_is_rejected_before_io() {
        let mut bus = bus_with_reply(100, 0);
        let err = bus.motor(1, 0).send(Command::Sgp, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            BusError::Validation(ValidationError::CommandNotPermitted(Command::Sgp))
        ));
        assert!(bus.get_ref().tx.is_empty());
    }

    #[test]
    fn every_allow_listed_command_reaches_the_wire() {
        for command in AXIS_COMMANDS {
            let mut bus = bus_with_reply(100, 0);
            bus.motor(1, 0).send(command, 0, 0).unwrap();
            assert_eq!(bus.get_ref().tx[1], u8::from(command));
        }
    }

    #[test]
    fn rotate_bounds_are_inclusive() {
        for velocity in [0, DEFAULT_MAX_VELOCITY] {
            let mut bus = bus_with_reply(100, 0);
            bus.motor(1, 0).rotate_left(velocity).unwrap();
            assert_eq!(bus.get_ref().tx.len(), 9);
        }

        for velocity in [-1, DEFAULT_MAX_VELOCITY + 1] {
            let mut bus = bus_with_reply(100, 0);
            let err = bus.motor(1, 0).rotate_right(velocity).unwrap_err();
            assert!(matches!(
                err,
                BusError::Validation(ValidationError::OutOfRange { what: "velocity", .. })
            ));
            assert!(bus.get_ref().tx.is_empty());
        }
    }

    #[test]
    fn configured_max_velocity_is_honored() {
        // TMCM-100 accepts velocities up to 8191.
        let mut bus = bus_with_reply(100, 0);
        bus.motor(1, 0)
            .with_max_velocity(8191)
            .rotate_right(5000)
            .unwrap();
        assert_eq!(bus.get_ref().tx.len(), 9);
    }

    #[test]
    fn move_bounds_accept_exactly_two_to_the_23() {
        for position in [POSITION_LIMIT, -POSITION_LIMIT] {
            let mut bus = bus_with_reply(100, 0);
            bus.motor(1, 0).move_absolute(position).unwrap();
        }

        for position in [POSITION_LIMIT + 1, -POSITION_LIMIT - 1] {
            let mut bus = bus_with_reply(100, 0);
            assert!(bus.motor(1, 0).move_absolute(position).is_err());
            assert!(bus.motor(1, 0).move_relative(position).is_err());
        }
    }

    #[test]
    fn relative_move_uses_mvp_type_one() {
        let mut bus = bus_with_reply(100, 0);
        bus.motor(1, 2).move_relative(-4000).unwrap();

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Mvp));
        assert_eq!(tx[2], 1); // REL
        assert_eq!(tx[3], 2); // axis
    }

    #[test]
    fn reference_search_sends_the_control_code() {
        let mut bus = bus_with_reply(100, 1);
        bus.motor(1, 0).reference_search(RfsAction::Status).unwrap();

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Rfs));
        assert_eq!(tx[2], 2);
    }

    #[test]
    fn stop_sends_mst_for_the_bound_axis() {
        let mut bus = bus_with_reply(100, 0);
        bus.motor(1, 3).stop().unwrap();

        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Mst));
        assert_eq!(tx[3], 3);
    }

    #[test]
    fn limit_switch_flags_round_trip_as_bools() {
        let mut bus = bus_with_reply(100, 1);
        assert!(bus.motor(1, 0).left_limit_switch_disabled().unwrap());

        let mut bus = bus_with_reply(100, 0);
        bus.motor(1, 0)
            .set_right_limit_switch_disabled(true)
            .unwrap();
        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Sap));
        assert_eq!(tx[2], axis::RIGHT_LIMIT_SWITCH_DISABLE);
        assert_eq!(&tx[4..8], &[0, 0, 0, 1]);
    }

    #[test]
    fn coordinate_slots_are_stored_and_read_back() {
        let mut bus = bus_with_reply(100, 0);
        bus.motor(1, 0).store_coordinate(5, 120_000).unwrap();
        let tx = &bus.get_ref().tx;
        assert_eq!(tx[1], u8::from(Command::Sco));
        assert_eq!(tx[2], 5);

        let mut bus = bus_with_reply(100, 120_000);
        assert_eq!(bus.motor(1, 0).get_coordinate(5).unwrap(), 120_000);
    }
}
