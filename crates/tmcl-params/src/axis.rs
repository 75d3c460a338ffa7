//! Axis-parameter ids for GAP/SAP/STAP/RSAP (and AAP).
//!
//! Access notes follow the reference manual: R = readable (GAP),
//! W = writable (SAP), E = automatically restored from EEPROM after
//! reset or power-on.

/// The desired position in position mode. Range ±2^23, RW.
pub const TARGET_POSITION: u8 = 0;

/// The current motor position. Only overwrite for reference point
/// setting. Range ±2^23, RW.
pub const ACTUAL_POSITION: u8 = 1;

/// The desired speed in velocity mode. In position mode this is set by
/// hardware. Range ±2047, RW.
pub const TARGET_SPEED: u8 = 2;

/// The current rotation speed. Should never be overwritten. Range
/// 0..2047, R.
pub const ACTUAL_SPEED: u8 = 3;

/// Speed limit for positioning moves. Range 0..2047, RWE.
pub const MAX_POSITIONING_SPEED: u8 = 4;

/// Acceleration (and deceleration) limit. Range 0..2047, RWE.
pub const MAX_ACCELERATION: u8 = 5;

/// Motor current limit. Too-high values can damage the motor. Range
/// module-dependent (0..1500 or 0..255), RWE.
pub const MAX_CURRENT: u8 = 6;

/// Current limit two seconds after the motor has stopped. Same range as
/// MAX_CURRENT, RWE.
pub const STANDBY_CURRENT: u8 = 7;

/// Set when the actual position equals the target position. 0/1, R.
pub const TARGET_POSITION_REACHED: u8 = 8;

/// Logical state of the reference (left) switch. 0/1, R.
pub const REF_SWITCH_STATUS: u8 = 9;

/// Logical state of the right limit switch. 0/1, R.
pub const RIGHT_LIMIT_SWITCH_STATUS: u8 = 10;

/// Logical state of the left limit switch. 0/1, R.
pub const LEFT_LIMIT_SWITCH_STATUS: u8 = 11;

/// Deactivates the right limit switch when set. 0/1, RWE.
pub const RIGHT_LIMIT_SWITCH_DISABLE: u8 = 12;

/// Deactivates the left limit switch when set. 0/1, RWE.
pub const LEFT_LIMIT_SWITCH_DISABLE: u8 = 13;

/// Lowest speed of the velocity ramp. Range 0..2047, RWE.
pub const MIN_SPEED: u8 = 130;

/// Current acceleration, set by hardware. R.
pub const ACTUAL_ACCELERATION: u8 = 135;

/// ADVANCED. Acceleration threshold between the low and high
/// acceleration current settings. RWE.
pub const ACCELERATION_THRESHOLD: u8 = 136;

/// ADVANCED. Exponent of the acceleration scaling divisor. RWE.
pub const ACCELERATION_DIVISOR: u8 = 137;

/// Ramp mode: 0 position, 1 soft, 2 velocity. RWE.
pub const RAMP_MODE: u8 = 138;

/// Position and reference-switch interrupt flags. RW.
pub const INTERRUPT_FLAGS: u8 = 139;

/// Microstep resolution: 0=full step .. 6=64 microsteps. RWE.
pub const MICROSTEP_RESOLUTION: u8 = 140;

/// Tolerated deviation between switching points in a reference search.
/// RWE.
pub const REF_SWITCH_TOLERANCE: u8 = 141;

/// Position snapshot latched on interrupt. R.
pub const SNAPSHOT_POSITION: u8 = 142;

/// ADVANCED. Current limit at rest. RWE.
pub const MAX_CURRENT_AT_REST: u8 = 143;

/// ADVANCED. Current limit at low acceleration. RWE.
pub const MAX_CURRENT_AT_LOW_ACCELERATION: u8 = 144;

/// ADVANCED. Current limit at high acceleration. RWE.
pub const MAX_CURRENT_AT_HIGH_ACCELERATION: u8 = 145;

/// ADVANCED. Acceleration scaling factor, recalculated when
/// MAX_ACCELERATION changes. RWE.
pub const ACCELERATION_FACTOR: u8 = 146;

/// Deactivates the stop function of the reference switch when set. RWE.
pub const REF_SWITCH_DISABLE_FLAG: u8 = 147;

/// Deactivates both limit switches when set. RWE.
pub const LIMIT_SWITCH_DISABLE_FLAG: u8 = 148;

/// Soft stop (ramp down) instead of hard stop at a switch. RWE.
pub const SOFT_STOP_FLAG: u8 = 149;

/// Latch position on reference-switch transitions. RW.
pub const POSITION_LATCH_FLAG: u8 = 151;

/// Interrupt mask for position/switch events. RW.
pub const INTERRUPT_MASK: u8 = 152;

/// ADVANCED. Exponent of the ramp scaling divisor. RWE.
pub const RAMP_DIVISOR: u8 = 153;

/// ADVANCED. Exponent of the step-rate divisor; adjust if speeds fall
/// outside 0..2047. RWE.
pub const PULSE_DIVISOR: u8 = 154;

/// Reference search mode (one, two or three switch modes). RWE.
pub const REFERENCING_MODE: u8 = 193;

/// Speed used while searching for the reference switch. RWE.
pub const REFERENCE_SEARCH_SPEED: u8 = 194;

/// Lower speed used for the switching-point calibration pass. RWE.
pub const REFERENCE_SWITCH_SPEED: u8 = 195;

/// ADVANCED. Chopper off-time setting of the driver. RWE.
pub const DRIVER_OFF_TIME: u8 = 198;

/// ADVANCED. Fast decay phase duration of the chopper. RWE.
pub const FAST_DECAY_TIME: u8 = 200;

/// ADVANCED. Threshold speed for switching to mixed decay. RWE.
pub const MIXED_DECAY_THRESHOLD: u8 = 203;

/// Time after standstill until the motor current is switched off
/// entirely (0 = never). RWE.
pub const FREEWHEELING: u8 = 204;

/// Stall detection sensitivity (stallGuard), 0 = off. RWE.
pub const STALL_DETECTION_THRESHOLD: u8 = 205;

/// Current load value used for stall detection. R.
pub const ACTUAL_LOAD_VALUE: u8 = 206;

/// Driver error flags (overtemperature, short circuit, ...). R.
pub const DRIVER_ERROR_FLAGS: u8 = 208;

/// Current position of an attached incremental encoder. RW.
pub const ENCODER_POSITION: u8 = 209;

/// Prescaler matching encoder resolution to motor resolution. RW.
pub const ENCODER_PRESCALER: u8 = 210;

/// Speed threshold above which the driver switches to full step. RWE.
pub const FULLSTEP_THRESHOLD: u8 = 211;

/// Maximum tolerated encoder deviation before the motor is stopped. RW.
pub const MAXIMUM_ENCODER_DEVIATION: u8 = 212;

/// Group index for addressing several motors with one command. RW.
pub const GROUP_INDEX: u8 = 213;
