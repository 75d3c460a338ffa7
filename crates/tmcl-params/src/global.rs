use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The three global-parameter banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Bank {
    /// Bank 0: module configuration (serial address, baud rate, CAN ids,
    /// protection, application state). Ids 64..128 live in EEPROM only,
    /// so SGP on them always stores permanently.
    Configuration = 0,
    /// Bank 1: user C variables.
    UserC = 1,
    /// Bank 2: user TMCL variables. Ids 0..55 are general purpose; 56..63
    /// are automatically restored from EEPROM after power-on.
    UserTmcl = 2,
}

/// A reference to one global parameter: bank plus id.
///
/// Named module configuration parameters are provided as consts below;
/// user variables are built with [`GlobalParam::user_c`] and
/// [`GlobalParam::user_tmcl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalParam {
    pub bank: Bank,
    pub id: u8,
}

impl GlobalParam {
    /// Reference a parameter by bank and id.
    pub const fn new(bank: Bank, id: u8) -> Self {
        Self { bank, id }
    }

    /// Reference user C variable `n` (bank 1).
    pub const fn user_c(n: u8) -> Self {
        Self::new(Bank::UserC, n)
    }

    /// Reference user TMCL variable `n` (bank 2).
    pub const fn user_tmcl(n: u8) -> Self {
        Self::new(Bank::UserTmcl, n)
    }
}

/// Writing anything but 0xE4 resets axis and global parameters to factory
/// defaults at the next power-up. RWE.
pub const EEPROM_RESET: GlobalParam = GlobalParam::new(Bank::Configuration, 64);

/// RS-232/RS-485 baud rate selector, 0 (9600) .. 7 (115200). RWE.
pub const BAUD_RATE: GlobalParam = GlobalParam::new(Bank::Configuration, 65);

/// The module (target) address for RS-232 and RS-485. RWE.
pub const SERIAL_ADDRESS: GlobalParam = GlobalParam::new(Bank::Configuration, 66);

/// TMCL ASCII interface configuration. RWE.
pub const ASCII_MODE: GlobalParam = GlobalParam::new(Bank::Configuration, 67);

/// CAN bit rate selector, 1 (10kBit/s) .. 8 (1MBit/s). RWE.
pub const CAN_BIT_RATE: GlobalParam = GlobalParam::new(Bank::Configuration, 69);

/// CAN id the module replies with. RWE.
pub const CAN_REPLY_ID: GlobalParam = GlobalParam::new(Bank::Configuration, 70);

/// CAN id the module listens on. RWE.
pub const CAN_ID: GlobalParam = GlobalParam::new(Bank::Configuration, 71);

/// Locks SGP against overwriting stored global parameters. RWE.
pub const EEPROM_LOCK: GlobalParam = GlobalParam::new(Bank::Configuration, 73);

/// Encoder interface configuration. RWE.
pub const ENCODER_INTERFACE: GlobalParam = GlobalParam::new(Bank::Configuration, 74);

/// Pause time before a reply is sent on RS-485. RWE.
pub const TELEGRAM_PAUSE_TIME: GlobalParam = GlobalParam::new(Bank::Configuration, 75);

/// Host address used in replies. RWE.
pub const SERIAL_HOST_ADDRESS: GlobalParam = GlobalParam::new(Bank::Configuration, 76);

/// Autostart the stored TMCL application after power-on. RWE.
pub const AUTO_START_MODE: GlobalParam = GlobalParam::new(Bank::Configuration, 77);

/// Shutdown pin mode. RWE.
pub const SHUTDOWN_PIN_MODE: GlobalParam = GlobalParam::new(Bank::Configuration, 80);

/// Protects the stored TMCL application against reading. RWE.
pub const CODE_PROTECTION: GlobalParam = GlobalParam::new(Bank::Configuration, 81);

/// Status of the TMCL application: 0 stop, 1 run, 2 step, 3 reset. R.
pub const APPLICATION_STATUS: GlobalParam = GlobalParam::new(Bank::Configuration, 128);

/// Whether the module is in download mode. R.
pub const DOWNLOAD_MODE: GlobalParam = GlobalParam::new(Bank::Configuration, 129);

/// Index of the currently executed TMCL instruction. R.
pub const PROGRAM_COUNTER: GlobalParam = GlobalParam::new(Bank::Configuration, 130);

/// Free-running millisecond counter, resettable. RW.
pub const TICK_TIMER: GlobalParam = GlobalParam::new(Bank::Configuration, 132);
