use num_enum::{IntoPrimitive, TryFromPrimitive};

/// TMCL instruction opcodes.
///
/// The numeric codes are fixed by the TMCL reference and shared by all
/// module generations. Motion and parameter commands (1–15, 29–36) work in
/// direct mode; the 64-series are user functions and the 128-series are
/// TMCL application control commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Command {
    /// ROR — rotate right (increasing position counter).
    Ror = 1,
    /// ROL — rotate left (decreasing position counter).
    Rol = 2,
    /// MST — motor stop.
    Mst = 3,
    /// MVP — move to position (absolute, relative or coordinate).
    Mvp = 4,
    /// SAP — set axis parameter.
    Sap = 5,
    /// GAP — get axis parameter.
    Gap = 6,
    /// STAP — store axis parameter into EEPROM.
    Stap = 7,
    /// RSAP — restore axis parameter from EEPROM.
    Rsap = 8,
    /// SGP — set global parameter.
    Sgp = 9,
    /// GGP — get global parameter.
    Ggp = 10,
    /// STGP — store global parameter into EEPROM.
    Stgp = 11,
    /// RSGP — restore global parameter from EEPROM.
    Rsgp = 12,
    /// RFS — reference search (start/stop/status).
    Rfs = 13,
    /// SIO — set digital output.
    Sio = 14,
    /// GIO — get digital input.
    Gio = 15,
    /// CALC — calculate using the accumulator and a constant.
    Calc = 19,
    /// COMP — compare accumulator with a constant.
    Comp = 20,
    /// JC — jump conditional.
    Jc = 21,
    /// JA — jump always.
    Ja = 22,
    /// CSUB — call subroutine.
    Csub = 23,
    /// RSUB — return from subroutine.
    Rsub = 24,
    /// WAIT — wait for a specified event.
    Wait = 27,
    /// STOP — end of a TMCL program.
    Stop = 28,
    /// SAC — access to an external SPI device.
    Sac = 29,
    /// SCO — store coordinate.
    Sco = 30,
    /// GCO — get coordinate.
    Gco = 31,
    /// CCO — capture coordinate.
    Cco = 32,
    /// CALCX — calculate using the accumulator and the X register.
    CalcX = 33,
    /// AAP — copy accumulator to an axis parameter.
    Aap = 34,
    /// AGP — copy accumulator to a global parameter.
    Agp = 35,
    /// CLE — clear error flags.
    Cle = 36,
    /// UF0–UF7 — user-definable functions.
    UserFunction0 = 64,
    UserFunction1 = 65,
    UserFunction2 = 66,
    UserFunction3 = 67,
    UserFunction4 = 68,
    UserFunction5 = 69,
    UserFunction6 = 70,
    UserFunction7 = 71,
    StopApplication = 128,
    RunApplication = 129,
    StepApplication = 130,
    ResetApplication = 131,
    StartDownloadMode = 132,
    QuitDownloadMode = 133,
    ReadTmclMemory = 134,
    GetApplicationStatus = 135,
    GetFirmwareVersion = 136,
    RestoreFactorySettings = 137,
}

impl Command {
    /// The TMCL mnemonic for this opcode, as printed in the reference
    /// manual and the TMCL IDE.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Command::Ror => "ROR",
            Command::Rol => "ROL",
            Command::Mst => "MST",
            Command::Mvp => "MVP",
            Command::Sap => "SAP",
            Command::Gap => "GAP",
            Command::Stap => "STAP",
            Command::Rsap => "RSAP",
            Command::Sgp => "SGP",
            Command::Ggp => "GGP",
            Command::Stgp => "STGP",
            Command::Rsgp => "RSGP",
            Command::Rfs => "RFS",
            Command::Sio => "SIO",
            Command::Gio => "GIO",
            Command::Calc => "CALC",
            Command::Comp => "COMP",
            Command::Jc => "JC",
            Command::Ja => "JA",
            Command::Csub => "CSUB",
            Command::Rsub => "RSUB",
            Command::Wait => "WAIT",
            Command::Stop => "STOP",
            Command::Sac => "SAC",
            Command::Sco => "SCO",
            Command::Gco => "GCO",
            Command::Cco => "CCO",
            Command::CalcX => "CALCX",
            Command::Aap => "AAP",
            Command::Agp => "AGP",
            Command::Cle => "CLE",
            Command::UserFunction0 => "UF0",
            Command::UserFunction1 => "UF1",
            Command::UserFunction2 => "UF2",
            Command::UserFunction3 => "UF3",
            Command::UserFunction4 => "UF4",
            Command::UserFunction5 => "UF5",
            Command::UserFunction6 => "UF6",
            Command::UserFunction7 => "UF7",
            Command::StopApplication => "STOP_APPLICATION",
            Command::RunApplication => "RUN_APPLICATION",
            Command::StepApplication => "STEP_APPLICATION",
            Command::ResetApplication => "RESET_APPLICATION",
            Command::StartDownloadMode => "START_DOWNLOAD_MODE",
            Command::QuitDownloadMode => "QUIT_DOWNLOAD_MODE",
            Command::ReadTmclMemory => "READ_TMCL_MEMORY",
            Command::GetApplicationStatus => "GET_APPLICATION_STATUS",
            Command::GetFirmwareVersion => "GET_FIRMWARE_VERSION",
            Command::RestoreFactorySettings => "RESTORE_FACTORY_SETTINGS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcodes_match_reference() {
        assert_eq!(u8::from(Command::Ror), 1);
        assert_eq!(u8::from(Command::Gap), 6);
        assert_eq!(u8::from(Command::Ggp), 10);
        assert_eq!(u8::from(Command::Cco), 32);
        assert_eq!(u8::from(Command::GetFirmwareVersion), 136);
    }

    #[test]
    fn opcode_round_trips_through_u8() {
        let cmd = Command::try_from(13u8).unwrap();
        assert_eq!(cmd, Command::Rfs);
        assert_eq!(cmd.mnemonic(), "RFS");
    }

    #[test]
    fn unassigned_opcode_is_rejected() {
        assert!(Command::try_from(200u8).is_err());
        assert!(Command::try_from(0u8).is_err());
    }
}
