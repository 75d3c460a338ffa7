use crate::command::Command;

/// One outbound TMCL operation.
///
/// `type_number` disambiguates sub-modes of a command (absolute vs
/// relative MVP) or names the parameter id for GAP/SAP/GGP/SGP.
/// `bank_or_axis` is the motor/axis id for axis commands and the
/// parameter bank for global-parameter commands. `value` carries the
/// literal argument, or the value to write for set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    pub command: Command,
    pub type_number: u8,
    pub bank_or_axis: u8,
    pub value: i32,
}

impl Instruction {
    /// Build an instruction with all four fields.
    pub fn new(command: Command, type_number: u8, bank_or_axis: u8, value: i32) -> Self {
        Self {
            command,
            type_number,
            bank_or_axis,
            value,
        }
    }

    /// Build a bare command with zeroed type, motor/bank and value fields.
    pub fn bare(command: Command) -> Self {
        Self::new(command, 0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_zeroes_everything_but_the_opcode() {
        let inst = Instruction::bare(Command::Mst);
        assert_eq!(inst.command, Command::Mst);
        assert_eq!(inst.type_number, 0);
        assert_eq!(inst.bank_or_axis, 0);
        assert_eq!(inst.value, 0);
    }
}
