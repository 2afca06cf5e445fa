//! Command codes understood by the rover.
//!
//! A mission's command string is interpreted one character at a time.
//! `M` moves one cell forward, `L` and `R` rotate in place. Every other
//! character is tolerated and skipped; it still consumes a paced step.

/// A recognized single-character command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    Move,
    TurnLeft,
    TurnRight,
}

impl Command {
    pub const MOVE: char = 'M';
    pub const TURN_LEFT: char = 'L';
    pub const TURN_RIGHT: char = 'R';

    /// Decodes a command character. Unknown characters yield `None`.
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            Self::MOVE => Some(Command::Move),
            Self::TURN_LEFT => Some(Command::TurnLeft),
            Self::TURN_RIGHT => Some(Command::TurnRight),
            _ => None,
        }
    }

    pub const fn code(self) -> char {
        match self {
            Command::Move => Self::MOVE,
            Command::TurnLeft => Self::TURN_LEFT,
            Command::TurnRight => Self::TURN_RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_codes() {
        assert_eq!(Command::from_code('M'), Some(Command::Move));
        assert_eq!(Command::from_code('L'), Some(Command::TurnLeft));
        assert_eq!(Command::from_code('R'), Some(Command::TurnRight));
    }

    #[test]
    fn unknown_and_lowercase_codes_are_ignored() {
        for code in ['m', 'l', 'x', ' ', '1', 'é'] {
            assert_eq!(Command::from_code(code), None, "{code:?} should be ignored");
        }
    }

    #[test]
    fn code_inverts_from_code() {
        for command in [Command::Move, Command::TurnLeft, Command::TurnRight] {
            assert_eq!(Command::from_code(command.code()), Some(command));
        }
    }
}
