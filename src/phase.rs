use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Red,
    Green,
}

impl Phase {
    pub fn toggled(self) -> Phase {
        match self {
            Phase::Red => Phase::Green,
            Phase::Green => Phase::Red,
        }
    }

    pub fn is_green(self) -> bool {
        self == Phase::Green
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Phase::Red => 0,
            Phase::Green => 1,
        }
    }

    pub(crate) fn from_u8(b: u8) -> Option<Phase> {
        match b {
            0 => Some(Phase::Red),
            1 => Some(Phase::Green),
            _ => None,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Red
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Red => write!(f, "red"),
            Phase::Green => write!(f, "green"),
        }
    }
}
