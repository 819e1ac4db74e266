use std::fmt::{Display, Formatter};

use snafu::Snafu;

/// A value of the three-valued logic, totally ordered: `False < Neutral < True`.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Trit {
    False = 0,
    Neutral = 1,
    True = 2,
}

impl Trit {
    pub const ALL: [Trit; 3] = [Trit::False, Trit::Neutral, Trit::True];

    /// Returns the ordinal encoding (0, 1 or 2).
    pub const fn get(self) -> i32 {
        self as i32
    }

    /// Converts an arbitrary integer, clamping out-of-range values:
    /// non-positive to `False`, 2 and above to `True`.
    pub const fn from_int(value: i32) -> Self {
        if value <= 0 {
            Trit::False
        } else if value >= 2 {
            Trit::True
        } else {
            Trit::Neutral
        }
    }
}

impl Display for Trit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

// Into<i32>
impl From<Trit> for i32 {
    fn from(trit: Trit) -> Self {
        trit.get()
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("Invalid trit value: {}", value))]
pub struct InvalidTritValueError {
    value: i32,
}

impl TryFrom<i32> for Trit {
    type Error = InvalidTritValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Trit::False),
            1 => Ok(Trit::Neutral),
            2 => Ok(Trit::True),
            _ => InvalidTritValueSnafu { value }.fail(),
        }
    }
}
