use std::fmt::{Display, Formatter};

use snafu::Snafu;

use crate::trit::Trit;

/// An operator of the task board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    Not = 0,
    And = 1,
    Or = 2,
    Xor = 3,
    Imply = 4,
}

impl Op {
    pub const ALL: [Op; 5] = [Op::Not, Op::And, Op::Or, Op::Xor, Op::Imply];

    /// Returns the integer discriminator.
    pub const fn get(self) -> i32 {
        self as i32
    }

    /// Number of operands the operator consumes.
    pub const fn arity(self) -> usize {
        match self {
            Op::Not => 1,
            _ => 2,
        }
    }

    /// The uppercase name used on board labels.
    pub const fn name(self) -> &'static str {
        match self {
            Op::Not => "NOT",
            Op::And => "AND",
            Op::Or => "OR",
            Op::Xor => "XOR",
            Op::Imply => "IMPLY",
        }
    }

    /// Applies the operator to already-evaluated operands.
    /// `Not` consumes only `lhs` and ignores `rhs`.
    pub fn apply(self, lhs: Trit, rhs: Trit) -> Trit {
        match self {
            Op::Not => lhs.not(),
            Op::And => lhs.and(rhs),
            Op::Or => lhs.or(rhs),
            Op::Xor => lhs.xor(rhs),
            Op::Imply => lhs.imply_kleene(rhs),
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Op::Not => "~",
                Op::And => "&",
                Op::Or => "|",
                Op::Xor => "^",
                Op::Imply => "->",
            }
        )
    }
}

// Into<i32>
impl From<Op> for i32 {
    fn from(op: Op) -> Self {
        op.get()
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("Invalid operator value: {}", value))]
pub struct InvalidOperatorError {
    value: i32,
}

impl TryFrom<i32> for Op {
    type Error = InvalidOperatorError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Op::Not),
            1 => Ok(Op::And),
            2 => Ok(Op::Or),
            3 => Ok(Op::Xor),
            4 => Ok(Op::Imply),
            _ => InvalidOperatorSnafu { value }.fail(),
        }
    }
}
