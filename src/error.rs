use failure::Fail;
use std::fmt;

/// Which side of a two-operand comparison a value came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// An operand has no exact representation in the requested target type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Fail)]
#[fail(display = "{} operand does not fit in {}", operand, target)]
pub struct CoercionError {
    pub operand: Operand,
    pub target: &'static str,
}

impl CoercionError {
    pub(crate) fn new<T>(operand: Operand) -> Self {
        CoercionError { operand, target: std::any::type_name::<T>() }
    }
}
