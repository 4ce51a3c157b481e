use crate::ops::Operation;

/// One arithmetic action: an operation, its two operands, and the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    op: Operation,
    lhs: i64,
    rhs: i64,
    result: i64,
}

/// The steps of a solution in the order they must be performed
///
/// Each operand of a step is either an original source number or the result
/// of an earlier step; the final step's result is the target.
pub type Derivation = Vec<Step>;

impl Step {
    pub fn new(op: Operation, lhs: i64, rhs: i64, result: i64) -> Self {
        Self {
            op,
            lhs,
            rhs,
            result,
        }
    }

    pub fn operation(&self) -> Operation {
        self.op
    }

    pub fn lhs(&self) -> i64 {
        self.lhs
    }

    pub fn rhs(&self) -> i64 {
        self.rhs
    }

    pub fn result(&self) -> i64 {
        self.result
    }
}
