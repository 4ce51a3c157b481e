use std::fmt;

/// One of the four arithmetic operations available to combine numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// The fixed order in which the search tries operations
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Apply the operation to a pair of operands
    ///
    /// Returns `None` when the pairing produces no usable result: division by
    /// zero, division with a remainder (only exact integer quotients count),
    /// or a result that does not fit in `i64`.
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Operation::Add => lhs.checked_add(rhs),
            Operation::Sub => lhs.checked_sub(rhs),
            Operation::Mul => lhs.checked_mul(rhs),
            Operation::Div => match lhs.checked_rem(rhs) {
                Some(0) => lhs.checked_div(rhs),
                _ => None,
            },
        }
    }

    /// Whether swapping the operands always yields the same result
    pub fn is_commutative(self) -> bool {
        matches!(self, Operation::Add | Operation::Mul)
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
