use std::fmt;

use crate::step::record::Step;

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs(),
            self.operation(),
            self.rhs(),
            self.result()
        )
    }
}
