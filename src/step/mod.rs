//! Step records and the derivation built from them

mod display;
mod record;

pub use record::{Derivation, Step};
