//! Single-field expansion: bounds configuration + the token evaluator.

pub mod eval;
pub mod spec;

pub use eval::{ValueSet, evaluate};
pub use spec::FieldSpec;
