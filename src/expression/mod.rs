//! Whole-line parsing: five schedule fields plus the command.

pub mod assemble;
pub mod record;

pub use assemble::assemble;
pub use record::{CronExpression, OutputField};
