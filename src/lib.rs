//! Cron expression expansion.
//!
//! Turns `*/15 0 1,15 * 1-5 /usr/bin/find` into the explicit set of values
//! each schedule field permits, plus the command text.

pub mod crontab;
pub mod error;
pub mod expression;
pub mod field;
pub mod render;

pub use error::CronError;
pub use expression::{CronExpression, OutputField, assemble};
pub use field::{FieldSpec, ValueSet, evaluate};

pub type Result<T, E = CronError> = std::result::Result<T, E>;
