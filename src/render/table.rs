//! Canonical table form: one line per field, label padded to a fixed gutter.
//!
//! minute        0 15 30 45
//! hour          0
//! ...
//! command       /usr/bin/find

use crate::expression::{CronExpression, OutputField};

use std::fmt;

pub const LABEL_WIDTH: usize = 14;

pub fn render_table(expr: &CronExpression) -> String {
    expr.to_string()
}

impl fmt::Display for OutputField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<width$}", self.label(), width = LABEL_WIDTH)?;
        match self {
            OutputField::Range { values, .. } => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
            OutputField::Text { command, .. } => f.write_str(command),
        }
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}
