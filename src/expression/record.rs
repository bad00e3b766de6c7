//! Parsed expression record.
//!
//! The record always holds exactly six fields in a fixed order:
//! minute, hour, day of month, month, day of week, command.

use crate::field::{FieldSpec, ValueSet};

use serde::{Serialize, Serializer};

pub const COMMAND_LABEL: &str = "command";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    pub minute: ValueSet,
    pub hour: ValueSet,
    pub day_of_month: ValueSet,
    pub month: ValueSet,
    pub day_of_week: ValueSet,
    pub command: String,
}

/// Borrowed view of one labelled field, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputField<'a> {
    Range {
        label: &'static str,
        values: &'a ValueSet,
    },
    Text {
        label: &'static str,
        command: &'a str,
    },
}

impl OutputField<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            OutputField::Range { label, .. } | OutputField::Text { label, .. } => *label,
        }
    }
}

impl CronExpression {
    pub fn fields(&self) -> [OutputField<'_>; 6] {
        [
            range(FieldSpec::MINUTE, &self.minute),
            range(FieldSpec::HOUR, &self.hour),
            range(FieldSpec::DAY_OF_MONTH, &self.day_of_month),
            range(FieldSpec::MONTH, &self.month),
            range(FieldSpec::DAY_OF_WEEK, &self.day_of_week),
            OutputField::Text {
                label: COMMAND_LABEL,
                command: &self.command,
            },
        ]
    }
}

fn range(spec: FieldSpec, values: &ValueSet) -> OutputField<'_> {
    OutputField::Range {
        label: spec.label,
        values,
    }
}

impl Serialize for CronExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.fields())
    }
}
