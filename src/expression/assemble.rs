use crate::Result;
use crate::error::CronError;
use crate::expression::CronExpression;
use crate::field::FieldSpec;

use std::str::FromStr;
use tracing::debug;

/// Parse `min hour dom month dow command...` into a [`CronExpression`].
///
/// Fields are evaluated left to right; the first failing field is returned
/// as is.
pub fn assemble(line: &str) -> Result<CronExpression> {
    if line.trim_matches(is_separator).is_empty() {
        return Err(CronError::EmptyInput { field: None });
    }

    let (tokens, command) = split_line(line);
    let [minute, hour, day_of_month, month, day_of_week] = match tokens.as_slice() {
        &[a, b, c, d, e] if !command.is_empty() => [a, b, c, d, e],
        _ => {
            return Err(CronError::TooFewFields {
                line: line.to_string(),
                found: line.split_ascii_whitespace().count(),
            });
        }
    };

    let expr = CronExpression {
        minute: FieldSpec::MINUTE.evaluate(minute)?,
        hour: FieldSpec::HOUR.evaluate(hour)?,
        day_of_month: FieldSpec::DAY_OF_MONTH.evaluate(day_of_month)?,
        month: FieldSpec::MONTH.evaluate(month)?,
        day_of_week: FieldSpec::DAY_OF_WEEK.evaluate(day_of_week)?,
        command: command.to_string(),
    };
    debug!(command = %expr.command, "assembled expression");
    Ok(expr)
}

impl FromStr for CronExpression {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        assemble(s)
    }
}

/// Fields are separated by ASCII whitespace only; NBSP and friends stay
/// inside a token.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Up to five whitespace-separated tokens, then the rest of the line verbatim
/// (trailing whitespace removed).
fn split_line(line: &str) -> (Vec<&str>, &str) {
    let mut rest = line.trim_start_matches(is_separator);
    let mut tokens = Vec::with_capacity(FieldSpec::SCHEDULE.len());
    while tokens.len() < FieldSpec::SCHEDULE.len() && !rest.is_empty() {
        let end = rest.find(is_separator).unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        rest = rest[end..].trim_start_matches(is_separator);
    }
    (tokens, rest.trim_end_matches(is_separator))
}
