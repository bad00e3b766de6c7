//! Field token evaluator.
//!
//! A token is classified by the first operator it contains, in this order:
//! comma, slash, hyphen, asterisk, otherwise a bare integer. Composition only
//! happens by recursing into comma list elements and into the left-hand side
//! of a slash.
//!
//! Examples (minute field):
//!   `1,20-40/10` => {1, 20, 30, 40}
//!   `*/15`       => {0, 15, 30, 45}
//!   `20/15`      => {20, 35, 50}

use crate::error::CronError;
use crate::field::FieldSpec;
use crate::Result;

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Expanded values of one field: ascending, no duplicates.
pub type ValueSet = BTreeSet<u32>;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9,\-/*]+$").expect("field token pattern compiles"));

/// Expand `token` into the set of values it denotes within `spec`.
pub fn evaluate(spec: &FieldSpec, token: &str) -> Result<ValueSet> {
    let values = expand(spec, token)?;
    debug!(
        field = spec.label,
        token,
        count = values.len(),
        "expanded field"
    );
    Ok(values)
}

impl FieldSpec {
    pub fn evaluate(&self, token: &str) -> Result<ValueSet> {
        evaluate(self, token)
    }
}

fn expand(spec: &FieldSpec, token: &str) -> Result<ValueSet> {
    validate(spec, token)?;

    if token.contains(',') {
        trace!(field = spec.label, token, "list");
        expand_list(spec, token)
    } else if token.contains('/') {
        trace!(field = spec.label, token, "step");
        expand_step(spec, token)
    } else if token.contains('-') {
        trace!(field = spec.label, token, "range");
        expand_range(spec, token)
    } else if token.contains('*') {
        trace!(field = spec.label, token, "wildcard");
        Ok(expand_wildcard(spec))
    } else {
        let value = parse_value(spec, token, token)?;
        Ok(ValueSet::from([check_range(spec, value)?]))
    }
}

fn validate(spec: &FieldSpec, token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(CronError::EmptyInput {
            field: Some(spec.label),
        });
    }
    if !TOKEN_RE.is_match(token) {
        return Err(syntax(spec, token, "unsupported characters"));
    }
    Ok(())
}

fn expand_list(spec: &FieldSpec, token: &str) -> Result<ValueSet> {
    let mut out = ValueSet::new();
    for item in token.split(',') {
        if item.is_empty() {
            return Err(syntax(spec, token, "empty list element"));
        }
        out.extend(expand(spec, item)?);
    }
    Ok(out)
}

fn expand_step(spec: &FieldSpec, token: &str) -> Result<ValueSet> {
    let (numerator, step) = split_pair(token, '/')
        .ok_or_else(|| syntax(spec, token, "malformed slash expression"))?;

    let values = expand(spec, numerator)?;
    let (start, end) = step_bounds(spec, numerator, &values)
        .ok_or_else(|| syntax(spec, token, "malformed slash expression"))?;

    let step = match step.parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            return Err(CronError::InvalidStep {
                field: spec.label,
                token: token.to_string(),
            });
        }
    };

    Ok((start..=end).step_by(step as usize).collect())
}

/// Start and end of a stepped run.
///
/// A bare start value (`20/15`) runs to the end of the field. Ranges and
/// wildcards keep their own upper bound, which for `*` is already the field
/// maximum.
fn step_bounds(spec: &FieldSpec, numerator: &str, values: &ValueSet) -> Option<(u32, u32)> {
    let start = *values.first()?;
    let end = if !numerator.contains('-') && values.len() == 1 {
        spec.max
    } else {
        *values.last()?
    };
    Some((start, end))
}

fn expand_range(spec: &FieldSpec, token: &str) -> Result<ValueSet> {
    let (left, right) = split_pair(token, '-')
        .ok_or_else(|| syntax(spec, token, "malformed range expression"))?;
    let left = parse_value(spec, token, left)?;
    let right = parse_value(spec, token, right)?;

    if left > right {
        return Err(CronError::InvertedRange {
            field: spec.label,
            token: token.to_string(),
            left,
            right,
        });
    }
    check_range(spec, left)?;
    check_range(spec, right)?;

    Ok((left..=right).collect())
}

/// Any asterisk token without other operators (`*`, `**`, `5*`) is the whole field.
fn expand_wildcard(spec: &FieldSpec) -> ValueSet {
    (spec.min..=spec.max).collect()
}

/// Split on `sep` into exactly two non-empty operands.
fn split_pair(token: &str, sep: char) -> Option<(&str, &str)> {
    let mut parts = token.split(sep);
    let left = parts.next()?;
    let right = parts.next()?;
    if parts.next().is_some() || left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left, right))
}

/// Digits only; a digit string too large for the value type is out of range.
fn parse_value(spec: &FieldSpec, token: &str, text: &str) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(syntax(spec, token, "expected an integer"));
    }
    text.parse::<u32>().map_err(|_| CronError::OutOfRange {
        field: spec.label,
        value: text.to_string(),
        min: spec.min,
        max: spec.max,
    })
}

fn check_range(spec: &FieldSpec, value: u32) -> Result<u32> {
    if spec.contains(value) {
        Ok(value)
    } else {
        Err(CronError::OutOfRange {
            field: spec.label,
            value: value.to_string(),
            min: spec.min,
            max: spec.max,
        })
    }
}

fn syntax(spec: &FieldSpec, token: &str, reason: &'static str) -> CronError {
    CronError::Syntax {
        field: spec.label,
        token: token.to_string(),
        reason,
    }
}
