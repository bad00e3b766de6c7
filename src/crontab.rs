//! Validate crontab-style files: one expression per line.
//!
//! Blank lines and `#` comments are skipped. The first invalid line stops
//! the check and is reported as `path:line`.

use crate::expression::{CronExpression, assemble};

use anyhow::Context;
use std::fs;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrontabEntry {
    /// 1-based line number in the source.
    pub line: usize,
    pub expression: CronExpression,
}

pub fn check_crontab_file(path: &str) -> anyhow::Result<Vec<CrontabEntry>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read crontab file {}", path))?;
    check_crontab_str(path, &text)
}

/// `source` only labels error messages.
pub fn check_crontab_str(source: &str, text: &str) -> anyhow::Result<Vec<CrontabEntry>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let expression =
            assemble(line).with_context(|| format!("{}:{}: {:?}", source, lno, trimmed))?;
        out.push(CrontabEntry {
            line: lno,
            expression,
        });
    }

    debug!(source, entries = out.len(), "checked crontab");
    Ok(out)
}
