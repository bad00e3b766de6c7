use crate::expression::CronExpression;

/// Pretty-printed JSON array of `{label, values}` / `{label, command}` objects.
pub fn render_json(expr: &CronExpression) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(expr)?)
}
