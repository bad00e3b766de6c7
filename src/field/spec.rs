//! Field bounds for the five schedule positions.
//!
//! Each position is plain data: an inclusive `[min, max]` range plus the
//! label used in output and error messages.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
}

impl FieldSpec {
    pub const MINUTE: FieldSpec = FieldSpec::new(0, 59, "minute");
    pub const HOUR: FieldSpec = FieldSpec::new(0, 23, "hour");
    pub const DAY_OF_MONTH: FieldSpec = FieldSpec::new(1, 31, "day of month");
    pub const MONTH: FieldSpec = FieldSpec::new(1, 12, "month");
    /// Sunday = 0. POSIX cron also accepts 7 for Sunday; this does not.
    pub const DAY_OF_WEEK: FieldSpec = FieldSpec::new(0, 6, "day of week");

    /// Schedule positions in expression order.
    pub const SCHEDULE: [FieldSpec; 5] = [
        FieldSpec::MINUTE,
        FieldSpec::HOUR,
        FieldSpec::DAY_OF_MONTH,
        FieldSpec::MONTH,
        FieldSpec::DAY_OF_WEEK,
    ];

    /// Panics if `min > max`; bounds are fixed at definition time.
    pub const fn new(min: u32, max: u32, label: &'static str) -> Self {
        assert!(min <= max, "field bounds must satisfy min <= max");
        Self { min, max, label }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Number of values the full-range wildcard expands to.
    pub fn width(&self) -> usize {
        (self.max - self.min) as usize + 1
    }
}
