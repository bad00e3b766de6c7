use cron_expand::{CronError, CronExpression, FieldSpec, ValueSet, assemble, evaluate};
use pretty_assertions::assert_eq;

fn set<const N: usize>(values: [u32; N]) -> ValueSet {
    ValueSet::from(values)
}

fn expected(command: &str) -> CronExpression {
    CronExpression {
        minute: set([0, 15, 30, 45]),
        hour: set([0]),
        day_of_month: set([1, 15]),
        month: (1..=12).collect(),
        day_of_week: set([1, 2, 3, 4, 5]),
        command: command.to_string(),
    }
}

#[test]
fn expands_reference_expression() {
    assert_eq!(
        assemble("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap(),
        expected("/usr/bin/find")
    );
}

#[test]
fn command_may_contain_spaces() {
    assert_eq!(
        assemble("*/15 0 1,15 * 1-5 apt-get clean").unwrap(),
        expected("apt-get clean")
    );
}

#[test]
fn extra_whitespace_between_fields() {
    assert_eq!(
        assemble("*/15  0  1,15 * 1-5 apt-get clean").unwrap(),
        expected("apt-get clean")
    );
    assert_eq!(
        assemble("\t*/15 0\t1,15 *   1-5   apt-get clean  ").unwrap(),
        expected("apt-get clean")
    );
}

#[test]
fn five_segments_is_structural_error() {
    let err = assemble("*/15 0 1,15 * /usr/bin/find").unwrap_err();
    assert_eq!(err.kind(), "structure");
    assert!(matches!(err, CronError::TooFewFields { found: 5, .. }));
    assert!(err.to_string().contains("*/15 0 1,15 * /usr/bin/find"));
}

#[test]
fn fields_are_labelled_in_order() {
    let expr = assemble("0 0 1 1 0 true").unwrap();
    let labels: Vec<&str> = expr.fields().iter().map(|f| f.label()).collect();
    assert_eq!(
        labels,
        vec![
            "minute",
            "hour",
            "day of month",
            "month",
            "day of week",
            "command"
        ]
    );
}

#[test]
fn field_errors_propagate_unchanged() {
    let direct = evaluate(&FieldSpec::MONTH, "2-1").unwrap_err();
    let via_line = assemble("0 0 1 2-1 0 cmd").unwrap_err();
    assert_eq!(via_line, direct);
    assert_eq!(via_line.kind(), "inverted-range");
}

#[test]
fn minute_bounds() {
    assert!(matches!(
        evaluate(&FieldSpec::MINUTE, "60"),
        Err(CronError::OutOfRange { .. })
    ));
    assert!(matches!(
        evaluate(&FieldSpec::MINUTE, "10-100"),
        Err(CronError::OutOfRange { .. })
    ));
}

#[test]
fn bare_start_step_vs_range_step() {
    assert_eq!(
        evaluate(&FieldSpec::MINUTE, "20/15").unwrap(),
        set([20, 35, 50])
    );
    let evens: ValueSet = (0..=58).step_by(2).collect();
    assert_eq!(evaluate(&FieldSpec::MINUTE, "0-59/2").unwrap(), evens);
}

#[test]
fn day_of_week_is_zero_based() {
    assert_eq!(
        evaluate(&FieldSpec::DAY_OF_WEEK, "*").unwrap(),
        (0..=6).collect::<ValueSet>()
    );
    assert!(matches!(
        evaluate(&FieldSpec::DAY_OF_WEEK, "7"),
        Err(CronError::OutOfRange { .. })
    ));
}

#[test]
fn specs_are_shareable_across_threads() {
    let handles: Vec<_> = ["*/5", "1-10", "3,1,2", "7/20"]
        .into_iter()
        .map(|token| std::thread::spawn(move || evaluate(&FieldSpec::MINUTE, token)))
        .collect();
    let results: Vec<ValueSet> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(results[2], set([1, 2, 3]));
    assert_eq!(results[3], set([7, 27, 47]));
}
