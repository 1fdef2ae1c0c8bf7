// tests/marker_validation.rs
mod common;
use crate::common::builders::MonitorOutputBuilder;
use crate::common::init_tracing;

use rmmkit::errors::RmmError;
use rmmkit::validate::{validate_monitor_output, validate_with_name, OutputVar};

const ORDER_ERROR: &str =
    "Marker order must be: Start Diagnostic -> End Diagnostic -> Start Result -> End Result.";

fn status() -> OutputVar {
    OutputVar::parse("Status").unwrap()
}

#[test]
fn well_formed_output_is_valid() {
    init_tracing();
    let text = "<-Start Diagnostic->\nchecking\n<-End Diagnostic->\n<-Start Result->\nStatus=OK: all good\n<-End Result->\n";

    let result = validate_monitor_output(text, &status());

    assert!(result.ok());
    assert!(result.errors().is_empty());
}

#[test]
fn duplicated_start_diagnostic_is_the_only_count_error() {
    let text = "<-Start Diagnostic->\n<-Start Diagnostic->\n<-End Diagnostic->\n<-Start Result->\nStatus=OK\n<-End Result->\n";

    let result = validate_monitor_output(text, &status());

    assert!(!result.ok());
    assert_eq!(
        result.errors(),
        ["Expected exactly one '<-Start Diagnostic->' line."]
    );
}

#[test]
fn all_missing_markers_are_reported_together_in_protocol_order() {
    let result = validate_monitor_output("Status=OK\n", &status());

    assert_eq!(
        result.errors(),
        [
            "Expected exactly one '<-Start Diagnostic->' line.",
            "Expected exactly one '<-End Diagnostic->' line.",
            "Expected exactly one '<-Start Result->' line.",
            "Expected exactly one '<-End Result->' line.",
        ]
    );
}

#[test]
fn count_errors_win_over_content_problems() {
    // Missing End Result and a bad value: only the structural error is reported.
    let text = "<-Start Diagnostic->\n<-End Diagnostic->\n<-Start Result->\nStatus= OK\n";

    let result = validate_monitor_output(text, &status());

    assert_eq!(result.errors(), ["Expected exactly one '<-End Result->' line."]);
}

#[test]
fn markers_are_matched_after_trimming_but_exactly_and_case_sensitively() {
    let padded = "  <-Start Diagnostic->  \n\t<-End Diagnostic->\n<-Start Result->\t\nStatus=OK\n <-End Result->\n";
    assert!(validate_monitor_output(padded, &status()).ok());

    let wrong_case = "<-start diagnostic->\n<-End Diagnostic->\n<-Start Result->\nStatus=OK\n<-End Result->\n";
    assert_eq!(
        validate_monitor_output(wrong_case, &status()).errors(),
        ["Expected exactly one '<-Start Diagnostic->' line."]
    );

    let partial = "<-Start Diagnostic-> trailing\n<-End Diagnostic->\n<-Start Result->\nStatus=OK\n<-End Result->\n";
    assert_eq!(
        validate_monitor_output(partial, &status()).errors(),
        ["Expected exactly one '<-Start Diagnostic->' line."]
    );
}

#[test]
fn out_of_order_markers_fail_with_a_single_ordering_error() {
    let text = "<-Start Diagnostic->\n<-Start Result->\nStatus=OK\n<-End Diagnostic->\n<-End Result->\n";

    let result = validate_monitor_output(text, &status());

    assert_eq!(result.errors(), [ORDER_ERROR]);
}

#[test]
fn ordering_error_ignores_block_content() {
    // Result block would be empty, but ordering is checked first.
    let text = "<-Start Result->\n<-End Result->\n<-Start Diagnostic->\n<-End Diagnostic->\n";

    let result = validate_monitor_output(text, &status());

    assert_eq!(result.errors(), [ORDER_ERROR]);
}

#[test]
fn blank_result_block_is_empty() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["", "   ", "\t"])
        .build();

    let result = validate_monitor_output(&text, &status());

    assert_eq!(
        result.errors(),
        ["Result block is empty; expected one output variable line."]
    );
}

#[test]
fn missing_output_variable_line_reports_count_and_example() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["Result=OK"])
        .build();

    let result = validate_monitor_output(&text, &status());

    assert_eq!(
        result.errors(),
        [
            "Expected exactly one 'Status=...' line inside the result block; found 0.",
            "Example: Status=OK: All checks passed",
        ]
    );
}

#[test]
fn empty_value_does_not_count_as_a_match() {
    let text = MonitorOutputBuilder::new().result_lines(&["Status="]).build();

    let result = validate_monitor_output(&text, &status());

    assert!(result.errors()[0].ends_with("found 0."));
}

#[test]
fn indented_assignment_does_not_count_as_a_match() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["  Status=OK"])
        .build();

    let result = validate_monitor_output(&text, &status());

    assert!(result.errors()[0].ends_with("found 0."));
}

#[test]
fn two_identical_matching_lines_are_two_matches() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["Status=OK", "Status=OK"])
        .build();

    let result = validate_monitor_output(&text, &status());

    assert_eq!(
        result.errors()[0],
        "Expected exactly one 'Status=...' line inside the result block; found 2."
    );
}

#[test]
fn extra_result_lines_are_rejected() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["Status=OK: fine", "", "also this"])
        .build();

    let result = validate_monitor_output(&text, &status());

    assert_eq!(
        result.errors(),
        [
            "Result block must contain exactly one non-empty line (the output variable line).",
            "Unexpected additional lines: ['also this']",
        ]
    );
}

#[test]
fn extra_line_before_the_match_is_rejected_too() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["noise", "Status=OK"])
        .build();

    let result = validate_monitor_output(&text, &status());

    assert_eq!(result.errors()[1], "Unexpected additional lines: ['noise']");
}

#[test]
fn extra_lines_are_listed_in_order_with_quoting() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["Status=OK", "it's odd", r"C:\temp", "plain"])
        .build();

    let result = validate_monitor_output(&text, &status());

    assert_eq!(
        result.errors()[1],
        r#"Unexpected additional lines: ["it's odd", 'C:\\temp', 'plain']"#
    );
}

#[test]
fn leading_whitespace_in_value_is_rejected() {
    let text = "<-Start Diagnostic->\nchecking\n<-End Diagnostic->\n<-Start Result->\nStatus= OK\n<-End Result->\n";

    let result = validate_monitor_output(text, &status());

    assert_eq!(
        result.errors(),
        ["Do not include spaces around '=' (use 'Status=OK: ...', not 'Status= OK: ...')."]
    );
}

#[test]
fn blank_lines_around_the_result_line_are_fine() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["", "Status=WARNING: disk 91% full", "  "])
        .build();

    assert!(validate_monitor_output(&text, &status()).ok());
}

#[test]
fn custom_output_variable_is_honoured() {
    let var = OutputVar::parse("Disk_Health2").unwrap();
    let good = MonitorOutputBuilder::new()
        .result_lines(&["Disk_Health2=OK"])
        .build();
    let bad = MonitorOutputBuilder::new().build();

    assert!(validate_monitor_output(&good, &var).ok());
    assert_eq!(
        validate_monitor_output(&bad, &var).errors()[0],
        "Expected exactly one 'Disk_Health2=...' line inside the result block; found 0."
    );
}

#[test]
fn crlf_output_is_accepted() {
    let text = "<-Start Diagnostic->\r\nchecking\r\n<-End Diagnostic->\r\n<-Start Result->\r\nStatus=OK\r\n<-End Result->\r\n";

    assert!(validate_monitor_output(text, &status()).ok());
}

#[test]
fn validation_is_repeatable() {
    let text = MonitorOutputBuilder::new()
        .result_lines(&["Status=OK", "junk"])
        .build();

    let first = validate_monitor_output(&text, &status());
    let second = validate_monitor_output(&text, &status());

    assert_eq!(first, second);
}

#[test]
fn degenerate_output_variable_is_a_configuration_error() {
    let text = MonitorOutputBuilder::new().build();

    for bad in ["", "   ", "Status Code", "Status-Code", "Stätus", "a=b"] {
        match validate_with_name(&text, bad) {
            Err(RmmError::Config(msg)) => assert!(msg.contains("Invalid --output-var")),
            other => panic!("expected config error for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn output_variable_is_trimmed() {
    let var = OutputVar::parse("  Status\t").unwrap();
    assert_eq!(var.as_str(), "Status");
    assert_eq!(var, OutputVar::default());
}
