use super::*;
use crate::fault::{FaultAccumulator, FaultKind};
use crate::rules::{LineInfo, LineRule};

fn check(limit: usize, text: &str) -> Vec<crate::fault::Fault> {
    let rule = MaxLineLength::new(limit);
    let mut acc = FaultAccumulator::new();
    let info = LineInfo {
        number: 1,
        text,
        comment_offset: None,
        has_code: true,
    };
    rule.check_line(&info, &mut acc);
    acc.drain_sorted()
}

#[test]
fn line_at_limit_passes() {
    assert!(check(10, "0123456789").is_empty());
}

#[test]
fn line_over_limit_faults_with_actual_length() {
    let faults = check(10, "0123456789a");
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].column, 10);
    assert_eq!(faults[0].kind, FaultKind::LineTooLong(11));
}

#[test]
fn length_counts_code_points_not_bytes() {
    // 150 two-byte code points, limit 100
    let text: String = "\u{e9}".repeat(150);
    let faults = check(100, &text);
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].kind, FaultKind::LineTooLong(150));
}

#[test]
fn bare_url_comment_is_exempt() {
    let url = format!("// https://example.com/{}", "x".repeat(120));
    assert!(check(80, &url).is_empty());
}

#[test]
fn url_comment_with_trailing_text_is_not_exempt() {
    let line = format!("// https://example.com see {}", "x".repeat(120));
    assert_eq!(check(80, &line).len(), 1);
}

#[test]
fn multiline_string_measures_payload_only() {
    // deep indentation, short payload
    let line = format!("{}\\\\short", " ".repeat(90));
    assert!(check(80, &line).is_empty());
}

#[test]
fn multiline_string_long_payload_faults() {
    let line = format!("    \\\\{}", "x".repeat(100));
    let faults = check(80, &line);
    assert_eq!(faults.len(), 1);
    assert_eq!(faults[0].kind, FaultKind::LineTooLong(100));
}
