#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use jverify_common::{Axis, VerdictToken, scan_output};
use rstest::rstest;

#[rstest]
#[case("NO_DIV_ZERO", VerdictToken::NoDivZero, Axis::NullPointer)]
#[case("MAY_DIV_ZERO", VerdictToken::MayDivZero, Axis::NullPointer)]
#[case("NO_OUT_OF_BOUNDS", VerdictToken::NoOutOfBounds, Axis::OutOfBounds)]
#[case("MAY_OUT_OF_BOUNDS", VerdictToken::MayOutOfBounds, Axis::OutOfBounds)]
fn test_token_parse_and_axis(
    #[case] literal: &str,
    #[case] token: VerdictToken,
    #[case] axis: Axis,
) {
    let parsed = VerdictToken::parse(literal).unwrap();
    assert_eq!(parsed, token);
    assert_eq!(parsed.axis(), axis);
    assert_eq!(parsed.as_str(), literal);
}

#[rstest]
#[case("NO_DIV_ZERO ")]
#[case("no_div_zero")]
#[case("SOMETHING_ELSE")]
#[case("")]
fn test_token_parse_rejects(#[case] literal: &str) {
    assert_eq!(VerdictToken::parse(literal), None);
}

#[test]
fn test_scan_both_axes() {
    let result = scan_output("Test1", "Test1 NO_DIV_ZERO\nTest1 NO_OUT_OF_BOUNDS\n");
    assert_eq!(result.actual_np, Some(VerdictToken::NoDivZero));
    assert_eq!(result.actual_oob, Some(VerdictToken::NoOutOfBounds));
}

#[test]
fn test_scan_last_occurrence_wins() {
    let result = scan_output("Test1", "Test1 NO_DIV_ZERO\nTest1 MAY_DIV_ZERO\n");
    assert_eq!(result.actual_np, Some(VerdictToken::MayDivZero));
    assert_eq!(result.actual_oob, None);
}

#[test]
fn test_scan_one_axis_leaves_other_empty() {
    let result = scan_output("Test1", "Test1 MAY_DIV_ZERO\n");
    assert_eq!(result.actual_np, Some(VerdictToken::MayDivZero));
    assert_eq!(result.actual_oob, None);
    assert_eq!(result.actual_np_str(), "MAY_DIV_ZERO");
    assert_eq!(result.actual_oob_str(), "");
}

#[test]
fn test_scan_no_matching_lines() {
    let output = "Soot started\nTest2 NO_DIV_ZERO\nanalysis done\n";
    let result = scan_output("Test1", output);
    assert_eq!(result.actual_np, None);
    assert_eq!(result.actual_oob, None);
}

#[test]
fn test_scan_prefix_requires_exact_id_and_space() {
    // "Test11 ..." must not match test id "Test1"
    let result = scan_output("Test1", "Test11 NO_DIV_ZERO\nTest1NO_DIV_ZERO\n");
    assert_eq!(result.actual_np, None);
}

#[test]
fn test_scan_drops_unrecognized_tokens() {
    let result = scan_output(
        "Test1",
        "Test1 WARNING something\nTest1 NO_DIV_ZERO\nTest1 NO_DIV_ZERO extra\n",
    );
    // trailing garbage after the token disqualifies the line
    assert_eq!(result.actual_np, Some(VerdictToken::NoDivZero));
    assert_eq!(result.actual_oob, None);
}

#[test]
fn test_scan_axes_never_cross() {
    // A bounds token can never land on the null-pointer axis, no matter the order
    let result = scan_output("Test1", "Test1 MAY_OUT_OF_BOUNDS\nTest1 NO_DIV_ZERO\n");
    assert_eq!(result.actual_np, Some(VerdictToken::NoDivZero));
    assert_eq!(result.actual_oob, Some(VerdictToken::MayOutOfBounds));
}
