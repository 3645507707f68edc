//! Behavioural tests for period scrubbing

use gdxsplit::domain::{scrub, scrub_with, CommaRepair, PeriodTag, TagSet};

mod common;
use common::{SAMPLE_DUMP, SAMPLE_TP1};

fn tags(values: &[&str]) -> TagSet {
    values.iter().map(|v| PeriodTag::new(*v)).collect()
}

#[test]
fn test_untagged_input_unchanged() {
    let input = vec!["Set i /", "a,", "b /;", "", "Scalar x / 1 /;"];

    for selected in [tags(&[]), tags(&["TP1"]), tags(&["TP1", "TP9"])] {
        assert_eq!(scrub(&input, &selected), input);
    }
}

#[test]
fn test_selected_tag_kept_and_region_closed() {
    let output = scrub(["'TP1 a,", "'TP2 b,", "x"], &tags(&["TP1"]));
    assert_eq!(output, vec!["'TP1 a/;", "x"]);
}

#[test]
fn test_no_repair_between_consecutive_tagged_lines() {
    let output = scrub(["'TP1 a,", "'TP1 c,", "x"], &tags(&["TP1"]));
    assert_eq!(output, vec!["'TP1 a,", "'TP1 c/;", "x"]);
}

#[test]
fn test_empty_selection_drops_all_tagged_lines() {
    let output = scrub(["'TP1 a,", "y"], &tags(&[]));
    assert_eq!(output, vec!["y"]);
}

#[test]
fn test_end_of_stream_flush_not_repaired() {
    let output = scrub(["'TP1 a,"], &tags(&["TP1"]));
    assert_eq!(output, vec!["'TP1 a,"]);
}

#[test]
fn test_empty_input() {
    let output = scrub(Vec::<String>::new(), &tags(&["TP1"]));
    assert!(output.is_empty());
}

#[test]
fn test_order_preserved() {
    let input = [
        "h1", "'TP3 c,", "'TP1 a,", "m", "'TP2 b,", "'TP3 d,", "'TP1 e,", "t",
    ];
    let output = scrub(input, &tags(&["TP1", "TP3"]));

    // Strip repairs and check kept lines appear in input order
    let normalized: Vec<String> = output.iter().map(|l| l.replace("/;", ",")).collect();
    let mut cursor = 0;
    for line in &normalized {
        let pos = input[cursor..]
            .iter()
            .position(|candidate| candidate == line)
            .expect("kept line out of order");
        cursor += pos + 1;
    }
    assert_eq!(
        output,
        vec!["h1", "'TP3 c,", "'TP1 a/;", "m", "'TP3 d,", "'TP1 e/;", "t"]
    );
}

#[test]
fn test_multiple_regions_each_closed() {
    let output = scrub(SAMPLE_DUMP.lines(), &tags(&["TP1"]));
    let expected: Vec<&str> = SAMPLE_TP1.lines().collect();
    assert_eq!(output, expected);
}

#[test]
fn test_region_fully_dropped_leaves_header_alone() {
    let output = scrub(["Parameter p /", "'TP2 a,", "'TP2 b /;", "x"], &tags(&["TP1"]));
    assert_eq!(output, vec!["Parameter p /", "x"]);
}

#[test]
fn test_tag_containment_anywhere_in_line() {
    let output = scrub(["'TP4'.'TP1' 1,", "end"], &tags(&["TP1"]));
    assert_eq!(output, vec!["'TP4'.'TP1' 1/;", "end"]);
}

#[test]
fn test_closed_line_with_comma_in_label_left_alone() {
    let output = scrub(["'TP1'.'a,b' 1 /;", ""], &tags(&["TP1"]));
    assert_eq!(output, vec!["'TP1'.'a,b' 1 /;", ""]);
}

#[test]
fn test_trailing_comma_found_past_whitespace() {
    let output = scrub(["'TP1'.'a,b' 1,  ", "end"], &tags(&["TP1"]));
    assert_eq!(output, vec!["'TP1'.'a,b' 1/;  ", "end"]);
}

#[test]
fn test_repair_policies_differ_on_multi_comma_lines() {
    let input = ["'TP1'.'a,b' 1,", "end"];
    let selected = tags(&["TP1"]);

    assert_eq!(
        scrub_with(input, &selected, CommaRepair::Trailing),
        vec!["'TP1'.'a,b' 1/;", "end"]
    );
    assert_eq!(
        scrub_with(input, &selected, CommaRepair::All),
        vec!["'TP1'.'a/;b' 1/;", "end"]
    );
}
