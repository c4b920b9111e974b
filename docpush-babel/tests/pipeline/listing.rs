//! Rendering a short note through the non-JSON formats.

use docpush_babel::{render, StyleRules};
use std::collections::HashMap;

const NOTE: &str = "# Title\n\n- [ ] call @sam\n---\nRecorded by Sam";

fn render_note(format: &str) -> String {
    render(NOTE, format, &StyleRules::default(), &HashMap::new()).unwrap()
}

#[test]
fn test_listing_of_short_note() {
    let expected = [
        r#"  0  insert-text          [1, 7)    "Title\n""#,
        r#"  1  set-paragraph-style  [1, 6)    HEADING_1"#,
        r#"  2  insert-text          [7, 19)   "☐ call @sam\n""#,
        r#"  3  set-text-style       [14, 18)  bold rgb(0.2, 0.4, 0.8)"#,
        r#"  4  insert-text          [19, 35)  "Recorded by Sam\n""#,
        r#"  5  set-text-style       [19, 34)  italic rgb(0.5, 0.5, 0.5)"#,
    ];
    assert_eq!(render_note("listing"), format!("{}\n", expected.join("\n")));
}

#[test]
fn test_text_of_short_note() {
    assert_eq!(render_note("text"), "Title\n☐ call @sam\nRecorded by Sam\n");
}

#[test]
fn test_compact_batch_json() {
    let mut options = HashMap::new();
    options.insert("compact".to_string(), "true".to_string());
    let output = render("Hi @al", "batch-json", &StyleRules::default(), &options).unwrap();

    assert!(!output.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let requests = value["requests"].as_array().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0]["insertText"]["text"], "Hi @al\n");
    assert_eq!(requests[1]["updateTextStyle"]["range"]["startIndex"], 4);
    assert_eq!(requests[1]["updateTextStyle"]["range"]["endIndex"], 7);
    assert_eq!(requests[1]["updateTextStyle"]["fields"], "bold,foregroundColor");
}

#[test]
fn test_custom_rules_change_the_output() {
    let rules = StyleRules {
        checked_symbol: "[x]".to_string(),
        bullet_preset: "BULLET_CHECKBOX".to_string(),
        ..StyleRules::default()
    };
    let output = render("- [x] done\n- item", "listing", &rules, &HashMap::new()).unwrap();
    assert!(output.contains(r#""[x] done\n""#));
    assert!(output.contains("BULLET_CHECKBOX"));
}
