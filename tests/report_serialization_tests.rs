//! Violations as hosts forward them to reports
use heading_case_lint::{HeadingCaseValidator, Violation, RULE_NAME};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct NodeRef {
    file: &'static str,
    line: usize,
}

#[test]
fn test_violation_serializes_with_node() {
    let validator = HeadingCaseValidator::with_default_allow_list();
    let node = NodeRef {
        file: "docs/intro.mdx",
        line: 12,
    };
    let violations = validator.check_node("getting started", node);

    let json = serde_json::to_value(&violations).expect("serialize violations");
    assert_eq!(
        json,
        serde_json::json!([{
            "kind": "first_letter",
            "message": "Heading should start with an uppercase letter (Sentence case): \"getting started\"",
            "node": { "file": "docs/intro.mdx", "line": 12 }
        }])
    );
}

#[test]
fn test_document_traversal_order() {
    let validator = HeadingCaseValidator::with_default_allow_list();
    let headings = [
        ("title: Quick Start", 1_usize),
        ("Install the CLI", 5),
        ("configure Your Project", 9),
    ];

    let violations: Vec<Violation<usize>> = validator.check_nodes(headings);
    let lines: Vec<usize> = violations.iter().map(|v| v.node).collect();
    assert_eq!(lines, vec![1, 9, 9, 9]);

    let report: Vec<String> = violations
        .iter()
        .map(|v| format!("{}:{}: {}", v.node, RULE_NAME, v))
        .collect();
    assert!(report[0].starts_with("1:heading-sentence-case: Only the first word"));
}
