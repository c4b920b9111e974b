//! The full meeting notes fixture through assembly, replay and rendering.

use crate::common::{covered, fixture, replayed};
use docpush_babel::common::DocumentAssembler;
use docpush_babel::ir::{NamedStyle, Operation, ParagraphStyle};
use docpush_babel::{document_title, to_operations, FormatRegistry, StyleRules};
use insta::assert_snapshot;

fn notes() -> Vec<Operation> {
    to_operations(&fixture("meeting_notes.md"), &StyleRules::default())
}

fn count(ops: &[Operation], kind: &str) -> usize {
    ops.iter().filter(|op| op.kind() == kind).count()
}

#[test]
fn test_operation_counts_by_kind() {
    let ops = notes();
    assert_eq!(ops.len(), 106);
    assert_eq!(count(&ops, "insert-text"), 46);
    assert_eq!(count(&ops, "set-bullet-list"), 31);
    assert_eq!(count(&ops, "set-paragraph-style"), 23);
    assert_eq!(count(&ops, "set-text-style"), 6);
}

#[test]
fn test_replayed_text() {
    let body = replayed(&notes());
    assert_snapshot!(body.trim_end(), @r"
Product Team Sync - May 15, 2023
Attendees
Sarah Chen (Product Lead)
Mike Johnson (Engineering)
Anna Smith (Design)
David Park (QA)
Agenda
1. Sprint Review
Completed Features
User authentication flow
Dashboard redesign
Performance optimization
Reduced load time by 40%
Implemented caching solution
Pending Items
Mobile responsive fixes
Beta testing feedback integration
2. Current Challenges
Resource constraints in QA team
Third-party API integration delays
User feedback on new UI
Navigation confusion
Color contrast issues
3. Next Sprint Planning
Priority Features
Payment gateway integration
User profile enhancement
Analytics dashboard
Technical Debt
Code refactoring
Documentation updates
Action Items
☐ @sarah: Finalize Q3 roadmap by Friday
☐ @mike: Schedule technical review for payment integration
☐ @anna: Share updated design system documentation
☐ @david: Prepare QA resource allocation proposal
Next Steps
Schedule individual team reviews
Update sprint board
Share meeting summary with stakeholders
Notes
Next sync scheduled for May 22, 2023
Platform demo for stakeholders on May 25
Remember to update JIRA tickets
Meeting recorded by: Sarah Chen
Duration: 45 minutes
");
}

#[test]
fn test_headings_cover_their_text() {
    let ops = notes();
    let body = replayed(&ops);
    let headings: Vec<(NamedStyle, String)> = ops
        .iter()
        .filter_map(|op| match op {
            Operation::SetParagraphStyle {
                range,
                style: ParagraphStyle::Named(named),
            } => Some((*named, covered(&body, *range))),
            _ => None,
        })
        .collect();

    assert_eq!(headings.len(), 9);
    assert_eq!(
        headings[0],
        (
            NamedStyle::Heading1,
            "Product Team Sync - May 15, 2023".to_string()
        )
    );
    assert_eq!(headings[2], (NamedStyle::Heading2, "Agenda".to_string()));
    assert_eq!(
        headings[3],
        (NamedStyle::Heading3, "1. Sprint Review".to_string())
    );
    assert!(headings.iter().all(|(_, text)| !text.ends_with('\n')));
}

#[test]
fn test_mentions_and_footer_styles() {
    let ops = notes();
    let body = replayed(&ops);
    let styled: Vec<(String, bool)> = ops
        .iter()
        .filter_map(|op| match op {
            Operation::SetTextStyle { range, style } => {
                Some((covered(&body, *range), style.bold == Some(true)))
            }
            _ => None,
        })
        .collect();

    assert_eq!(
        styled,
        vec![
            ("@sarah".to_string(), true),
            ("@mike".to_string(), true),
            ("@anna".to_string(), true),
            ("@david".to_string(), true),
            ("Meeting recorded by: Sarah Chen".to_string(), false),
            ("Duration: 45 minutes".to_string(), false),
        ]
    );
}

#[test]
fn test_nested_bullets_are_indented_by_level() {
    let ops = notes();
    let body = replayed(&ops);
    let indents: Vec<(String, f64)> = ops
        .iter()
        .filter_map(|op| match op {
            Operation::SetParagraphStyle {
                range,
                style: ParagraphStyle::Indent { start, .. },
            } => Some((covered(&body, *range), *start)),
            _ => None,
        })
        .collect();

    assert_eq!(indents.len(), 14);
    assert_eq!(indents[0], ("User authentication flow\n".to_string(), 36.0));
    assert_eq!(indents[3], ("Reduced load time by 40%\n".to_string(), 72.0));
}

#[test]
fn test_assembly_state() {
    let source = fixture("meeting_notes.md");
    let assembly = DocumentAssembler::default().run(&source);
    let body = replayed(&assembly.operations);

    assert!(assembly.footer);
    assert_eq!(
        assembly.cursor.index(),
        1 + body.encode_utf16().count()
    );
    assert_eq!(
        document_title(&source).as_deref(),
        Some("Product Team Sync - May 15, 2023")
    );
}

#[test]
fn test_every_format_renders_the_fixture() {
    let registry = FormatRegistry::default();
    let ops = notes();
    for name in registry.list_formats() {
        let output = registry.render(&ops, &name).unwrap();
        assert!(!output.is_empty(), "{name} rendered nothing");
    }
}
