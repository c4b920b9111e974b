//! Publishing the fixture through the bundled services.

use crate::common::fixture;
use docpush_babel::services::{OutboxService, RecordingService};
use docpush_babel::{publish, PublishError, PublishSpec};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_publish_to_recording_service() {
    let source = fixture("meeting_notes.md");
    let mut service = RecordingService::new();
    let result = publish(
        PublishSpec::new(&source, "Product Team Sync - May 15, 2023"),
        &mut service,
    )
    .unwrap();

    assert_eq!(result.operation_count, 106);
    assert_eq!(
        result.url,
        "https://docs.google.com/document/d/doc-1/edit"
    );
    let doc = service.document(&result.document_id).unwrap();
    assert_eq!(doc.batches.len(), 1);
    assert_eq!(doc.batches[0].len(), 106);
}

#[test]
fn test_publish_to_outbox() {
    let dir = tempdir().unwrap();
    let source = fixture("meeting_notes.md");
    let mut service = OutboxService::new(dir.path()).unwrap();
    let result = publish(PublishSpec::new(&source, "Sync"), &mut service).unwrap();

    assert_eq!(result.document_id.as_str(), "outbox-0001");
    let batch: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(service.batch_path(&result.document_id)).unwrap())
            .unwrap();
    assert_eq!(batch["requests"].as_array().unwrap().len(), 106);
    assert_eq!(
        batch["requests"][0]["insertText"]["text"],
        "Product Team Sync - May 15, 2023\n"
    );
}

#[test]
fn test_failed_apply_keeps_the_empty_document() {
    let mut service = RecordingService::new();
    service.fail_next_apply("backend unavailable");
    let err = publish(PublishSpec::new("# T", "T"), &mut service).unwrap_err();

    assert!(matches!(err, PublishError::Apply { .. }));
    assert_eq!(service.documents().len(), 1);
    assert!(service.documents()[0].batches.is_empty());
}
