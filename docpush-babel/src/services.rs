//! Bundled [`DocumentService`] implementations.
//!
//! Neither talks to the network. [`RecordingService`] keeps everything in
//! memory and can be told to fail, which makes it the test double and the
//! dry-run target. [`OutboxService`] writes each request body to a directory,
//! exactly as an HTTP transport would post it, so batches can be inspected or
//! replayed against the real API by another tool.

use crate::error::ServiceError;
use crate::formats::gdocs::{batch_request, create_request};
use crate::ir::Operation;
use crate::publish::{DocumentId, DocumentService};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A document held by [`RecordingService`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDocument {
    pub id: DocumentId,
    pub title: String,
    /// Applied batches, in call order.
    pub batches: Vec<Vec<Operation>>,
}

/// In-memory service with ids `doc-1`, `doc-2`, ...
#[derive(Debug, Clone, Default)]
pub struct RecordingService {
    documents: Vec<RecordedDocument>,
    fail_create: Option<String>,
    fail_apply: Option<String>,
}

impl RecordingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[RecordedDocument] {
        &self.documents
    }

    pub fn document(&self, id: &DocumentId) -> Option<&RecordedDocument> {
        self.documents.iter().find(|doc| &doc.id == id)
    }

    /// Make the next `create_document` call fail with `message`.
    pub fn fail_next_create(&mut self, message: impl Into<String>) {
        self.fail_create = Some(message.into());
    }

    /// Make the next `apply_operations` call fail with `message`.
    pub fn fail_next_apply(&mut self, message: impl Into<String>) {
        self.fail_apply = Some(message.into());
    }
}

impl DocumentService for RecordingService {
    fn create_document(&mut self, title: &str) -> Result<DocumentId, ServiceError> {
        if let Some(message) = self.fail_create.take() {
            return Err(ServiceError::Rejected(message));
        }
        let id = DocumentId::new(format!("doc-{}", self.documents.len() + 1));
        self.documents.push(RecordedDocument {
            id: id.clone(),
            title: title.to_string(),
            batches: Vec::new(),
        });
        Ok(id)
    }

    fn apply_operations(
        &mut self,
        id: &DocumentId,
        operations: &[Operation],
    ) -> Result<(), ServiceError> {
        let fail = self.fail_apply.take();
        let doc = self
            .documents
            .iter_mut()
            .find(|doc| &doc.id == id)
            .ok_or_else(|| ServiceError::UnknownDocument(id.to_string()))?;
        if let Some(message) = fail {
            return Err(ServiceError::Rejected(message));
        }
        doc.batches.push(operations.to_vec());
        Ok(())
    }
}

/// Writes request bodies into a directory.
///
/// `create_document` writes `<id>.create.json`; `apply_operations` writes
/// `<id>.batch.json` through a temporary file and a rename, so a batch file is
/// either complete or absent. Ids are `outbox-0001`, `outbox-0002`, ...
/// continuing after the highest id already in the directory. A create file is
/// never overwritten.
#[derive(Debug, Clone)]
pub struct OutboxService {
    dir: PathBuf,
}

impl OutboxService {
    /// Open (creating if needed) the outbox at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, ServiceError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(OutboxService { dir })
    }

    pub fn create_path(&self, id: &DocumentId) -> PathBuf {
        self.dir.join(format!("{id}.create.json"))
    }

    pub fn batch_path(&self, id: &DocumentId) -> PathBuf {
        self.dir.join(format!("{id}.batch.json"))
    }

    fn next_id(&self) -> Result<DocumentId, ServiceError> {
        let mut highest = 0;
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            if let Some(number) = outbox_number(&name.to_string_lossy()) {
                highest = highest.max(number);
            }
        }
        Ok(DocumentId::new(format!("outbox-{:04}", highest + 1)))
    }
}

/// The numeric part of `outbox-NNNN.create.json`.
fn outbox_number(file_name: &str) -> Option<u64> {
    file_name
        .strip_prefix("outbox-")?
        .strip_suffix(".create.json")?
        .parse()
        .ok()
}

impl DocumentService for OutboxService {
    fn create_document(&mut self, title: &str) -> Result<DocumentId, ServiceError> {
        let id = self.next_id()?;
        let body = serde_json::to_string_pretty(&create_request(title))?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.create_path(&id))?;
        file.write_all(body.as_bytes())?;
        debug!(document = %id, dir = %self.dir.display(), "wrote create request");
        Ok(id)
    }

    fn apply_operations(
        &mut self,
        id: &DocumentId,
        operations: &[Operation],
    ) -> Result<(), ServiceError> {
        if !self.create_path(id).exists() {
            return Err(ServiceError::UnknownDocument(id.to_string()));
        }
        let body = serde_json::to_string_pretty(&batch_request(operations))?;
        let target = self.batch_path(id);
        let staging = self.dir.join(format!("{id}.batch.json.tmp"));
        fs::write(&staging, body)?;
        if let Err(err) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        debug!(document = %id, operations = operations.len(), "wrote batch request");
        Ok(())
    }
}
