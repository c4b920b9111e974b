//! Document publishing pipeline.
//!
//! Provides a high-level API for turning a markdown source into a populated
//! remote document. The remote side is reached through [`DocumentService`],
//! which offers exactly two calls: create an empty document, then apply one
//! batch of operations to it, all or nothing.
//!
//! The pipeline is:
//!
//! 1. assemble the operation batch and replay it locally (nothing is sent if
//!    the indices do not line up),
//! 2. create the document,
//! 3. apply the whole batch in a single call (skipped when it is empty),
//! 4. report the document id, its URL and the operation count.
//!
//! There are no retries and no partial application: a failure at step 2 or 3
//! aborts the run and the error says how far it got.

use crate::common::{DocumentAssembler, SimulatedDocument};
use crate::error::{PublishError, ServiceError};
use crate::ir::Operation;
use crate::style_rules::StyleRules;
use std::fmt;
use tracing::{info, warn};

/// Default URL template; `{id}` is replaced by the document id.
pub const DEFAULT_URL_TEMPLATE: &str = "https://docs.google.com/document/d/{id}/edit";

/// Identifier of a remote document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The document-mutation service a batch is submitted to.
pub trait DocumentService {
    /// Create an empty document and return its id.
    fn create_document(&mut self, title: &str) -> Result<DocumentId, ServiceError>;

    /// Apply `operations`, in order, as one atomic batch.
    fn apply_operations(
        &mut self,
        id: &DocumentId,
        operations: &[Operation],
    ) -> Result<(), ServiceError>;
}

/// Specifies what to publish.
///
/// ```ignore
/// let spec = PublishSpec::new(&source, "Team Sync")
///     .with_rules(rules)
///     .with_url_template("https://example.test/{id}");
/// ```
#[derive(Debug, Clone)]
pub struct PublishSpec<'a> {
    /// Markdown source to convert.
    pub source: &'a str,
    /// Title of the created document.
    pub title: &'a str,
    /// Styling applied by the operation builder.
    pub rules: StyleRules,
    /// Template used to build the document URL.
    pub url_template: String,
}

impl<'a> PublishSpec<'a> {
    pub fn new(source: &'a str, title: &'a str) -> Self {
        Self {
            source,
            title,
            rules: StyleRules::default(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
        }
    }

    pub fn with_rules(mut self, rules: StyleRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.url_template = template.into();
        self
    }
}

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    pub document_id: DocumentId,
    pub url: String,
    pub operation_count: usize,
}

/// Builds the shareable URL for `id` from `template`.
pub fn document_url(template: &str, id: &DocumentId) -> String {
    template.replace("{id}", id.as_str())
}

/// Publishes `spec` through `service`.
///
/// # Errors
///
/// - [`PublishError::InvalidBatch`] if the batch fails local replay
/// - [`PublishError::Create`] if the document could not be created
/// - [`PublishError::Apply`] if the batch was rejected (the document exists)
pub fn publish<S>(spec: PublishSpec<'_>, service: &mut S) -> Result<PublishResult, PublishError>
where
    S: DocumentService + ?Sized,
{
    let operations = DocumentAssembler::new(spec.rules).assemble(spec.source);
    SimulatedDocument::new().apply_all(&operations)?;

    let document_id =
        service
            .create_document(spec.title)
            .map_err(|source| PublishError::Create {
                title: spec.title.to_string(),
                source,
            })?;
    info!(document = %document_id, title = spec.title, "created document");

    if operations.is_empty() {
        warn!(document = %document_id, "no operations to apply");
    } else {
        service
            .apply_operations(&document_id, &operations)
            .map_err(|source| PublishError::Apply {
                document_id: document_id.to_string(),
                operation_count: operations.len(),
                source,
            })?;
        info!(
            document = %document_id,
            operations = operations.len(),
            "applied batch"
        );
    }

    Ok(PublishResult {
        url: document_url(&spec.url_template, &document_id),
        document_id,
        operation_count: operations.len(),
    })
}
