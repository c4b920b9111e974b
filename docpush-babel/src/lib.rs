//! Meeting notes markdown to positional document edits
//!
//!     This crate turns a small, line oriented markdown dialect (the shape meeting notes take:
//!     headings, bullets, checkboxes, plain lines and a `---` separator before the footer) into an
//!     ordered batch of positional edit operations for a remote, index addressed document.
//!
//!     This is a pure lib, that is, it powers docpush-cli but is shell agnostic: no code here
//!     should suppose a shell environment, be it std print, env vars etc. The only I/O lives
//!     behind the DocumentService seam (see ./publish.rs and ./services.rs).
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── style_rules.rs          # Colours, presets, indentation, checkbox symbols
//!     ├── formats
//!     │   ├── gdocs               # batchUpdate request bodies
//!     │   ├── listing             # one line per operation, for humans
//!     │   └── text                # the text the batch produces
//!     ├── ir                      # Blocks and Operations
//!     ├── common                  # Classification, emission, assembly, replay
//!     ├── publish.rs              # create + apply pipeline
//!     ├── services.rs             # bundled DocumentService implementations
//!     └── transforms.rs           # source -> blocks / operations / rendered output
//!
//! Core Algorithm
//!
//!     Every index in an operation is absolute and assumes all earlier operations already ran.
//!     The assembler walks the lines once, classifies each into a Block, and asks the builder for
//!     the block's operations at the current cursor. The builder returns the advanced cursor, and
//!     the cursor only ever moves by the length of inserted text. Styling operations always
//!     follow the insert they refer to and never move the cursor.
//!
//!     Index unit is the UTF-16 code unit (see ir::text_len), which is what the remote service
//!     counts. Before anything is sent, a batch can be replayed on a SimulatedDocument
//!     (./common/replay.rs) which rejects any insert or range that would fall outside the body.
//!
//! Formats
//!
//!     An assembled batch is rendered through the Format trait:
//!     - batch-json: the request body the remote service accepts
//!     - listing: an aligned, one operation per line dump
//!     - text: the document text the batch produces once applied
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── fixtures
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;
pub mod services;
pub mod style_rules;
pub mod transforms;

pub mod common;
pub mod ir;

pub use common::{document_title, DocumentAssembler};
pub use error::{FormatError, PublishError, ServiceError};
pub use format::Format;
pub use ir::{Block, Operation};
pub use publish::{publish, DocumentId, DocumentService, PublishResult, PublishSpec};
pub use registry::FormatRegistry;
pub use style_rules::StyleRules;
pub use transforms::{render, to_blocks, to_operations};
