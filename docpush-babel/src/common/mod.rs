//! The conversion core: line classification, mention scanning, operation
//! emission, whole-document assembly and local replay.

pub mod assemble;
pub mod builder;
pub mod classify;
pub mod mentions;
pub mod replay;

pub use assemble::{document_title, Assembly, DocumentAssembler};
pub use builder::{Cursor, Emission, OperationBuilder};
pub use classify::classify;
pub use replay::{replay, ReplayError, SimulatedDocument};
