//! Projection to the fixed output columns and file writing.

mod projector;
mod writer;

pub use projector::project;
pub use writer::{Writer, WriterConfig, write_audit};
