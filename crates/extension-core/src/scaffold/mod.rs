//! Scaffold writer: the generated-file plan and idempotent write primitives

pub mod plan;
pub mod writer;

pub use plan::{readme, scaffold_files, starter_path, starter_source, GeneratedFile};
pub use writer::{ensure_dir, write_if_absent, WriteOutcome};
