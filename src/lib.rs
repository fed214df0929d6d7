// genstamp - Support utilities for incremental code generation
// Hash-stamped generated files, bounded hash read-back, and stale artifact cleanup

pub mod config;
pub mod error;
pub mod fs;
pub mod stamp;

pub use error::{FileError, Result};

// Re-export commonly used items
pub use config::CodegenConfig;
pub use fs::{read_file, read_to_string, remove_by_patterns, rimraf, write_file};
pub use stamp::{needs_regeneration, read_hash, with_hash, write_stamped, Stamper};
