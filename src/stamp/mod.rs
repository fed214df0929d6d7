//! Source hash stamping for generated files
//!
//! A generated file carries the hash of the source it was built from in its
//! first line, so a later build can decide whether to regenerate it by
//! reading a few bytes instead of the whole file.

mod header;
mod reader;

pub use header::{parse_hash, with_hash, Stamper, DEFAULT_TOOL_NAME, HASH_LEN, MARKER};
pub use reader::{needs_regeneration, read_hash, write_stamped, STAMP_PREFIX_LEN};
