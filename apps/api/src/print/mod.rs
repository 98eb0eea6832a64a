// Print snapshot: turns a rendered layout tree into a standalone A4 document
// for the export service.

pub mod divider;
pub mod document;
pub mod sanitize;
pub mod snapshot;
pub mod styles;

pub use snapshot::{build_snapshot, PrintSnapshot, SnapshotError, SnapshotMeta};
