//! Container extraction and inspection.
//!
//! Extraction recreates a container's entries under a destination
//! directory in stored order, optionally restricted by a name keyword.
//! Inspection returns entry names and comments without touching the
//! filesystem.

pub mod extract;
pub mod list;
pub mod report;

// Re-exports for public API
pub use extract::unpack_all;
pub use extract::unpack_filtered;
pub use list::entry_comments;
pub use list::entry_names;
pub use report::UnpackReport;
