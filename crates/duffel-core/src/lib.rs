//! Recursive archive packing and extraction library.
//!
//! `duffel-core` packs files and whole directory trees into a single
//! gzip-compressed container, preserving relative paths, per-entry
//! comments, and empty directories. The inverse operation extracts a
//! container to a destination directory, optionally restricted to
//! entries whose name contains a keyword, and the container can be
//! inspected (entry names, entry comments) without extracting anything.
//!
//! # Examples
//!
//! ```no_run
//! use duffel_core::PackConfig;
//! use duffel_core::pack_one;
//! use duffel_core::unpack_all;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::default().with_comment("nightly snapshot");
//! let report = pack_one("data/", "backup.duf", &config)?;
//! println!("packed {} files", report.files_added);
//!
//! let report = unpack_all("backup.duf", "/tmp/restore")?;
//! println!("extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod container;
pub mod copy;
pub mod error;
pub mod fsutil;
pub mod pack;
pub mod unpack;

// Re-export main API types
pub use error::ArchiveError;
pub use error::Result;
pub use pack::PackConfig;
pub use pack::PackReport;
pub use pack::Packer;
pub use pack::pack_many;
pub use pack::pack_one;
pub use unpack::UnpackReport;
pub use unpack::entry_comments;
pub use unpack::entry_names;
pub use unpack::unpack_all;
pub use unpack::unpack_filtered;
