//! Output formatter trait for CLI results.

use anyhow::Result;
use duffel_core::PackReport;
use duffel_core::UnpackReport;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of a pack operation
    fn format_pack_result(&self, output_path: &Path, report: &PackReport) -> Result<()>;

    /// Format the result of an unpack operation
    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()>;

    /// Format the entry-name listing of a container
    fn format_entry_names(&self, names: &[String]) -> Result<()>;

    /// Format the entry comments of a container, aligned with names
    fn format_entry_comments(&self, names: &[String], comments: &[Option<String>]) -> Result<()>;

    /// Format a warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
