//! Configuration for packing operations.

use crate::Result;
use crate::error::ArchiveError;

/// Configuration for a packing operation.
///
/// # Examples
///
/// ```
/// use duffel_core::PackConfig;
///
/// let config = PackConfig::default()
///     .with_comment("release build")
///     .with_compression_level(9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackConfig {
    /// Comment attached to every entry written by this call.
    ///
    /// Default: `None` (entries carry no comment).
    pub comment: Option<String>,

    /// Compression level (1-9). Higher values compress better but
    /// slower. `None` uses the gzip default.
    pub compression_level: Option<u8>,
}

impl PackConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-entry comment. An empty string means no comment.
    #[must_use]
    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        let comment = comment.into();
        self.comment = if comment.is_empty() {
            None
        } else {
            Some(comment)
        };
        self
    }

    /// Sets the compression level (1-9).
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = Some(level);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidArgument`] if the compression
    /// level is outside 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(ArchiveError::InvalidArgument {
                reason: format!("compression level must be 1-9, got {level}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackConfig::default();
        assert_eq!(config.comment, None);
        assert_eq!(config.compression_level, None);
        config.validate().unwrap();
    }

    #[test]
    fn test_with_comment() {
        let config = PackConfig::default().with_comment("snapshot");
        assert_eq!(config.comment.as_deref(), Some("snapshot"));
    }

    #[test]
    fn test_empty_comment_treated_as_absent() {
        let config = PackConfig::default().with_comment("");
        assert_eq!(config.comment, None);
    }

    #[test]
    fn test_validate_rejects_out_of_range_level() {
        let config = PackConfig::default().with_compression_level(0);
        assert!(config.validate().is_err());

        let config = PackConfig::default().with_compression_level(10);
        assert!(config.validate().is_err());

        let config = PackConfig::default().with_compression_level(9);
        config.validate().unwrap();
    }
}
