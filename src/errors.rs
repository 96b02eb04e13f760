//! Error types for scan and render passes.
//!
//! The taxonomy mirrors how a pass can fail: a not-yet-populated preview is
//! recovered with bounded retries, empty samples are filtered before they
//! ever reach the scoring engine, and a missing mount point aborts the pass
//! without touching the host page.

use std::fmt;

/// Unified error type for widget passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadableError {
    /// The preview document has no scorable content yet.
    NotReady { attempts: u32 },
    /// Empty or markup-only text reached the scoring engine.
    MalformedSample { message: String },
    /// A chart or summary mount point is absent from the widget surface.
    RenderTargetMissing { mount: String },
    /// Invalid widget configuration.
    ConfigError { message: String },
    /// Catch-all for other errors.
    Other(String),
}

impl ReadableError {
    /// Create a not-ready error recording how many attempts were made.
    pub fn not_ready(attempts: u32) -> Self {
        Self::NotReady { attempts }
    }

    /// Create a malformed-sample error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSample {
            message: message.into(),
        }
    }

    /// Create a missing-render-target error naming the absent mount id.
    pub fn missing_target(mount: impl Into<String>) -> Self {
        Self::RenderTargetMissing {
            mount: mount.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an error from any message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotReady { .. } => "NotReady",
            Self::MalformedSample { .. } => "MalformedSample",
            Self::RenderTargetMissing { .. } => "RenderTargetMissing",
            Self::ConfigError { .. } => "Config",
            Self::Other(_) => "Error",
        }
    }

    /// Check if this error is recovered locally by the retry loop.
    ///
    /// Only `NotReady` qualifies: the preview may simply not have loaded
    /// yet. Everything else is permanent for the current pass.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotReady { .. })
    }
}

impl fmt::Display for ReadableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady { attempts } => {
                write!(f, "preview has no scorable content ({} attempts)", attempts)
            }
            Self::MalformedSample { message } => {
                write!(f, "malformed sample: {}", message)
            }
            Self::RenderTargetMissing { mount } => {
                write!(f, "render target missing: #{}", mount)
            }
            Self::ConfigError { message } => {
                write!(f, "config error: {}", message)
            }
            Self::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ReadableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_is_recoverable() {
        let err = ReadableError::not_ready(3);
        assert!(err.is_recoverable());
        assert_eq!(err.category(), "NotReady");
        assert!(err.to_string().contains("3 attempts"));
    }

    #[test]
    fn test_missing_target_names_the_mount() {
        let err = ReadableError::missing_target("readable-chart");
        assert!(!err.is_recoverable());
        assert_eq!(err.category(), "RenderTargetMissing");
        assert!(err.to_string().contains("#readable-chart"));
    }

    #[test]
    fn test_malformed_sample_not_recoverable() {
        let err = ReadableError::malformed("empty element text");
        assert!(!err.is_recoverable());
        assert_eq!(err.category(), "MalformedSample");
    }

    #[test]
    fn test_config_error_display() {
        let err = ReadableError::config("retry delay must be positive");
        assert!(err.to_string().contains("retry delay"));
    }
}
