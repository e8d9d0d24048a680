//! Error types and error classification for the ingest crate.
//!
//! This module provides:
//! - [`FeedError`]: The main error enum for all feed operations
//! - [`ErrorKind`]: Coarse classification used by callers to decide what to do

mod kind;

pub use kind::ErrorKind;

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while acquiring a feed snapshot.
///
/// Normalization and deduplication never produce errors; malformed upstream
/// entries degrade to placeholder values instead.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Required configuration is missing or unusable.
    /// Raised at construction time, before any network attempt.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream API answered with a non-success status.
    #[error("Upstream error: {status} {status_text}")]
    Upstream {
        /// HTTP status code returned by the provider
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Upstream timeout after {}s", .timeout.as_secs())]
    Timeout {
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// A transport-level failure (connection refused, proxy rejected, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not a valid feed document.
    #[error("Malformed feed document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FeedError {
    /// Returns the classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use propline_ingest::errors::{ErrorKind, FeedError};
    ///
    /// let error = FeedError::Upstream { status: 503, status_text: "Service Unavailable".into() };
    /// assert_eq!(error.kind(), ErrorKind::Upstream);
    ///
    /// let error = FeedError::Configuration("proxy url".into());
    /// assert_eq!(error.kind(), ErrorKind::Configuration);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Upstream { .. } | Self::Timeout { .. } | Self::Network(_) | Self::Decode(_) => {
                ErrorKind::Upstream
            }
        }
    }

    /// HTTP status carried by the error, if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
