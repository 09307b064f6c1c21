//! Trait abstraction for the registration backend to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub title: String,
    pub detail: String,
    pub submitted_at: DateTime<Utc>,
}

impl Registration {
    /// Build a submission stamped with the current time
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            submitted_at: Utc::now(),
        }
    }
}

/// Backend that stores a registration.
///
/// `Ok(false)` is a refused registration; `Err` is a backend fault. The form
/// treats both as a failed submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Store a registration, returning whether it succeeded
    async fn register(&self, registration: &Registration) -> Result<bool>;
}
