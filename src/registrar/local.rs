//! In-process registrar
//!
//! Nothing is persisted: every submission is logged and accepted.

use super::traits::{Registrar, Registration};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

/// Registrar that always succeeds
#[derive(Debug, Default)]
pub struct LocalRegistrar {
    accepted: AtomicU64,
}

impl LocalRegistrar {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Registrar for LocalRegistrar {
    async fn register(&self, registration: &Registration) -> Result<bool> {
        let n = self.accepted.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            count = n,
            title = %registration.title,
            submitted_at = %registration.submitted_at,
            "Registration accepted"
        );
        Ok(true)
    }
}
