//! API route handlers
//!
//! - Transport decision with per-mode option listing
//! - Active configuration inspection and hot reload
//! - Liveness

mod config;
mod decide;

pub use config::*;
pub use decide::*;

use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::Json;
use serde::Serialize;

use crate::config::{ConfigError, TransportConfig};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct ServiceState {
    /// Active configuration; swapped atomically on reload
    config: Arc<ArcSwap<TransportConfig>>,
    /// File re-read by `POST /api/v1/config/reload`
    config_path: Option<Arc<PathBuf>>,
}

impl ServiceState {
    pub fn new(config: TransportConfig, config_path: Option<PathBuf>) -> Self {
        Self {
            config: Arc::new(ArcSwap::from_pointee(config)),
            config_path: config_path.map(Arc::new),
        }
    }

    /// Snapshot of the active config. Stays valid across a concurrent reload.
    pub fn current(&self) -> Arc<TransportConfig> {
        self.config.load_full()
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_deref()
    }

    /// Re-read the config file and swap it in. On error the old config stays.
    pub fn reload(&self) -> Result<Option<Arc<TransportConfig>>, ConfigError> {
        let Some(path) = self.config_path.as_deref() else {
            return Ok(None);
        };
        let fresh = Arc::new(TransportConfig::load_from_file(path)?);
        self.config.store(Arc::clone(&fresh));
        Ok(Some(fresh))
    }
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
