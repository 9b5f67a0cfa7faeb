//! Error types
//!
//! `SimError` covers failures inside the simulation core, `PlatformError`
//! failures reported by the renderer/input collaborators, and `AppError`
//! is what the binary's host loop returns.

use thiserror::Error;

use crate::sim::CollectibleKind;

/// Failures raised by the simulation core
#[derive(Debug, Error)]
pub enum SimError {
    /// Inputs that would corrupt spawn math (missing HUD boxes, empty ranges,
    /// out-of-range settings)
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Exclusion zones left no room for a collectible
    #[error("no valid spawn position for {kind:?} after {attempts} attempts")]
    SpawnExhausted { kind: CollectibleKind, attempts: u32 },
}

/// Failures reported by external collaborators
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("input source unavailable: {0}")]
    InputUnavailable(String),
    #[error("renderer unavailable: {0}")]
    RendererUnavailable(String),
}

/// Top-level error for the host loop
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
