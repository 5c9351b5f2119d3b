// crates/boundary-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the boundary manager and the map engines behind it.
///
/// The manager never invents errors of its own for engine faults: whatever
/// the engine returns is handed back to the caller as-is. "Map not ready yet"
/// is not represented here at all, loads before readiness are no-ops.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map engine failed to build a map for the given surface.
    #[error("map engine failed to construct a map: {0}")]
    Construction(String),

    /// The engine refused to build a boundary object (bad geocode or options).
    #[error("boundary object for geocode `{geocode}` rejected: {reason}")]
    Boundary { geocode: String, reason: String },

    /// A map handle primitive (load, unload, clear, ...) failed.
    #[error("map operation `{op}` failed: {reason}")]
    Engine { op: &'static str, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    pub fn engine(op: &'static str, reason: impl Into<String>) -> Self {
        Self::Engine {
            op,
            reason: reason.into(),
        }
    }

    pub fn boundary(geocode: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Boundary {
            geocode: geocode.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
