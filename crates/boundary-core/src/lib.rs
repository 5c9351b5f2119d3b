// crates/boundary-core/src/lib.rs

//! # boundary-core
//!
//! Lifecycle manager for geocode boundary overlays on an interactive map.
//!
//! The crate keeps a registry of the boundary overlay shown for each geocode
//! and drives an external map engine through two capability traits,
//! [`MapEngine`] and [`MapHandle`]. Engines live elsewhere: the Longdo Map
//! adapter in `boundary-wasm`, and the headless [`recording`] engine used by
//! the CLI and the tests.
//!
//! ```rust
//! use boundary_core::prelude::*;
//! use boundary_core::recording::RecordingEngine;
//!
//! let mut manager = BoundaryManager::new(RecordingEngine::new(), MapConfig::default());
//!
//! // Nothing happens until the display surface is ready.
//! manager.load_boundary("610604", &BoundaryOptions::new()).unwrap();
//! assert!(manager.registry().is_empty());
//!
//! manager.surface_ready("map-container".into(), Platform::Browser).unwrap();
//! manager
//!     .load_boundary("610604;610607", &BoundaryOptions::new().with_fill_color("#00ff00"))
//!     .unwrap();
//!
//! // The default district set plus the compound boundary.
//! assert_eq!(manager.registry().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod geocode;
pub mod manager;
pub mod options;
pub mod prelude;
#[cfg(feature = "recording")]
pub mod recording;
pub mod registry;
pub mod traits;

// Re-exports
pub use crate::config::{DistrictColor, LatLon, MapConfig, MapView, ZoomRange};
pub use crate::error::{MapError, Result};
pub use crate::geocode::Geocode;
pub use crate::manager::BoundaryManager;
pub use crate::options::{BoundaryOptions, FillColor};
pub use crate::registry::OverlayRegistry;
pub use crate::traits::{MapEngine, MapHandle, OverlayKind, OverlayOf, Platform};
