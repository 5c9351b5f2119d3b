// crates/boundary-core/src/prelude.rs
pub use crate::config::{DistrictColor, LatLon, MapConfig, MapView, ZoomRange};
pub use crate::error::{MapError, Result};
pub use crate::geocode::Geocode;
pub use crate::manager::BoundaryManager;
pub use crate::options::{BoundaryOptions, FillColor};
pub use crate::registry::OverlayRegistry;
pub use crate::traits::{MapEngine, MapHandle, OverlayKind, Platform};
