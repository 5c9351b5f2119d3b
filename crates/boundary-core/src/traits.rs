// crates/boundary-core/src/traits.rs

//! Capability traits for the external map engine.
//!
//! The manager never looks inside a map or an overlay. It only needs a way to
//! build a map for a surface, a way to build boundary objects, and the handful
//! of overlay primitives a live map exposes. Each concrete engine (the Longdo
//! adapter in `boundary-wasm`, the headless [`RecordingEngine`]) provides
//! those through the two traits below.
//!
//! [`RecordingEngine`]: crate::recording::RecordingEngine

use crate::config::{LatLon, MapView};
use crate::error::Result;
use crate::geocode::Geocode;
use crate::options::BoundaryOptions;

/// Kind tag passed to the boundary object constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Boundary loaded from the engine's geocode layer.
    Geocode,
}

impl OverlayKind {
    /// Tag string understood by the engine.
    pub fn tag(self) -> &'static str {
        match self {
            OverlayKind::Geocode => "IG",
        }
    }
}

/// Whether the host can render at all.
///
/// Server-side or otherwise non-interactive hosts report [`Platform::Server`]
/// and never get a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Browser,
    Server,
}

impl Platform {
    pub fn can_render(self) -> bool {
        matches!(self, Platform::Browser)
    }
}

/// A live map instance.
pub trait MapHandle {
    /// Boundary object built by [`MapEngine::boundary_object`].
    type Overlay;
    /// Any other overlay the engine supports (markers, polygons, ...).
    type Marker;

    /// Add a regular overlay. Counterpart: [`MapHandle::remove_overlay`].
    fn add_overlay(&mut self, overlay: &Self::Marker) -> Result<()>;

    /// Remove a regular overlay. Does not work on boundary objects.
    fn remove_overlay(&mut self, overlay: &Self::Marker) -> Result<()>;

    /// Materialize a boundary object.
    fn load_boundary_overlay(&mut self, overlay: &Self::Overlay) -> Result<()>;

    /// Remove a boundary object previously loaded.
    fn unload_boundary_overlay(&mut self, overlay: &Self::Overlay) -> Result<()>;

    /// Remove every overlay of every kind.
    fn clear_all_overlays(&mut self) -> Result<()>;

    fn zoom(&self) -> f64;

    fn set_zoom(&mut self, level: f64) -> Result<()>;

    fn location(&self) -> LatLon;

    fn set_location(&mut self, location: LatLon, animate: bool) -> Result<()>;

    /// Re-measure the display surface after its size changed.
    fn resize(&mut self) -> Result<()>;
}

/// Factory side of the engine: builds maps and boundary objects.
pub trait MapEngine {
    /// Display area a map is attached to.
    type Surface;
    type Handle: MapHandle;

    /// Build a map on `surface`. Failures are construction failures and are
    /// fatal for that surface.
    fn create_map(&self, surface: Self::Surface, view: &MapView) -> Result<Self::Handle>;

    /// Build (but do not materialize) a boundary object.
    fn boundary_object(
        &self,
        geocode: &Geocode,
        kind: OverlayKind,
        options: &BoundaryOptions,
    ) -> Result<<Self::Handle as MapHandle>::Overlay>;
}

/// Shorthand for the boundary object type of an engine.
pub type OverlayOf<E> = <<E as MapEngine>::Handle as MapHandle>::Overlay;
