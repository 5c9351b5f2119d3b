// crates/boundary-core/src/recording.rs

//! # Headless engine
//!
//! A [`MapEngine`] that renders nothing and writes down every call it
//! receives. The CLI uses it to dry-run boundary operations; the test suites
//! use it to check exactly which primitives the manager invoked.
//!
//! Faults can be injected at any time through the engine (they are shared with
//! every map it creates), which is how the rollback paths are exercised.

use crate::config::{LatLon, MapView};
use crate::error::{MapError, Result};
use crate::geocode::Geocode;
use crate::options::BoundaryOptions;
use crate::traits::{MapEngine, MapHandle, OverlayKind};
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Boundary object built by the headless engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedOverlay {
    /// Unique per engine, in construction order starting at 1.
    pub id: u64,
    pub geocode: Geocode,
    pub kind: OverlayKind,
    pub options: BoundaryOptions,
}

/// Generic overlay (marker) accepted by [`RecordingMap::add_overlay`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMarker {
    pub id: u64,
    pub location: LatLon,
    pub title: Option<String>,
}

/// One primitive invoked on a [`RecordingMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    Load { id: u64, geocode: Geocode },
    Unload { id: u64, geocode: Geocode },
    AddOverlay { id: u64 },
    RemoveOverlay { id: u64 },
    ClearAll,
    SetZoom(f64),
    SetLocation { location: LatLon, animate: bool },
    Resize,
}

impl MapCall {
    pub fn is_load(&self) -> bool {
        matches!(self, MapCall::Load { .. })
    }

    pub fn is_unload(&self) -> bool {
        matches!(self, MapCall::Unload { .. })
    }
}

impl fmt::Display for MapCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapCall::Load { id, geocode } => write!(f, "load    #{id} {geocode}"),
            MapCall::Unload { id, geocode } => write!(f, "unload  #{id} {geocode}"),
            MapCall::AddOverlay { id } => write!(f, "add     marker #{id}"),
            MapCall::RemoveOverlay { id } => write!(f, "remove  marker #{id}"),
            MapCall::ClearAll => f.write_str("clear   all overlays"),
            MapCall::SetZoom(z) => write!(f, "zoom    {z}"),
            MapCall::SetLocation { location, animate } => write!(
                f,
                "move    lon={} lat={}{}",
                location.lon,
                location.lat,
                if *animate { " (animated)" } else { "" }
            ),
            MapCall::Resize => f.write_str("resize"),
        }
    }
}

#[derive(Debug, Default)]
struct Faults {
    construction: Option<String>,
    rejected_geocodes: HashSet<String>,
    rejected_loads: HashSet<String>,
    rejected_unloads: HashSet<String>,
    fail_clear: bool,
}

/// Headless [`MapEngine`]; surfaces are plain labels.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    faults: Rc<RefCell<Faults>>,
    next_id: Cell<u64>,
    maps_created: Cell<usize>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent `create_map` fails with `reason`.
    pub fn fail_construction(&self, reason: impl Into<String>) {
        self.faults.borrow_mut().construction = Some(reason.into());
    }

    /// Building a boundary object for `geocode` fails.
    pub fn reject_geocode(&self, geocode: impl Into<String>) {
        self.faults.borrow_mut().rejected_geocodes.insert(geocode.into());
    }

    /// Loading any boundary object for `geocode` fails.
    pub fn reject_load(&self, geocode: impl Into<String>) {
        self.faults.borrow_mut().rejected_loads.insert(geocode.into());
    }

    /// Unloading any boundary object for `geocode` fails.
    pub fn reject_unload(&self, geocode: impl Into<String>) {
        self.faults.borrow_mut().rejected_unloads.insert(geocode.into());
    }

    pub fn fail_clear(&self) {
        self.faults.borrow_mut().fail_clear = true;
    }

    /// Remove every injected fault.
    pub fn heal(&self) {
        *self.faults.borrow_mut() = Faults::default();
    }

    /// Number of boundary objects built so far, failed attempts excluded.
    pub fn objects_built(&self) -> u64 {
        self.next_id.get()
    }

    pub fn maps_created(&self) -> usize {
        self.maps_created.get()
    }
}

impl MapEngine for RecordingEngine {
    type Surface = String;
    type Handle = RecordingMap;

    fn create_map(&self, surface: String, view: &MapView) -> Result<RecordingMap> {
        if let Some(reason) = &self.faults.borrow().construction {
            return Err(MapError::Construction(reason.clone()));
        }
        self.maps_created.set(self.maps_created.get() + 1);
        Ok(RecordingMap {
            surface,
            view: *view,
            zoom: view.zoom,
            location: view.location,
            calls: Vec::new(),
            loaded: Vec::new(),
            markers: Vec::new(),
            faults: Rc::clone(&self.faults),
        })
    }

    fn boundary_object(
        &self,
        geocode: &Geocode,
        kind: OverlayKind,
        options: &BoundaryOptions,
    ) -> Result<RecordedOverlay> {
        if self
            .faults
            .borrow()
            .rejected_geocodes
            .contains(geocode.as_str())
        {
            return Err(MapError::boundary(geocode.as_str(), "rejected by engine"));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        Ok(RecordedOverlay {
            id,
            geocode: geocode.clone(),
            kind,
            options: options.clone(),
        })
    }
}

/// Map created by [`RecordingEngine`].
#[derive(Debug)]
pub struct RecordingMap {
    surface: String,
    view: MapView,
    zoom: f64,
    location: LatLon,
    calls: Vec<MapCall>,
    loaded: Vec<RecordedOverlay>,
    markers: Vec<RecordedMarker>,
    faults: Rc<RefCell<Faults>>,
}

impl RecordingMap {
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// View the map was created with.
    pub fn initial_view(&self) -> &MapView {
        &self.view
    }

    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    pub fn load_calls(&self) -> usize {
        self.calls.iter().filter(|c| c.is_load()).count()
    }

    pub fn unload_calls(&self) -> usize {
        self.calls.iter().filter(|c| c.is_unload()).count()
    }

    /// Boundary objects currently materialized, in load order.
    pub fn loaded(&self) -> &[RecordedOverlay] {
        &self.loaded
    }

    pub fn loaded_for(&self, geocode: &str) -> Vec<&RecordedOverlay> {
        self.loaded
            .iter()
            .filter(|o| o.geocode.as_str() == geocode)
            .collect()
    }

    pub fn markers(&self) -> &[RecordedMarker] {
        &self.markers
    }
}

impl MapHandle for RecordingMap {
    type Overlay = RecordedOverlay;
    type Marker = RecordedMarker;

    fn add_overlay(&mut self, overlay: &RecordedMarker) -> Result<()> {
        self.calls.push(MapCall::AddOverlay { id: overlay.id });
        if !self.markers.iter().any(|m| m.id == overlay.id) {
            self.markers.push(overlay.clone());
        }
        Ok(())
    }

    fn remove_overlay(&mut self, overlay: &RecordedMarker) -> Result<()> {
        self.calls.push(MapCall::RemoveOverlay { id: overlay.id });
        self.markers.retain(|m| m.id != overlay.id);
        Ok(())
    }

    fn load_boundary_overlay(&mut self, overlay: &RecordedOverlay) -> Result<()> {
        if self
            .faults
            .borrow()
            .rejected_loads
            .contains(overlay.geocode.as_str())
        {
            return Err(MapError::engine(
                "load",
                format!("cannot load boundary {}", overlay.geocode),
            ));
        }
        self.calls.push(MapCall::Load {
            id: overlay.id,
            geocode: overlay.geocode.clone(),
        });
        if !self.loaded.iter().any(|o| o.id == overlay.id) {
            self.loaded.push(overlay.clone());
        }
        Ok(())
    }

    fn unload_boundary_overlay(&mut self, overlay: &RecordedOverlay) -> Result<()> {
        if self
            .faults
            .borrow()
            .rejected_unloads
            .contains(overlay.geocode.as_str())
        {
            return Err(MapError::engine(
                "unload",
                format!("cannot unload boundary {}", overlay.geocode),
            ));
        }
        self.calls.push(MapCall::Unload {
            id: overlay.id,
            geocode: overlay.geocode.clone(),
        });
        self.loaded.retain(|o| o.id != overlay.id);
        Ok(())
    }

    fn clear_all_overlays(&mut self) -> Result<()> {
        if self.faults.borrow().fail_clear {
            return Err(MapError::engine("clear", "overlay layer unavailable"));
        }
        self.calls.push(MapCall::ClearAll);
        self.loaded.clear();
        self.markers.clear();
        Ok(())
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Clamped to the zoom range the map was created with.
    fn set_zoom(&mut self, level: f64) -> Result<()> {
        self.calls.push(MapCall::SetZoom(level));
        let range = self.view.zoom_range;
        self.zoom = if range.min <= range.max {
            level.clamp(range.min, range.max)
        } else {
            level
        };
        Ok(())
    }

    fn location(&self) -> LatLon {
        self.location
    }

    fn set_location(&mut self, location: LatLon, animate: bool) -> Result<()> {
        self.calls.push(MapCall::SetLocation { location, animate });
        self.location = location;
        Ok(())
    }

    fn resize(&mut self) -> Result<()> {
        self.calls.push(MapCall::Resize);
        Ok(())
    }
}
