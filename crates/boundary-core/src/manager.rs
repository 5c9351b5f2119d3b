// crates/boundary-core/src/manager.rs

//! # Boundary overlay manager
//!
//! Keeps the [`OverlayRegistry`] and the live map in step. The contract:
//!
//! - at most one boundary overlay per geocode, and it is the one on the map;
//! - nothing is on the map without a registry entry;
//! - before the map exists every operation is a silent no-op.
//!
//! Replacing a geocode unloads the old overlay first, then builds, registers
//! and loads the new one. If any engine call fails part way, the manager
//! rolls back so the pair never disagrees, then returns the engine's error.

use crate::config::{DistrictColor, MapConfig};
use crate::error::Result;
use crate::geocode::Geocode;
use crate::options::BoundaryOptions;
use crate::registry::OverlayRegistry;
use crate::traits::{MapEngine, MapHandle, OverlayKind, OverlayOf, Platform};
use tracing::{debug, info, warn};

pub struct BoundaryManager<E: MapEngine> {
    engine: E,
    config: MapConfig,
    map: Option<E::Handle>,
    registry: OverlayRegistry<OverlayOf<E>>,
}

impl<E: MapEngine> BoundaryManager<E> {
    /// Creates a manager with no map yet; see [`BoundaryManager::surface_ready`].
    pub fn new(engine: E, config: MapConfig) -> Self {
        Self {
            engine,
            config,
            map: None,
            registry: OverlayRegistry::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn registry(&self) -> &OverlayRegistry<OverlayOf<E>> {
        &self.registry
    }

    pub fn is_ready(&self) -> bool {
        self.map.is_some()
    }

    pub fn map_handle(&self) -> Option<&E::Handle> {
        self.map.as_ref()
    }

    pub fn map_handle_mut(&mut self) -> Option<&mut E::Handle> {
        self.map.as_mut()
    }

    /// Called once the display surface exists.
    ///
    /// Builds the map, highlights the configured district set, then loads
    /// `boundary_geocodes` if configured. Non-rendering platforms skip all of
    /// it. Once a map exists, later calls are ignored; the engine handles
    /// surface changes itself.
    pub fn surface_ready(&mut self, surface: E::Surface, platform: Platform) -> Result<()> {
        if !platform.can_render() {
            info!(?platform, "host cannot render, map initialization skipped");
            return Ok(());
        }
        if self.map.is_some() {
            debug!("map already constructed, surface signal ignored");
            return Ok(());
        }

        let view = self.config.view;
        let map = self.engine.create_map(surface, &view)?;
        info!(
            zoom = view.zoom,
            lon = view.location.lon,
            lat = view.location.lat,
            "map constructed"
        );
        self.map = Some(map);

        let districts = self.config.districts.clone();
        self.load_initial_boundaries(&districts)?;

        // A blank geocode string means "nothing to load", however the config
        // was built.
        let configured = self
            .config
            .boundary_geocodes
            .clone()
            .filter(|g| !g.as_str().trim().is_empty());
        if let Some(geocodes) = configured {
            let options = self.config.boundary_options.clone();
            self.load_boundary(geocodes, &options)?;
        }
        Ok(())
    }

    /// Show the boundary for `geocode`, replacing any overlay already shown
    /// for that exact geocode.
    ///
    /// Before the map exists this does nothing and returns `Ok(())`.
    pub fn load_boundary(
        &mut self,
        geocode: impl Into<Geocode>,
        options: &BoundaryOptions,
    ) -> Result<()> {
        let geocode = geocode.into();
        let Some(map) = self.map.as_mut() else {
            debug!(%geocode, "map not initialized, boundary load ignored");
            return Ok(());
        };

        let replacing = match self.registry.get(geocode.as_str()) {
            Some(existing) => {
                map.unload_boundary_overlay(existing)?;
                true
            }
            None => false,
        };

        // From here until the new overlay is loaded, a replaced entry is
        // registered but not on the map.
        let overlay = match self
            .engine
            .boundary_object(&geocode, OverlayKind::Geocode, options)
        {
            Ok(overlay) => overlay,
            Err(e) => {
                warn!(%geocode, error = %e, "boundary object rejected");
                if replacing {
                    rematerialize(map, &mut self.registry, &geocode);
                }
                return Err(e);
            }
        };

        let previous = self.registry.set(geocode.clone(), overlay);
        let loaded = self
            .registry
            .get(geocode.as_str())
            .map_or(Ok(()), |o| map.load_boundary_overlay(o));

        if let Err(e) = loaded {
            warn!(%geocode, error = %e, "boundary load failed, rolling back");
            match previous {
                Some(prev) => {
                    self.registry.set(geocode.clone(), prev);
                    rematerialize(map, &mut self.registry, &geocode);
                }
                None => {
                    self.registry.take(geocode.as_str());
                }
            }
            return Err(e);
        }

        debug!(%geocode, replaced = replacing, total = self.registry.len(), "boundary loaded");
        Ok(())
    }

    /// Remove every overlay from the map, boundaries and anything else, and
    /// forget all boundaries. The map itself stays.
    pub fn clear_overlays(&mut self) -> Result<()> {
        let Some(map) = self.map.as_mut() else {
            return Ok(());
        };
        map.clear_all_overlays()?;
        let dropped = self.registry.len();
        self.registry.clear_all();
        debug!(dropped, "overlays cleared");
        Ok(())
    }

    /// Highlight a fixed district set, each entry styled with the district
    /// template plus its own fill color. Entries are loaded in order.
    pub fn load_initial_boundaries(&mut self, districts: &[DistrictColor]) -> Result<()> {
        if self.map.is_none() {
            debug!("map not initialized, district set ignored");
            return Ok(());
        }
        let template = BoundaryOptions::district_template();

        for district in districts {
            let options =
                template.merge(&BoundaryOptions::new().with_fill_color(&district.fill_color));

            if self.registry.contains(district.geocode.as_str()) {
                self.load_boundary(district.geocode.clone(), &options)?;
                continue;
            }

            let Some(map) = self.map.as_mut() else {
                break;
            };
            let overlay =
                self.engine
                    .boundary_object(&district.geocode, OverlayKind::Geocode, &options)?;
            self.registry.set(district.geocode.clone(), overlay);
            let loaded = self
                .registry
                .get(district.geocode.as_str())
                .map_or(Ok(()), |o| map.load_boundary_overlay(o));
            if let Err(e) = loaded {
                warn!(geocode = %district.geocode, error = %e, "district load failed");
                self.registry.take(district.geocode.as_str());
                return Err(e);
            }
        }

        info!(count = districts.len(), "district set loaded");
        Ok(())
    }

    /// Drop the map and every boundary reference. No engine calls are made.
    pub fn dispose(&mut self) {
        if self.map.take().is_some() {
            info!(boundaries = self.registry.len(), "map disposed");
        }
        self.registry.clear_all();
    }
}

/// Put the registered overlay for `geocode` back on the map, or forget it if
/// the map refuses, so the registry never points at something not shown.
fn rematerialize<H: MapHandle>(
    map: &mut H,
    registry: &mut OverlayRegistry<H::Overlay>,
    geocode: &Geocode,
) {
    let restored = registry
        .get(geocode.as_str())
        .map_or(Ok(()), |o| map.load_boundary_overlay(o));
    if let Err(e) = restored {
        warn!(%geocode, error = %e, "previous boundary could not be restored, dropping it");
        registry.take(geocode.as_str());
    }
}
