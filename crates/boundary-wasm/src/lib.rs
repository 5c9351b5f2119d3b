//! boundary-wasm — WebAssembly bindings for boundary-core
//!
//! This crate drives the Longdo Map JavaScript API from Rust. It wraps a
//! [`BoundaryManager`] in a JS class, [`BoundaryMap`], that a page or a UI
//! component can hold on to.
//!
//! What it provides
//! ----------------
//! - `new BoundaryMap(config?)`: config uses the same camelCase keys as the
//!   JSON config file (`zoom`, `zoomRange`, `location`, `ariaLabel`,
//!   `boundaryGeocodes`, `boundaryOptions`, `districts`)
//! - `attach(element)`: call once the container element is rendered
//! - `load_boundary(geocode, options?)` / `clear_overlays()`
//! - markers: `add_marker(lon, lat, title?)` / `remove_marker(id)`
//! - view: `zoom()`, `set_zoom(level)`, `set_location(lon, lat, animate)`, `resize()`
//! - `dispose()`: call when the component is destroyed
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { BoundaryMap } from 'boundary-wasm';
//!
//! async function main() {
//!   await init();
//!   const map = new BoundaryMap({ boundaryGeocodes: '610604;610607' });
//!   map.attach(document.getElementById('map'));
//!   map.load_boundary('10__', { combine: true, fillColor: null });
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The page must load the Longdo Map script (which defines the global
//!   `longdo`) before `attach` is called.
//! - Calls made before `attach` are accepted and ignored.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
pub mod sys;

pub use crate::engine::{LongdoEngine, LongdoHandle};

use crate::engine::to_js;
use boundary_core::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing boundary-map WASM module...".into());
}

/// Rendering is only possible when a browser window exists.
fn current_platform() -> Platform {
    if web_sys::window().is_some() {
        Platform::Browser
    } else {
        Platform::Server
    }
}

fn config_from_js(value: JsValue) -> Result<MapConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(MapConfig::default());
    }
    serde_wasm_bindgen::from_value::<MapConfig>(value)
        .map(MapConfig::normalized)
        .map_err(|e| MapError::Config(e.to_string()))
}

fn options_from_js(value: JsValue) -> Result<BoundaryOptions> {
    if value.is_undefined() || value.is_null() {
        return Ok(BoundaryOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| MapError::Config(e.to_string()))
}

/// First id at or after `start` that no live marker holds, wrapping at `u32::MAX`.
fn free_marker_id(markers: &HashMap<u32, JsValue>, start: u32) -> u32 {
    let mut id = start;
    while markers.contains_key(&id) {
        id = id.wrapping_add(1);
    }
    id
}

/* --------------------------------------------------------------------------
   Component
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct BoundaryMap {
    manager: BoundaryManager<LongdoEngine>,
    markers: HashMap<u32, JsValue>,
    next_marker: u32,
}

#[wasm_bindgen]
impl BoundaryMap {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> std::result::Result<BoundaryMap, JsError> {
        let config = config_from_js(config)?;
        Ok(Self {
            manager: BoundaryManager::new(LongdoEngine, config),
            markers: HashMap::new(),
            next_marker: 1,
        })
    }

    /// Surface-ready signal: builds the map inside `container`.
    pub fn attach(&mut self, container: HtmlElement) -> std::result::Result<(), JsError> {
        let label = self.manager.config().aria_label.clone();
        container
            .set_attribute("role", "application")
            .and_then(|_| container.set_attribute("aria-label", &label))
            .map_err(|e| JsError::new(&engine::js_reason(&e)))?;

        if let Err(e) = self.manager.surface_ready(container, current_platform()) {
            web_sys::console::error_1(&format!("boundary-map: {e}").into());
            return Err(e.into());
        }
        Ok(())
    }

    /// Show `geocode` (e.g. `'10__'` or `'610604;610607'`), replacing what is
    /// currently shown for that same geocode.
    pub fn load_boundary(
        &mut self,
        geocode: &str,
        options: JsValue,
    ) -> std::result::Result<(), JsError> {
        let options = options_from_js(options)?;
        self.manager.load_boundary(geocode, &options)?;
        Ok(())
    }

    /// Remove all overlays (markers, boundaries, etc.) from the map.
    pub fn clear_overlays(&mut self) -> std::result::Result<(), JsError> {
        self.manager.clear_overlays()?;
        self.markers.clear();
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.manager.is_ready()
    }

    pub fn boundary_count(&self) -> usize {
        self.manager.registry().len()
    }

    /// Geocodes currently shown, in the order they were first loaded.
    pub fn geocodes(&self) -> js_sys::Array {
        self.manager
            .registry()
            .geocodes()
            .map(|g| JsValue::from_str(g.as_str()))
            .collect()
    }

    /// Effective configuration as a plain JS object.
    pub fn config(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_js(self.manager.config())?)
    }

    /// Adds a marker and returns its id, or `undefined` before `attach`.
    pub fn add_marker(
        &mut self,
        lon: f64,
        lat: f64,
        title: Option<String>,
    ) -> std::result::Result<Option<u32>, JsError> {
        let Some(map) = self.manager.map_handle_mut() else {
            return Ok(None);
        };
        let location = to_js(&LatLon { lon, lat })?;
        let options = js_sys::Object::new();
        if let Some(title) = title {
            js_sys::Reflect::set(&options, &"title".into(), &title.into())
                .map_err(|e| JsError::new(&engine::js_reason(&e)))?;
        }
        let marker: JsValue = sys::LongdoMarker::new(&location, &options)
            .map_err(|e| JsError::new(&engine::js_reason(&e)))?
            .into();
        map.add_overlay(&marker)?;

        let id = free_marker_id(&self.markers, self.next_marker);
        self.next_marker = id.wrapping_add(1);
        self.markers.insert(id, marker);
        Ok(Some(id))
    }

    /// Removes a marker added with `add_marker`. Returns `false` for unknown ids.
    pub fn remove_marker(&mut self, id: u32) -> std::result::Result<bool, JsError> {
        let Some(map) = self.manager.map_handle_mut() else {
            return Ok(false);
        };
        let Some(marker) = self.markers.get(&id) else {
            return Ok(false);
        };
        map.remove_overlay(marker)?;
        self.markers.remove(&id);
        Ok(true)
    }

    pub fn zoom(&self) -> Option<f64> {
        self.manager.map_handle().map(|m| m.zoom())
    }

    pub fn set_zoom(&mut self, level: f64) -> std::result::Result<(), JsError> {
        if let Some(map) = self.manager.map_handle_mut() {
            map.set_zoom(level)?;
        }
        Ok(())
    }

    pub fn set_location(
        &mut self,
        lon: f64,
        lat: f64,
        animate: bool,
    ) -> std::result::Result<(), JsError> {
        if let Some(map) = self.manager.map_handle_mut() {
            map.set_location(LatLon { lon, lat }, animate)?;
        }
        Ok(())
    }

    pub fn resize(&mut self) -> std::result::Result<(), JsError> {
        if let Some(map) = self.manager.map_handle_mut() {
            map.resize()?;
        }
        Ok(())
    }

    /// Teardown: drops the map and every overlay reference.
    pub fn dispose(&mut self) {
        self.markers.clear();
        self.manager.dispose();
    }
}
