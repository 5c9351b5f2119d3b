// crates/boundary-wasm/src/engine.rs

//! [`MapEngine`] implementation on top of the Longdo Map JavaScript API.

use crate::sys::{BoundaryObject, LongdoMap};
use boundary_core::config::RESTORE_LAST_VIEW;
use boundary_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Constructor options of `longdo.Map`, minus the placeholder element which
/// is attached separately.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    zoom: f64,
    zoom_range: ZoomRange,
    location: LatLon,
    last_view: bool,
}

/// Best-effort human readable text for a thrown JS value.
pub(crate) fn js_reason(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `null` must survive serialization (`fillColor: null` means "no fill"), and
/// flattened structs must come out as plain objects rather than `Map`s.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    let serializer = Serializer::new()
        .serialize_missing_as_null(true)
        .serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| MapError::Config(e.to_string()))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LongdoEngine;

impl MapEngine for LongdoEngine {
    type Surface = HtmlElement;
    type Handle = LongdoHandle;

    fn create_map(&self, surface: HtmlElement, view: &MapView) -> Result<LongdoHandle> {
        let options = to_js(&MapOptions {
            zoom: view.zoom,
            zoom_range: view.zoom_range,
            location: view.location,
            last_view: RESTORE_LAST_VIEW,
        })?;
        js_sys::Reflect::set(&options, &"placeholder".into(), surface.as_ref())
            .map_err(|e| MapError::Construction(js_reason(&e)))?;

        let map = LongdoMap::new(&options).map_err(|e| MapError::Construction(js_reason(&e)))?;
        Ok(LongdoHandle {
            map,
            home: view.location,
        })
    }

    fn boundary_object(
        &self,
        geocode: &Geocode,
        kind: OverlayKind,
        options: &BoundaryOptions,
    ) -> Result<BoundaryObject> {
        let js_options = to_js(options)?;
        BoundaryObject::new(geocode.as_str(), kind.tag(), &js_options)
            .map_err(|e| MapError::boundary(geocode.as_str(), js_reason(&e)))
    }
}

/// A live `longdo.Map`.
pub struct LongdoHandle {
    map: LongdoMap,
    /// Reported when the engine returns a location we cannot read.
    home: LatLon,
}

fn op(name: &'static str) -> impl Fn(JsValue) -> MapError {
    move |e| MapError::engine(name, js_reason(&e))
}

impl MapHandle for LongdoHandle {
    type Overlay = BoundaryObject;
    type Marker = JsValue;

    fn add_overlay(&mut self, overlay: &JsValue) -> Result<()> {
        self.map.overlays().add(overlay).map_err(op("add"))
    }

    fn remove_overlay(&mut self, overlay: &JsValue) -> Result<()> {
        self.map.overlays().remove(overlay).map_err(op("remove"))
    }

    fn load_boundary_overlay(&mut self, overlay: &BoundaryObject) -> Result<()> {
        self.map.overlays().load(overlay).map_err(op("load"))
    }

    fn unload_boundary_overlay(&mut self, overlay: &BoundaryObject) -> Result<()> {
        self.map.overlays().unload(overlay).map_err(op("unload"))
    }

    fn clear_all_overlays(&mut self) -> Result<()> {
        self.map.overlays().clear().map_err(op("clear"))
    }

    fn zoom(&self) -> f64 {
        self.map.zoom()
    }

    fn set_zoom(&mut self, level: f64) -> Result<()> {
        self.map.set_zoom(level).map_err(op("zoom"))
    }

    fn location(&self) -> LatLon {
        serde_wasm_bindgen::from_value(self.map.location()).unwrap_or_else(|e| {
            web_sys::console::debug_1(
                &format!("boundary-map: unreadable map location: {e}").into(),
            );
            self.home
        })
    }

    fn set_location(&mut self, location: LatLon, animate: bool) -> Result<()> {
        let js_location = to_js(&location)?;
        self.map
            .set_location(&js_location, animate)
            .map_err(op("location"))
    }

    fn resize(&mut self) -> Result<()> {
        self.map.resize().map_err(op("resize"))
    }
}
