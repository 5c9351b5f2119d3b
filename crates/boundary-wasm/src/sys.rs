// crates/boundary-wasm/src/sys.rs

//! Raw bindings to the global `longdo` object of the Longdo Map JavaScript
//! API. The script must be loaded by the page before any map is built.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `longdo.Map`
    #[wasm_bindgen(js_namespace = longdo, js_name = Map)]
    pub type LongdoMap;

    #[wasm_bindgen(catch, constructor, js_namespace = longdo, js_class = "Map")]
    pub fn new(options: &JsValue) -> Result<LongdoMap, JsValue>;

    #[wasm_bindgen(method, getter = Overlays)]
    pub fn overlays(this: &LongdoMap) -> OverlayLayer;

    #[wasm_bindgen(method, js_name = zoom)]
    pub fn zoom(this: &LongdoMap) -> f64;

    #[wasm_bindgen(catch, method, js_name = zoom)]
    pub fn set_zoom(this: &LongdoMap, level: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = location)]
    pub fn location(this: &LongdoMap) -> JsValue;

    #[wasm_bindgen(catch, method, js_name = location)]
    pub fn set_location(this: &LongdoMap, location: &JsValue, animate: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn resize(this: &LongdoMap) -> Result<(), JsValue>;

    /// The `map.Overlays` collection.
    pub type OverlayLayer;

    /// Regular overlays (markers, polygons, ...). Does not accept boundary objects.
    #[wasm_bindgen(catch, method)]
    pub fn add(this: &OverlayLayer, overlay: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn remove(this: &OverlayLayer, overlay: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn load(this: &OverlayLayer, overlay: &BoundaryObject) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn unload(this: &OverlayLayer, overlay: &BoundaryObject) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    pub fn clear(this: &OverlayLayer) -> Result<(), JsValue>;

    /// `longdo.Overlays.Object`, a boundary loaded from the geocode layer.
    #[wasm_bindgen(js_namespace = ["longdo", "Overlays"], js_name = Object)]
    pub type BoundaryObject;

    #[wasm_bindgen(catch, constructor, js_namespace = ["longdo", "Overlays"], js_class = "Object")]
    pub fn new(geocode: &str, kind: &str, options: &JsValue) -> Result<BoundaryObject, JsValue>;

    /// `longdo.Marker`
    #[wasm_bindgen(js_namespace = longdo, js_name = Marker)]
    pub type LongdoMarker;

    #[wasm_bindgen(catch, constructor, js_namespace = longdo, js_class = "Marker")]
    pub fn new(location: &JsValue, options: &JsValue) -> Result<LongdoMarker, JsValue>;
}
