// ============================================================================
// LEAFLET FFI - Foreign Function Interface para Leaflet (global `L`)
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;
use crate::models::Coordinates;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn create_map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &LeafletMap, center: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &LeafletMap) -> f64;

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on_map(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, content: &str) -> Layer;

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Layer, lat_lng: &JsValue) -> Layer;

    #[wasm_bindgen(method)]
    pub fn on(this: &Layer, event: &str, handler: &js_sys::Function) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    pub type LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

    pub type Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_control_to(this: &Control, map: &LeafletMap) -> Control;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    pub fn geo_json(data: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    /// Plugin Leaflet.markercluster (opcional)
    #[wasm_bindgen(js_namespace = L, js_name = markerClusterGroup)]
    fn marker_cluster_group() -> LayerGroup;

    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = layers)]
    pub fn layers_control(base_layers: &JsValue, overlays: &JsValue, options: &JsValue) -> Control;
}

#[derive(Serialize)]
pub struct MapOptions {
    #[serde(rename = "zoomControl")]
    pub zoom_control: bool,
}

#[derive(Serialize)]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
    #[serde(rename = "maxZoom")]
    pub max_zoom: u8,
}

#[derive(Serialize)]
pub struct LayersControlOptions {
    pub position: &'static str,
}

/// `[lat, lng]` para Leaflet
pub fn lat_lng(coordinates: Coordinates) -> JsValue {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_f64(coordinates.latitude));
    array.push(&JsValue::from_f64(coordinates.longitude));
    array.into()
}

/// Serializa a objeto JS plano (los Map de serde_json como objetos, no `Map`)
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Grupo de cluster si el plugin está cargado, `layerGroup` si no
pub fn cluster_or_group() -> LayerGroup {
    let has_plugin = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("L"))
        .ok()
        .filter(|l| !l.is_undefined())
        .and_then(|l| js_sys::Reflect::has(&l, &JsValue::from_str("markerClusterGroup")).ok())
        .unwrap_or(false);

    if has_plugin {
        marker_cluster_group()
    } else {
        log::warn!("⚠️ [MAP] Leaflet.markercluster no disponible, usando layerGroup");
        layer_group()
    }
}
