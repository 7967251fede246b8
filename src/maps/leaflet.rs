use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use crate::models::{Coordinates, MapError};
use crate::utils::leaflet_ffi::{self as ffi, LayerGroup, LeafletMap, Layer};
use super::{BoundaryShape, LayerControlSpec, MapRenderer, MountOptions, PharmacyMarker};

/// Renderizador de mapas para web usando Leaflet
pub struct LeafletRenderer {
    map: Option<LeafletMap>,
    user_marker: Option<Layer>,
    pharmacy_layer: Option<LayerGroup>,
    marker_click_callback: Option<Rc<dyn Fn(usize)>>,
    zoom_callback: Option<Rc<dyn Fn(f64)>>,
    zoom_closure: Option<Closure<dyn FnMut()>>,
    // Los closures de click deben vivir mientras existan los marcadores
    marker_closures: Vec<Closure<dyn FnMut()>>,
}

impl LeafletRenderer {
    pub fn new() -> Self {
        Self {
            map: None,
            user_marker: None,
            pharmacy_layer: None,
            marker_click_callback: None,
            zoom_callback: None,
            zoom_closure: None,
            marker_closures: Vec::new(),
        }
    }

    fn map(&self) -> Result<&LeafletMap, MapError> {
        self.map.as_ref().ok_or(MapError::NotReady)
    }

    fn boundary_group(shapes: &[BoundaryShape]) -> Result<LayerGroup, MapError> {
        let group = ffi::layer_group();
        for shape in shapes {
            let data = ffi::to_js(&shape.feature).map_err(js_error)?;
            let layer = ffi::geo_json(&data);
            if let Some(popup) = &shape.popup {
                layer.bind_popup(popup);
            }
            group.add_layer(&layer);
        }
        Ok(group)
    }
}

impl Default for LeafletRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MapRenderer for LeafletRenderer {
    fn mount(&mut self, options: &MountOptions) -> Result<(), MapError> {
        if self.map.is_some() {
            return Err(MapError::AlreadyMounted);
        }
        if !options.center.is_valid() {
            return Err(MapError::InvalidCoordinates);
        }
        log::info!("🗺️ [MAP] Inicializando Leaflet en #{}...", options.container_id);

        let map_options = ffi::to_js(&ffi::MapOptions { zoom_control: true }).map_err(js_error)?;
        let map = ffi::create_map(&options.container_id, &map_options).map_err(js_error)?;
        map.set_view(&ffi::lat_lng(options.center), options.zoom);

        if let Some(callback) = self.zoom_callback.clone() {
            let zoomed = map.clone();
            let closure = Closure::wrap(Box::new(move || callback(zoomed.get_zoom())) as Box<dyn FnMut()>);
            map.on_map("zoomend", closure.as_ref().unchecked_ref());
            self.zoom_closure = Some(closure);
        }
        self.map = Some(map);

        log::info!("✅ [MAP] Mapa inicializado correctamente");
        Ok(())
    }

    fn unmount(&mut self) {
        if let Some(map) = self.map.take() {
            map.remove();
            log::info!("🧹 [MAP] Mapa destruido");
        }
        self.user_marker = None;
        self.pharmacy_layer = None;
        self.zoom_closure = None;
        self.marker_closures.clear();
    }

    fn add_layers(&mut self, layers: &LayerControlSpec) -> Result<(), MapError> {
        let map = self.map()?;

        let tile_options = ffi::to_js(&ffi::TileLayerOptions {
            attribution: &layers.base_tiles.attribution,
            max_zoom: 19,
        })
        .map_err(js_error)?;
        ffi::tile_layer(&layers.base_tiles.url, &tile_options).add_to(map);

        let base_layers = js_sys::Object::new();
        for choice in &layers.choices {
            let group = match &choice.shapes {
                Some(shapes) => Self::boundary_group(shapes)?,
                None => ffi::layer_group(),
            };
            if choice.checked {
                group.add_to(map);
            }
            js_sys::Reflect::set(&base_layers, &JsValue::from_str(choice.name), &group)
                .map_err(js_error)?;
        }

        let control_options = ffi::to_js(&ffi::LayersControlOptions { position: "topright" })
            .map_err(js_error)?;
        ffi::layers_control(&base_layers, &js_sys::Object::new(), &control_options)
            .add_control_to(map);

        log::info!("🗂️ [MAP] {} capas en el control", layers.choices.len());
        Ok(())
    }

    fn set_user_marker(&mut self, position: Coordinates, label: &str) -> Result<(), MapError> {
        let lat_lng = ffi::lat_lng(position);
        if let Some(marker) = &self.user_marker {
            marker.set_lat_lng(&lat_lng);
            return Ok(());
        }
        let map = self.map()?;
        let marker = ffi::marker(&lat_lng).bind_popup(label).add_to(map);
        self.user_marker = Some(marker);
        Ok(())
    }

    fn set_pharmacy_markers(&mut self, markers: &[PharmacyMarker]) -> Result<(), MapError> {
        let map = self.map()?.clone();

        let group = match self.pharmacy_layer.take() {
            Some(group) => group.clear_layers(),
            None => {
                let group = ffi::cluster_or_group();
                group.add_to(&map);
                group
            }
        };
        self.marker_closures.clear();

        for pharmacy in markers {
            let marker = ffi::marker(&ffi::lat_lng(pharmacy.position));
            marker.bind_popup(&pharmacy.label);

            if let Some(callback) = self.marker_click_callback.clone() {
                let index = pharmacy.index;
                let closure = Closure::wrap(Box::new(move || callback(index)) as Box<dyn FnMut()>);
                marker.on("click", closure.as_ref().unchecked_ref());
                self.marker_closures.push(closure);
            }
            group.add_layer(&marker);
        }

        self.pharmacy_layer = Some(group);
        log::info!("📍 [MAP] {} farmacias en el mapa", markers.len());
        Ok(())
    }

    fn fly_to(&mut self, center: Coordinates) -> Result<(), MapError> {
        log::info!("🎯 [MAP] flyTo ({}, {})", center.latitude, center.longitude);
        self.map()?.fly_to(&ffi::lat_lng(center));
        Ok(())
    }

    fn set_marker_click_callback(&mut self, callback: Rc<dyn Fn(usize)>) {
        self.marker_click_callback = Some(callback);
    }

    fn set_zoom_callback(&mut self, callback: Rc<dyn Fn(f64)>) {
        self.zoom_callback = Some(callback);
    }
}

fn js_error(err: JsValue) -> MapError {
    MapError::Library(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
