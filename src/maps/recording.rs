// Renderizador en memoria para tests: registra cada llamada

use std::rc::Rc;
use crate::models::{Coordinates, MapError};
use super::{LayerControlSpec, MapRenderer, MountOptions, PharmacyMarker};

#[derive(Default)]
pub struct RecordingRenderer {
    pub mounts: Vec<MountOptions>,
    pub unmounts: usize,
    pub layers: Option<LayerControlSpec>,
    pub user_marker: Option<(Coordinates, String)>,
    pub markers: Vec<PharmacyMarker>,
    pub marker_updates: usize,
    pub flights: Vec<Coordinates>,
    pub click_callback: Option<Rc<dyn Fn(usize)>>,
    pub zoom_callback: Option<Rc<dyn Fn(f64)>>,
    mounted: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simula un click en el marcador `index`
    pub fn click(&self, index: usize) {
        if let Some(callback) = &self.click_callback {
            callback(index);
        }
    }

    /// Simula un zoom del usuario
    pub fn zoom(&self, level: f64) {
        if let Some(callback) = &self.zoom_callback {
            callback(level);
        }
    }
}

impl MapRenderer for RecordingRenderer {
    fn mount(&mut self, options: &MountOptions) -> Result<(), MapError> {
        if self.mounted {
            return Err(MapError::AlreadyMounted);
        }
        self.mounts.push(options.clone());
        self.mounted = true;
        Ok(())
    }

    fn unmount(&mut self) {
        if self.mounted {
            self.unmounts += 1;
        }
        self.mounted = false;
        self.markers.clear();
        self.user_marker = None;
    }

    fn add_layers(&mut self, layers: &LayerControlSpec) -> Result<(), MapError> {
        if !self.mounted {
            return Err(MapError::NotReady);
        }
        self.layers = Some(layers.clone());
        Ok(())
    }

    fn set_user_marker(&mut self, position: Coordinates, label: &str) -> Result<(), MapError> {
        if !self.mounted {
            return Err(MapError::NotReady);
        }
        self.user_marker = Some((position, label.to_string()));
        Ok(())
    }

    fn set_pharmacy_markers(&mut self, markers: &[PharmacyMarker]) -> Result<(), MapError> {
        if !self.mounted {
            return Err(MapError::NotReady);
        }
        self.markers = markers.to_vec();
        self.marker_updates += 1;
        Ok(())
    }

    fn fly_to(&mut self, center: Coordinates) -> Result<(), MapError> {
        if !self.mounted {
            return Err(MapError::NotReady);
        }
        self.flights.push(center);
        Ok(())
    }

    fn set_marker_click_callback(&mut self, callback: Rc<dyn Fn(usize)>) {
        self.click_callback = Some(callback);
    }

    fn set_zoom_callback(&mut self, callback: Rc<dyn Fn(f64)>) {
        self.zoom_callback = Some(callback);
    }
}
