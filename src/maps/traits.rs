use std::rc::Rc;
use crate::models::{Coordinates, Feature, MapError};

/// Trait común para renderizadores de mapas (Leaflet en web, dobles en tests)
pub trait MapRenderer {
    /// Construir el mapa dentro del contenedor
    fn mount(&mut self, options: &MountOptions) -> Result<(), MapError>;

    /// Destruir el mapa (no falla si no estaba montado)
    fn unmount(&mut self);

    /// Capa base fija + control de capas (grupo exclusivo)
    fn add_layers(&mut self, layers: &LayerControlSpec) -> Result<(), MapError>;

    /// Crear o mover el marcador "Tu sei qui"
    fn set_user_marker(&mut self, position: Coordinates, label: &str) -> Result<(), MapError>;

    /// Reemplazar todos los marcadores de farmacias
    fn set_pharmacy_markers(&mut self, markers: &[PharmacyMarker]) -> Result<(), MapError>;

    fn fly_to(&mut self, center: Coordinates) -> Result<(), MapError>;

    /// Callback con el índice de la farmacia pulsada
    fn set_marker_click_callback(&mut self, callback: Rc<dyn Fn(usize)>);

    /// Callback con el nuevo zoom tras un cambio hecho por el usuario
    fn set_zoom_callback(&mut self, callback: Rc<dyn Fn(f64)>);
}

/// Opciones de construcción del mapa
#[derive(Debug, Clone, PartialEq)]
pub struct MountOptions {
    pub container_id: String,
    pub center: Coordinates,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerSpec {
    pub url: String,
    pub attribution: String,
}

/// Un polígono de límite con su popup ya formateado
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryShape {
    pub feature: Feature,
    pub popup: Option<String>,
}

/// Entrada del grupo exclusivo del control de capas
#[derive(Debug, Clone, PartialEq)]
pub struct LayerChoice {
    pub name: &'static str,
    pub checked: bool,
    /// `None` = sin overlay (sólo la capa base)
    pub shapes: Option<Vec<BoundaryShape>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerControlSpec {
    /// Única capa de teselas, siempre visible
    pub base_tiles: TileLayerSpec,
    pub choices: Vec<LayerChoice>,
}

/// Marcador de farmacia listo para el mapa
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyMarker {
    /// Índice de la feature en la colección original
    pub index: usize,
    pub position: Coordinates,
    pub label: String,
}
