// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use crate::config::MapConfig;
use crate::data;
use crate::maps::{BoundaryShape, LayerChoice, LayerControlSpec, PharmacyMarker, TileLayerSpec};
use crate::models::{geo::value_text, Feature, FeatureCollection};
use crate::utils::constants::*;
use crate::utils::text::{humanize_key, title_case};

/// Fila del modal de detalle ("Indirizzo: Via Mazzini 1")
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// Contenido del modal de una farmacia
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDetails {
    pub title: String,
    pub rows: Vec<DetailRow>,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    /// Polígonos con el popup en title case (`SAN ZENO` -> `San Zeno`)
    pub fn boundary_shapes(collection: &FeatureCollection, label_key: &str) -> Vec<BoundaryShape> {
        collection
            .features
            .iter()
            .map(|feature| BoundaryShape {
                feature: feature.clone(),
                popup: feature.property_text(label_key).map(|label| title_case(&label)),
            })
            .collect()
    }

    /// Una sola capa de teselas fija + grupo exclusivo base/circoscrizioni/quartieri
    pub fn layer_control(config: &MapConfig) -> LayerControlSpec {
        LayerControlSpec {
            base_tiles: TileLayerSpec {
                url: config.tile_url.clone(),
                attribution: config.tile_attribution.clone(),
            },
            choices: vec![
                LayerChoice {
                    name: LAYER_BASE_NAME,
                    checked: true,
                    shapes: None,
                },
                LayerChoice {
                    name: LAYER_DISTRICTS_NAME,
                    checked: false,
                    shapes: Some(Self::boundary_shapes(data::districts(), DISTRICT_LABEL_KEY)),
                },
                LayerChoice {
                    name: LAYER_NEIGHBORHOODS_NAME,
                    checked: false,
                    shapes: Some(Self::boundary_shapes(
                        data::neighborhoods(),
                        NEIGHBORHOOD_LABEL_KEY,
                    )),
                },
            ],
        }
    }

    /// Un marcador por feature con punto válido; el índice apunta a la colección
    pub fn prepare_pharmacy_markers(collection: &FeatureCollection) -> Vec<PharmacyMarker> {
        let markers: Vec<PharmacyMarker> = collection
            .features
            .iter()
            .enumerate()
            .filter_map(|(index, feature)| {
                let Some(position) = feature.coordinates() else {
                    log::warn!("⚠️ [MAP] Farmacia {} sin coordenadas, se omite", index);
                    return None;
                };
                Some(PharmacyMarker {
                    index,
                    position,
                    label: Self::pharmacy_title(feature),
                })
            })
            .collect();

        log::info!(
            "📍 Preparados {} marcadores (de {} farmacias)",
            markers.len(),
            collection.len()
        );
        markers
    }

    pub fn pharmacy_title(feature: &Feature) -> String {
        PHARMACY_NAME_KEYS
            .iter()
            .find_map(|key| feature.property_text(key))
            .map(|name| title_case(&name))
            .unwrap_or_else(|| DEFAULT_PHARMACY_TITLE.to_string())
    }

    /// Título + propiedades escalares restantes (en el orden de las claves)
    pub fn location_details(feature: &Feature) -> LocationDetails {
        let rows = feature
            .properties
            .iter()
            .flatten()
            .filter(|(key, _)| !PHARMACY_NAME_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| {
                Some(DetailRow {
                    label: humanize_key(key),
                    value: value_text(value)?,
                })
            })
            .collect();

        LocationDetails {
            title: Self::pharmacy_title(feature),
            rows,
        }
    }
}
