// ============================================================================
// GEO MODELS - GeoJSON (farmacias del backend + límites empaquetados)
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Posición GeoJSON: `[lng, lat]` o `[lng, lat, alt]`
pub type Position = Vec<f64>;

/// Coordenadas geográficas (lat/lng, orden "humano")
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Convierte una posición GeoJSON (lng primero)
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] if lat.is_finite() && lng.is_finite() => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

impl Geometry {
    /// Coordenadas del punto, si la geometría es un Point válido
    pub fn point(&self) -> Option<Coordinates> {
        match self {
            Geometry::Point { coordinates } => Coordinates::from_position(coordinates),
            _ => None,
        }
    }

    pub fn is_polygonal(&self) -> bool {
        matches!(self, Geometry::Polygon { .. } | Geometry::MultiPolygon { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    /// Una geometría desconocida o mal formada queda en `None` (sólo esa feature)
    #[serde(default, deserialize_with = "lenient_geometry")]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    pub fn point(latitude: f64, longitude: f64, properties: Map<String, Value>) -> Self {
        Self {
            kind: feature_type(),
            geometry: Some(Geometry::Point {
                coordinates: vec![longitude, latitude],
            }),
            properties: Some(properties),
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.geometry.as_ref().and_then(Geometry::point)
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Propiedad como texto (números y booleanos se formatean, null se ignora)
    pub fn property_text(&self, key: &str) -> Option<String> {
        value_text(self.property(key)?)
    }
}

/// Texto visible de un valor escalar JSON
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "Sì" } else { "No" }.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self {
            kind: collection_type(),
            features: Vec::new(),
        }
    }
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: collection_type(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn lenient_geometry<'de, D>(deserializer: D) -> Result<Option<Geometry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value::<Geometry>(value) {
        Ok(geometry) => Some(geometry),
        Err(e) => {
            log::warn!("⚠️ [GEO] Geometría ignorada: {}", e);
            None
        }
    }))
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn point_uses_geojson_lng_lat_order() {
        let feature: Feature = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [10.99171, 45.438351] },
            "properties": { "nome": "FARMACIA ALL'ARENA" }
        }))
        .unwrap();

        let coords = feature.coordinates().unwrap();
        assert_eq!(coords.latitude, 45.438351);
        assert_eq!(coords.longitude, 10.99171);
        assert_eq!(feature.property_text("nome").as_deref(), Some("FARMACIA ALL'ARENA"));
    }

    #[test]
    fn point_with_altitude_is_accepted() {
        let geometry = Geometry::Point {
            coordinates: vec![11.0, 45.4, 59.0],
        };
        assert_eq!(geometry.point(), Some(Coordinates::new(45.4, 11.0)));
    }

    #[test]
    fn degenerate_positions_have_no_coordinates() {
        assert_eq!(Coordinates::from_position(&[11.0]), None);
        assert_eq!(Coordinates::from_position(&[f64::NAN, 45.0]), None);

        let polygon = Geometry::Polygon {
            coordinates: vec![vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]],
        };
        assert_eq!(polygon.point(), None);
        assert!(polygon.is_polygonal());
    }

    #[test]
    fn collection_tolerates_missing_fields() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.is_empty());
        assert_eq!(collection.kind, "FeatureCollection");

        let collection: FeatureCollection = serde_json::from_value(json!({
            "features": [
                { "geometry": null, "properties": null },
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [11.0, 45.4] } }
            ]
        }))
        .unwrap();
        assert_eq!(collection.len(), 2);
        assert!(collection.features[0].coordinates().is_none());
        assert!(collection.features[0].property("nome").is_none());
    }

    #[test]
    fn unsupported_geometry_only_drops_that_feature() {
        let collection: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": [11.0, 45.4] } },
                { "type": "Feature", "geometry": { "type": "GeometryCollection", "geometries": [
                    { "type": "Point", "coordinates": [10.99, 45.44] }
                ] } },
                { "type": "Feature", "geometry": { "type": "Circle", "radius": 30 } },
                { "type": "Feature", "geometry": { "type": "Point", "coordinates": null } }
            ]
        }))
        .unwrap();

        assert_eq!(collection.len(), 4);
        assert_eq!(collection.features[0].coordinates(), Some(Coordinates::new(45.4, 11.0)));
        assert!(matches!(
            collection.features[1].geometry,
            Some(Geometry::GeometryCollection { .. })
        ));
        assert_eq!(collection.features[1].coordinates(), None);
        assert_eq!(collection.features[2].geometry, None);
        assert_eq!(collection.features[3].geometry, None);
    }

    #[test]
    fn value_text_formats_scalars_only() {
        assert_eq!(value_text(&json!(" Via Roma 1 ")).as_deref(), Some("Via Roma 1"));
        assert_eq!(value_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(value_text(&json!(true)).as_deref(), Some("Sì"));
        assert_eq!(value_text(&json!("   ")), None);
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!({ "a": 1 })), None);
    }
}
