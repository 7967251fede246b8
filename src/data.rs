// ============================================================================
// DATA - Límites administrativos empaquetados (circoscrizioni / quartieri)
// ============================================================================
// Se incrustan en tiempo de compilación y se parsean una sola vez
// ============================================================================

use crate::models::FeatureCollection;

// Polígonos simplificados (rectángulos) con las claves reales `circoscriz` /
// `quartiere`. Sustituir por el GeoJSON municipal de Verona antes de publicar.
const DISTRICTS_JSON: &str = include_str!("../data/circoscrizioni.json");
const NEIGHBORHOODS_JSON: &str = include_str!("../data/quartieri.json");

lazy_static::lazy_static! {
    static ref DISTRICTS: FeatureCollection = parse_bundled("circoscrizioni", DISTRICTS_JSON);
    static ref NEIGHBORHOODS: FeatureCollection = parse_bundled("quartieri", NEIGHBORHOODS_JSON);
}

/// Circoscrizioni (propiedad `circoscriz`)
pub fn districts() -> &'static FeatureCollection {
    &DISTRICTS
}

/// Quartieri (propiedad `quartiere`)
pub fn neighborhoods() -> &'static FeatureCollection {
    &NEIGHBORHOODS
}

/// Un archivo corrupto deja la capa vacía, no rompe la pantalla
fn parse_bundled(name: &str, raw: &str) -> FeatureCollection {
    match serde_json::from_str::<FeatureCollection>(raw) {
        Ok(collection) => {
            log::debug!("🗂️ [DATA] {}: {} polígonos", name, collection.len());
            collection
        }
        Err(e) => {
            log::error!("❌ [DATA] Error parseando {}: {}", name, e);
            FeatureCollection::default()
        }
    }
}
