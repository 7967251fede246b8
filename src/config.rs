// ============================================================================
// CONFIG - Configuración de la app (tiempo de compilación via build.rs/.env)
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::models::Coordinates;
use crate::utils::constants::PHARMACIES_PATH;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub sponsor_image_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://3.142.202.105:7484".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
            sponsor_image_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Espera antes de montar el mapa (ms)
    pub mount_delay_ms: u32,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 45.438351,
            default_center_lng: 10.99171,
            default_zoom: 13.0,
            mount_delay_ms: 500,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution:
                "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors"
                    .to_string(),
        }
    }
}

impl MapConfig {
    /// Centro por defecto (Verona) cuando el GPS todavía no respondió
    pub fn default_center(&self) -> Coordinates {
        Coordinates::new(self.default_center_lat, self.default_center_lng)
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let map_defaults = defaults.map_config.clone();

        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            map_config: MapConfig {
                default_center_lat: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    map_defaults.default_center_lat,
                ),
                default_center_lng: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    map_defaults.default_center_lng,
                ),
                default_zoom: parse_or(option_env!("DEFAULT_MAP_ZOOM"), map_defaults.default_zoom),
                mount_delay_ms: parse_or(
                    option_env!("MAP_MOUNT_DELAY_MS"),
                    map_defaults.mount_delay_ms,
                ),
                tile_url: option_env!("TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(map_defaults.tile_url),
                tile_attribution: option_env!("TILE_ATTRIBUTION")
                    .map(str::to_string)
                    .unwrap_or(map_defaults.tile_attribution),
            },
            sponsor_image_url: option_env!("SPONSOR_IMAGE_URL")
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string),
        }
    }

    /// URL completa del endpoint de farmacias
    pub fn pharmacies_url(&self) -> String {
        format!("{}{}", self.backend_url.trim_end_matches('/'), PHARMACIES_PATH)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
