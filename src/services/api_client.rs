// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use crate::config::AppConfig;
use crate::models::{ApiError, FeatureCollection};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    pharmacies_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            pharmacies_url: config.pharmacies_url(),
        }
    }

    pub fn pharmacies_url(&self) -> &str {
        &self.pharmacies_url
    }

    /// GET /get/farmacie (sin auth, sin paginación, sin reintentos)
    #[cfg(target_arch = "wasm32")]
    pub async fn get_pharmacies(&self) -> Result<FeatureCollection, ApiError> {
        use gloo_net::http::Request;

        log::info!("💊 [API] GET {}", self.pharmacies_url());
        let response = Request::get(self.pharmacies_url())
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        parse_pharmacies(&body)
    }
}

/// Cuerpo de la respuesta -> colección de farmacias
pub fn parse_pharmacies(body: &str) -> Result<FeatureCollection, ApiError> {
    let collection: FeatureCollection = serde_json::from_str(body)?;
    log::debug!("📦 [API] {} bytes, {} features", body.len(), collection.len());
    Ok(collection)
}
