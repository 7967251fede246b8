// ============================================================================
// GEOLOCATION SERVICE - Una sola petición a navigator.geolocation
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::GeolocationPosition;
use crate::models::{Coordinates, GeolocationError};

/// Posición actual del dispositivo (sin timeout propio ni reintentos)
pub async fn current_position() -> Result<Coordinates, GeolocationError> {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    log::info!("📍 [GPS] Solicitando posición actual...");
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let value = JsFuture::from(promise).await.map_err(|e| error_from_js(&e))?;
    let position: GeolocationPosition = value
        .dyn_into()
        .map_err(|_| GeolocationError::PositionUnavailable)?;
    let coords = position.coords();
    Ok(Coordinates::new(coords.latitude(), coords.longitude()))
}

/// `GeolocationPositionError.code` -> tipo de error
fn error_from_js(err: &JsValue) -> GeolocationError {
    js_sys::Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| GeolocationError::from_code(code as u16))
        .unwrap_or(GeolocationError::PositionUnavailable)
}
