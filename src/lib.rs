// ============================================================================
// FARMACIE A VERONA - Mapa de farmacias (RUST PURO + MVVM)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI (testeable sin navegador)
// - Services: SOLO comunicación (API, GPS)
// - State: Estado de la pantalla + store del mapa
// - Maps: trait MapRenderer + implementación Leaflet
// ============================================================================

pub mod config;
pub mod data;
pub mod maps;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod views;

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use crate::app::MapScreen;
    use crate::config::CONFIG;
    use crate::state::MountedSlot;

    thread_local! {
        static SCREEN: MountedSlot<MapScreen> = MountedSlot::new();
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Warn
        };
        wasm_logger::init(wasm_logger::Config::new(level));
        log::info!("🚀 Farmacie a Verona - Rust + WASM ({})", CONFIG.environment);

        let screen = MapScreen::new("app")?;
        SCREEN.with(|slot| slot.set(screen));

        // start() después de guardar: los callbacks buscan la pantalla en SCREEN
        with_screen(|screen| screen.start());
        Ok(())
    }

    /// Ejecuta `f` si la pantalla sigue montada (si no, el callback se descarta).
    /// `f` puede llamar a `unmount_screen`.
    pub fn with_screen<F>(f: F)
    where
        F: FnOnce(&MapScreen),
    {
        if SCREEN.with(|slot| slot.with(f)).is_none() {
            log::debug!("🔇 [APP] Pantalla desmontada, callback ignorado");
        }
    }

    /// Re-render completo (llamable desde timers y subscribers)
    pub fn rerender_screen() {
        with_screen(|screen| screen.refresh());
    }

    /// Desmontar la pantalla (llamable desde JavaScript)
    #[wasm_bindgen]
    pub fn unmount_screen() {
        let screen = SCREEN.with(|slot| slot.take());
        match screen {
            Some(screen) => screen.tear_down(),
            None => log::warn!("⚠️ [APP] unmount_screen sin pantalla montada"),
        }
    }

    /// Botón de recentrar (llamable desde JavaScript)
    #[wasm_bindgen]
    pub fn recenter_map() {
        with_screen(|screen| screen.recenter());
    }
}
