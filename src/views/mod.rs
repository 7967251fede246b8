// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica)
// ============================================================================

pub mod header;
pub mod fallback;
pub mod map_page;
pub mod toast;
pub mod location_modal;
pub mod footer;

pub use header::render_header;
pub use fallback::render_fallback;
pub use map_page::render_map_page;
pub use toast::render_toast;
pub use location_modal::render_location_modal;
pub use footer::render_footer;
