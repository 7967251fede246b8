// ============================================================================
// STATE MODULE - Estado de la pantalla + store del mapa
// ============================================================================

pub mod reactivity;
pub mod screen_state;
pub mod map_store;
pub mod mounted;

pub use reactivity::ReactiveState;
pub use screen_state::{LocationStatus, RecenterOutcome, ScreenState};
pub use map_store::{MapAction, MapStore, MapViewState};
pub use mounted::MountedSlot;
