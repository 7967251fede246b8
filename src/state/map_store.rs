// ============================================================================
// MAP STORE - Estado de la vista del mapa (zoom, selección, modal)
// ============================================================================
// Reemplaza el store global: se pasa explícitamente al ViewModel
// ============================================================================

use crate::models::Feature;
use crate::state::ReactiveState;

#[derive(Clone, Debug, PartialEq)]
pub struct MapViewState {
    pub zoom_level: f64,
    pub selected_location: Option<Feature>,
    pub modal_visible: bool,
}

impl MapViewState {
    pub fn new(zoom_level: f64) -> Self {
        Self {
            zoom_level,
            selected_location: None,
            modal_visible: false,
        }
    }

    /// Farmacia a mostrar en el modal (sólo si el modal está visible)
    pub fn visible_location(&self) -> Option<&Feature> {
        if self.modal_visible {
            self.selected_location.as_ref()
        } else {
            None
        }
    }

    /// Aplica una acción; devuelve `true` si el estado cambió
    pub fn reduce(&mut self, action: MapAction) -> bool {
        match action {
            MapAction::SelectLocation(feature) => {
                let changed = !self.modal_visible || self.selected_location.as_ref() != Some(&feature);
                self.selected_location = Some(feature);
                self.modal_visible = true;
                changed
            }
            MapAction::DismissLocationModal => {
                let changed = self.modal_visible || self.selected_location.is_some();
                self.modal_visible = false;
                self.selected_location = None;
                changed
            }
            MapAction::SetZoom(zoom) => {
                if !zoom.is_finite() || zoom == self.zoom_level {
                    return false;
                }
                self.zoom_level = zoom;
                true
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MapAction {
    /// Click en un marcador de farmacia
    SelectLocation(Feature),
    /// Botón "Chiudi" del modal
    DismissLocationModal,
    SetZoom(f64),
}

/// Handle del store (clonable, comparte estado y subscribers)
#[derive(Clone)]
pub struct MapStore {
    state: ReactiveState<MapViewState>,
}

impl MapStore {
    pub fn new(initial: MapViewState) -> Self {
        Self {
            state: ReactiveState::new(initial),
        }
    }

    pub fn dispatch(&self, action: MapAction) {
        log::debug!("🗺️ [STORE] dispatch {}", action_name(&action));
        self.state.update(|state| state.reduce(action));
    }

    pub fn dismiss_location_modal(&self) {
        self.dispatch(MapAction::DismissLocationModal);
    }

    pub fn snapshot(&self) -> MapViewState {
        self.state.snapshot()
    }

    pub fn zoom_level(&self) -> f64 {
        self.state.with(|s| s.zoom_level)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }
}

fn action_name(action: &MapAction) -> &'static str {
    match action {
        MapAction::SelectLocation(_) => "SelectLocation",
        MapAction::DismissLocationModal => "DismissLocationModal",
        MapAction::SetZoom(_) => "SetZoom",
    }
}
