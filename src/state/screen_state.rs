// ============================================================================
// SCREEN STATE - Estado propio de la pantalla del mapa
// ============================================================================
// Sólo lo mutan los callbacks del ciclo de vida y las acciones del usuario
// ============================================================================

use crate::models::{Coordinates, FeatureCollection};

/// Resultado de la petición de geolocalización
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocationStatus {
    Pending,
    Acquired(Coordinates),
    Failed,
}

/// Qué hacer al pulsar el botón de recentrar
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecenterOutcome {
    FlyTo(Coordinates),
    /// No hay coordenadas: se levanta el error de GPS
    NoPosition,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState {
    pub map_ready: bool,
    pub pharmacies: FeatureCollection,
    /// Hay un mapa vivo en el contenedor (handle no nulo)
    pub map_attached: bool,
    /// Controla el toast; "OK" lo limpia
    pub gps_error: bool,
    pub location: LocationStatus,
    /// Página de error en lugar del mapa. Una vez activada no se vuelve atrás.
    pub fallback: bool,
    pub torn_down: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            map_ready: false,
            pharmacies: FeatureCollection::default(),
            map_attached: false,
            gps_error: false,
            location: LocationStatus::Pending,
            fallback: false,
            torn_down: false,
        }
    }

    pub fn position(&self) -> Option<Coordinates> {
        match self.location {
            LocationStatus::Acquired(coords) => Some(coords),
            _ => None,
        }
    }

    /// Centro del mapa: posición adquirida o el centro por defecto
    pub fn center_or(&self, default_center: Coordinates) -> Coordinates {
        self.position().unwrap_or(default_center)
    }

    /// Idempotente: devuelve `true` sólo la primera vez
    pub fn mark_map_ready(&mut self) -> bool {
        if self.map_ready || self.torn_down {
            return false;
        }
        self.map_ready = true;
        true
    }

    pub fn set_position(&mut self, coords: Coordinates) {
        self.location = LocationStatus::Acquired(coords);
    }

    pub fn set_location_failed(&mut self) {
        self.location = LocationStatus::Failed;
        self.raise_gps_error();
    }

    /// `gps_error` implica página de error (el latch `fallback` no se limpia)
    pub fn raise_gps_error(&mut self) {
        self.gps_error = true;
        self.fallback = true;
    }

    /// Botón "OK" del toast. No reintenta ni vuelve a mostrar el mapa.
    pub fn dismiss_gps_error(&mut self) -> bool {
        let was_set = self.gps_error;
        self.gps_error = false;
        was_set
    }

    /// Reemplaza la colección completa (nunca se añade)
    pub fn replace_pharmacies(&mut self, collection: FeatureCollection) {
        self.pharmacies = collection;
    }

    /// Contenedor + mapa sólo con la espera cumplida y el GPS ya resuelto
    pub fn should_render_map(&self) -> bool {
        self.map_ready
            && matches!(self.location, LocationStatus::Acquired(_))
            && !self.fallback
            && !self.torn_down
    }

    pub fn recenter(&mut self) -> RecenterOutcome {
        if self.torn_down {
            return RecenterOutcome::Ignored;
        }
        match self.position() {
            Some(coords) => RecenterOutcome::FlyTo(coords),
            None => {
                self.raise_gps_error();
                RecenterOutcome::NoPosition
            }
        }
    }

    pub fn tear_down(&mut self) {
        self.torn_down = true;
        self.map_attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feature;
    use serde_json::Map;

    fn collection(n: usize) -> FeatureCollection {
        FeatureCollection::new(
            (0..n)
                .map(|i| Feature::point(45.4 + i as f64 * 0.001, 11.0, Map::new()))
                .collect(),
        )
    }

    #[test]
    fn map_ready_is_set_once() {
        let mut state = ScreenState::new();
        assert!(state.mark_map_ready());
        assert!(!state.mark_map_ready());
        assert!(state.map_ready);
    }

    #[test]
    fn location_failure_switches_to_fallback() {
        let mut state = ScreenState::new();
        state.mark_map_ready();

        state.set_location_failed();
        assert_eq!(state.location, LocationStatus::Failed);
        assert!(state.gps_error);
        assert!(!state.should_render_map());
    }

    #[test]
    fn map_waits_for_location_to_settle() {
        let mut state = ScreenState::new();
        state.mark_map_ready();
        assert!(!state.should_render_map());

        state.set_position(Coordinates::new(45.4, 11.0));
        assert!(state.should_render_map());
    }

    #[test]
    fn dismissing_toast_keeps_fallback() {
        let mut state = ScreenState::new();
        state.set_location_failed();
        state.mark_map_ready();

        assert!(state.dismiss_gps_error());
        assert!(!state.gps_error);
        assert!(state.fallback);
        assert!(!state.should_render_map());
        assert_eq!(state.location, LocationStatus::Failed);

        // segunda vez: nada que limpiar
        assert!(!state.dismiss_gps_error());
    }

    #[test]
    fn recenter_without_position_raises_error() {
        let mut state = ScreenState::new();
        assert_eq!(state.recenter(), RecenterOutcome::NoPosition);
        assert!(state.gps_error);
        assert!(state.fallback);
    }

    #[test]
    fn recenter_with_position_flies_there() {
        let mut state = ScreenState::new();
        let verona = Coordinates::new(45.4, 11.0);
        state.set_position(verona);
        assert_eq!(state.recenter(), RecenterOutcome::FlyTo(verona));
        assert!(!state.gps_error);
    }

    #[test]
    fn center_falls_back_to_default() {
        let default_center = Coordinates::new(45.438351, 10.99171);
        let mut state = ScreenState::new();
        assert_eq!(state.center_or(default_center), default_center);

        state.set_position(Coordinates::new(45.4, 11.0));
        assert_eq!(state.center_or(default_center), Coordinates::new(45.4, 11.0));
    }

    #[test]
    fn pharmacies_are_replaced_not_appended() {
        let mut state = ScreenState::new();
        state.replace_pharmacies(collection(5));
        state.replace_pharmacies(collection(2));
        assert_eq!(state.pharmacies.len(), 2);
    }

    #[test]
    fn teardown_blocks_readiness_and_recenter() {
        let mut state = ScreenState::new();
        state.tear_down();
        assert!(!state.mark_map_ready());
        assert_eq!(state.recenter(), RecenterOutcome::Ignored);
        assert!(!state.gps_error);
    }
}
