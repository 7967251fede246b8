// ============================================================================
// SCREEN VIEWMODEL - Estado + lógica de la pantalla del mapa
// ============================================================================
// Sin DOM ni JS: la capa web le pasa resultados (GPS, fetch, timer) y
// pinta lo que devuelve `view()`. El mapa vivo se maneja via MapRenderer.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::MapConfig;
use crate::maps::{MapRenderer, MountOptions};
use crate::models::{ApiError, Coordinates, FeatureCollection, GeolocationError};
use crate::state::{MapAction, MapStore, RecenterOutcome, ScreenState};
use crate::utils::constants::*;
use super::map_viewmodel::{LocationDetails, MapViewModel};

/// Lo que hay que pintar en el cuerpo de la pantalla
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenBody {
    /// Página de error (GPS)
    Fallback { lines: Vec<&'static str> },
    /// `container` = el contenedor del mapa debe existir
    Map { container: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub message: &'static str,
    pub color: &'static str,
    pub button: &'static str,
}

/// Descripción completa de la pantalla (sin DOM)
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub title: &'static str,
    pub body: ScreenBody,
    pub toast: Option<ToastView>,
    pub modal: Option<LocationDetails>,
    pub sponsor_image_url: Option<String>,
}

impl ScreenView {
    pub fn overlays(&self) -> OverlayView {
        OverlayView {
            modal: self.modal.clone(),
            toast: self.toast.clone(),
        }
    }
}

/// Modal + toast: sólo si cambian hay que reconstruir las capas superiores
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub modal: Option<LocationDetails>,
    pub toast: Option<ToastView>,
}

pub struct MapScreenViewModel<R: MapRenderer> {
    state: ScreenState,
    store: MapStore,
    renderer: R,
    config: MapConfig,
    sponsor_image_url: Option<String>,
    /// Copia compartida con el callback de click de los marcadores
    click_lookup: Rc<RefCell<FeatureCollection>>,
}

impl<R: MapRenderer> MapScreenViewModel<R> {
    pub fn new(mut renderer: R, store: MapStore, config: MapConfig) -> Self {
        // Click en marcador -> el store abre el modal con esa farmacia
        let click_store = store.clone();
        let click_lookup = Rc::new(RefCell::new(FeatureCollection::default()));
        let lookup = click_lookup.clone();
        renderer.set_marker_click_callback(Rc::new(move |index: usize| {
            let feature = lookup.borrow().features.get(index).cloned();
            match feature {
                Some(feature) => click_store.dispatch(MapAction::SelectLocation(feature)),
                None => log::warn!("⚠️ [MAP] Click en farmacia inexistente: {}", index),
            }
        }));

        let zoom_store = store.clone();
        renderer.set_zoom_callback(Rc::new(move |zoom: f64| {
            zoom_store.dispatch(MapAction::SetZoom(zoom));
        }));

        Self {
            state: ScreenState::new(),
            store,
            renderer,
            config,
            sponsor_image_url: None,
            click_lookup,
        }
    }

    pub fn with_sponsor_image(mut self, url: Option<String>) -> Self {
        self.sponsor_image_url = url;
        self
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn store(&self) -> &MapStore {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Resultado del GPS (una sola petición, sin reintentos).
    /// El mapa todavía no existe: se construye después, ya centrado.
    pub fn handle_position(&mut self, result: Result<Coordinates, GeolocationError>) {
        if self.state.torn_down {
            log::debug!("📍 [GPS] Respuesta tras desmontar la pantalla, ignorada");
            return;
        }
        match result {
            Ok(coords) => {
                log::info!("📍 [GPS] Posición: ({}, {})", coords.latitude, coords.longitude);
                self.state.set_position(coords);
            }
            Err(e) => {
                log::warn!("⚠️ [GPS] Error de geolocalización: {}", e);
                self.state.set_location_failed();
            }
        }
    }

    /// Resultado del fetch de farmacias. Los errores sólo se registran.
    pub fn handle_pharmacies(&mut self, result: Result<FeatureCollection, ApiError>) {
        if self.state.torn_down {
            log::debug!("💊 [API] Farmacias tras desmontar la pantalla, ignoradas");
            return;
        }
        match result {
            Ok(collection) => {
                log::info!("✅ [API] {} farmacias recibidas", collection.len());
                *self.click_lookup.borrow_mut() = collection.clone();
                self.state.replace_pharmacies(collection);
                if self.state.map_attached {
                    self.render_pharmacies();
                }
            }
            Err(e) => log::error!("❌ [API] Error obteniendo farmacias: {}", e),
        }
    }

    /// Fin de la espera de montaje. Devuelve `true` sólo la primera vez.
    pub fn handle_mount_delay(&mut self) -> bool {
        let changed = self.state.mark_map_ready();
        if changed {
            log::info!("⏰ [MAP] Espera de montaje cumplida, mapa habilitado");
        }
        changed
    }

    /// Hace falta programar la espera de montaje?
    pub fn needs_mount_delay(&self) -> bool {
        !self.state.map_ready && !self.state.torn_down
    }

    /// Construir el mapa (el contenedor ya tiene que estar en el DOM).
    /// Devuelve `true` si se montó ahora.
    pub fn attach_map(&mut self) -> bool {
        if !self.state.should_render_map() || self.state.map_attached {
            return false;
        }

        let options = MountOptions {
            container_id: MAP_CONTAINER_ID.to_string(),
            center: self.state.center_or(self.config.default_center()),
            zoom: self.store.zoom_level(),
        };
        if let Err(e) = self.renderer.mount(&options) {
            log::error!("❌ [MAP] No se pudo montar el mapa: {}", e);
            return false;
        }
        self.state.map_attached = true;

        let layers = MapViewModel::layer_control(&self.config);
        self.log_map_error(|r| r.add_layers(&layers));
        let center = options.center;
        self.log_map_error(|r| r.set_user_marker(center, USER_MARKER_LABEL));
        self.render_pharmacies();
        true
    }

    /// Botón flotante de recentrar
    pub fn recenter(&mut self) {
        match self.state.recenter() {
            RecenterOutcome::FlyTo(coords) => {
                if self.state.map_attached {
                    self.log_map_error(|r| r.fly_to(coords));
                } else {
                    log::warn!("⚠️ [MAP] Recentrar sin mapa montado");
                }
            }
            RecenterOutcome::NoPosition => {
                log::warn!("⚠️ [GPS] Recentrar sin coordenadas adquiridas");
            }
            RecenterOutcome::Ignored => {}
        }
    }

    /// Botón "OK" del toast
    pub fn dismiss_toast(&mut self) {
        if self.state.dismiss_gps_error() {
            log::info!("👌 [GPS] Toast cerrado (sin reintento)");
        }
    }

    /// Botón "Chiudi" del modal
    pub fn dismiss_location_modal(&self) {
        self.store.dismiss_location_modal();
    }

    /// Desmontar la pantalla: los callbacks posteriores se ignoran
    pub fn tear_down(&mut self) {
        if self.state.map_attached {
            self.renderer.unmount();
        }
        self.state.tear_down();
        log::info!("🧹 [MAP] Pantalla desmontada");
    }

    /// Descripción de lo que hay que pintar
    pub fn view(&self) -> ScreenView {
        let toast = self.state.gps_error.then_some(ToastView {
            message: GPS_TOAST_MESSAGE,
            color: "danger",
            button: GPS_TOAST_BUTTON,
        });

        if self.state.fallback {
            return ScreenView {
                title: SCREEN_TITLE,
                body: ScreenBody::Fallback {
                    lines: FALLBACK_LINES.to_vec(),
                },
                toast,
                modal: None,
                sponsor_image_url: None,
            };
        }

        let modal = self
            .store
            .snapshot()
            .visible_location()
            .map(MapViewModel::location_details);

        ScreenView {
            title: SCREEN_TITLE,
            body: ScreenBody::Map {
                container: self.state.should_render_map(),
            },
            toast,
            modal,
            sponsor_image_url: self.sponsor_image_url.clone(),
        }
    }

    fn render_pharmacies(&mut self) {
        let markers = MapViewModel::prepare_pharmacy_markers(&self.state.pharmacies);
        self.log_map_error(|r| r.set_pharmacy_markers(&markers));
    }

    fn log_map_error<F>(&mut self, op: F)
    where
        F: FnOnce(&mut R) -> Result<(), crate::models::MapError>,
    {
        if let Err(e) = op(&mut self.renderer) {
            log::error!("❌ [MAP] {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::recording::RecordingRenderer;
    use crate::models::Feature;
    use crate::state::MapViewState;
    use serde_json::{json, Map, Value};

    fn screen() -> MapScreenViewModel<RecordingRenderer> {
        MapScreenViewModel::new(
            RecordingRenderer::new(),
            MapStore::new(MapViewState::new(13.0)),
            MapConfig::default(),
        )
    }

    fn pharmacies(n: usize) -> FeatureCollection {
        FeatureCollection::new(
            (0..n)
                .map(|i| {
                    let mut props = Map::new();
                    props.insert("nome".to_string(), Value::from(format!("FARMACIA {}", i)));
                    Feature::point(45.43 + i as f64 * 0.001, 10.99, props)
                })
                .collect(),
        )
    }

    fn mounted_screen() -> MapScreenViewModel<RecordingRenderer> {
        let mut vm = screen();
        vm.handle_position(Ok(Coordinates::new(45.4, 11.0)));
        assert!(vm.handle_mount_delay());
        assert!(vm.attach_map());
        vm
    }

    #[test]
    fn map_is_centered_on_acquired_position() {
        let vm = mounted_screen();
        let mounts = &vm.renderer().mounts;
        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].center, Coordinates::new(45.4, 11.0));
        assert_eq!(mounts[0].zoom, 13.0);
        assert_eq!(mounts[0].container_id, "map");
        assert_eq!(
            vm.renderer().user_marker,
            Some((Coordinates::new(45.4, 11.0), "Tu sei qui".to_string()))
        );
        assert!(vm.renderer().layers.is_some());
    }

    #[test]
    fn slow_position_is_still_the_initial_center() {
        let mut vm = screen();
        assert!(vm.handle_mount_delay());
        assert!(!vm.attach_map());
        assert_eq!(vm.view().body, ScreenBody::Map { container: false });

        vm.handle_position(Ok(Coordinates::new(45.4, 11.0)));
        assert!(vm.attach_map());

        let mounts = &vm.renderer().mounts;
        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].center, Coordinates::new(45.4, 11.0));
    }

    #[test]
    fn geolocation_failure_never_constructs_map() {
        let mut vm = screen();
        vm.handle_position(Err(GeolocationError::PermissionDenied));
        vm.handle_mount_delay();

        assert!(!vm.attach_map());
        assert!(vm.renderer().mounts.is_empty());

        let view = vm.view();
        assert!(matches!(view.body, ScreenBody::Fallback { .. }));
        let toast = view.toast.expect("toast visible");
        assert_eq!(toast.message, "Problema di caricamento mappa. Il GPS è attivo?");
        assert_eq!(toast.color, "danger");
    }

    #[test]
    fn failure_after_mount_delay_never_constructs_map() {
        let mut vm = screen();
        vm.handle_mount_delay();
        assert!(!vm.attach_map());

        vm.handle_position(Err(GeolocationError::PermissionDenied));
        assert!(!vm.attach_map());

        assert!(vm.renderer().mounts.is_empty());
        assert_eq!(vm.renderer().unmounts, 0);
        assert!(matches!(vm.view().body, ScreenBody::Fallback { .. }));
    }

    #[test]
    fn markers_match_feature_count_and_refetch_replaces() {
        let mut vm = mounted_screen();
        let initial_updates = vm.renderer().marker_updates;

        vm.handle_pharmacies(Ok(pharmacies(7)));
        assert_eq!(vm.renderer().markers.len(), 7);

        vm.handle_pharmacies(Ok(pharmacies(3)));
        assert_eq!(vm.renderer().markers.len(), 3);
        assert_eq!(vm.renderer().marker_updates, initial_updates + 2);
        assert_eq!(vm.state().pharmacies.len(), 3);
    }

    #[test]
    fn pharmacies_loaded_before_mount_are_rendered_on_attach() {
        let mut vm = screen();
        vm.handle_pharmacies(Ok(pharmacies(4)));
        assert!(vm.renderer().markers.is_empty());
        assert_eq!(vm.renderer().marker_updates, 0);

        vm.handle_position(Ok(Coordinates::new(45.4, 11.0)));
        vm.handle_mount_delay();
        assert!(vm.attach_map());
        assert_eq!(vm.renderer().markers.len(), 4);
        assert_eq!(vm.renderer().marker_updates, 1);
    }

    #[test]
    fn fetch_failure_is_silent_and_keeps_previous_data() {
        let mut vm = mounted_screen();
        vm.handle_pharmacies(Ok(pharmacies(2)));
        vm.handle_pharmacies(Err(ApiError::Network("offline".to_string())));

        assert_eq!(vm.state().pharmacies.len(), 2);
        assert_eq!(vm.renderer().markers.len(), 2);
        let view = vm.view();
        assert!(view.toast.is_none());
        assert_eq!(view.body, ScreenBody::Map { container: true });
    }

    #[test]
    fn recenter_without_position_sets_error_without_panicking() {
        let mut vm = screen();
        vm.handle_mount_delay();
        assert!(!vm.attach_map());

        vm.recenter();
        assert!(vm.state().gps_error);
        assert!(vm.renderer().flights.is_empty());
        assert!(matches!(vm.view().body, ScreenBody::Fallback { .. }));
    }

    #[test]
    fn recenter_flies_to_acquired_position() {
        let mut vm = mounted_screen();
        vm.recenter();
        assert_eq!(vm.renderer().flights, vec![Coordinates::new(45.4, 11.0)]);
        assert!(!vm.state().gps_error);
    }

    #[test]
    fn toast_dismissal_is_one_way() {
        let mut vm = screen();
        vm.handle_position(Err(GeolocationError::PositionUnavailable));
        vm.handle_mount_delay();

        vm.dismiss_toast();
        vm.dismiss_toast();

        let view = vm.view();
        assert!(view.toast.is_none());
        assert!(matches!(view.body, ScreenBody::Fallback { .. }));
        assert!(!vm.attach_map());
        assert!(vm.renderer().mounts.is_empty());
    }

    #[test]
    fn mount_delay_is_idempotent() {
        let mut vm = screen();
        vm.handle_position(Ok(Coordinates::new(45.4, 11.0)));
        assert!(vm.needs_mount_delay());
        assert!(vm.handle_mount_delay());
        assert!(!vm.handle_mount_delay());
        assert!(!vm.needs_mount_delay());

        assert!(vm.attach_map());
        assert!(!vm.attach_map());
        assert_eq!(vm.renderer().mounts.len(), 1);
    }

    #[test]
    fn container_only_after_mount_delay() {
        let mut vm = screen();
        vm.handle_position(Ok(Coordinates::new(45.4, 11.0)));
        assert_eq!(vm.view().body, ScreenBody::Map { container: false });
        assert!(!vm.attach_map());

        vm.handle_mount_delay();
        assert_eq!(vm.view().body, ScreenBody::Map { container: true });
    }

    #[test]
    fn callbacks_after_teardown_are_ignored() {
        let mut vm = mounted_screen();
        vm.tear_down();
        assert_eq!(vm.renderer().unmounts, 1);

        vm.handle_pharmacies(Ok(pharmacies(5)));
        vm.handle_position(Err(GeolocationError::Timeout));
        assert!(vm.state().pharmacies.is_empty());
        assert!(!vm.state().gps_error);

        let mut fresh = screen();
        fresh.tear_down();
        assert!(!fresh.needs_mount_delay());
        assert!(!fresh.handle_mount_delay());
        assert!(!fresh.state().map_ready);
    }

    #[test]
    fn marker_click_opens_modal_and_close_dismisses() {
        let mut vm = mounted_screen();
        let mut collection = pharmacies(2);
        if let Some(props) = collection.features[1].properties.as_mut() {
            props.insert("indirizzo".to_string(), json!("Corso Porta Nuova 5"));
        }
        vm.handle_pharmacies(Ok(collection));

        vm.renderer().click(1);
        let modal = vm.view().modal.expect("modal open");
        assert_eq!(modal.title, "Farmacia 1");
        assert_eq!(modal.rows[0].value, "Corso Porta Nuova 5");

        vm.dismiss_location_modal();
        assert!(vm.view().modal.is_none());
        assert!(!vm.store().snapshot().modal_visible);
    }

    #[test]
    fn user_zoom_is_recorded_in_store() {
        let vm = mounted_screen();
        assert_eq!(vm.store().zoom_level(), 13.0);

        vm.renderer().zoom(16.0);
        assert_eq!(vm.store().zoom_level(), 16.0);

        vm.renderer().zoom(f64::NAN);
        assert_eq!(vm.store().zoom_level(), 16.0);
    }

    #[test]
    fn zoom_changes_leave_overlays_untouched() {
        let mut vm = mounted_screen();
        vm.handle_pharmacies(Ok(pharmacies(3)));
        vm.renderer().click(0);
        let shown = vm.view().overlays();
        assert!(shown.modal.is_some());

        vm.renderer().zoom(15.0);
        vm.renderer().zoom(16.0);
        assert_eq!(vm.view().overlays(), shown);

        vm.dismiss_location_modal();
        assert_ne!(vm.view().overlays(), shown);
    }

    #[test]
    fn click_on_unknown_marker_is_ignored() {
        let vm = mounted_screen();
        vm.renderer().click(42);
        assert!(vm.view().modal.is_none());
    }

    #[test]
    fn sponsor_image_only_on_map_page() {
        let mut vm = screen().with_sponsor_image(Some("/img/sponsor.jpg".to_string()));
        assert_eq!(vm.view().sponsor_image_url.as_deref(), Some("/img/sponsor.jpg"));
        assert_eq!(vm.view().title, "Farmacie a Verona");

        vm.handle_position(Err(GeolocationError::Unsupported));
        assert!(vm.view().sponsor_image_url.is_none());
    }
}
