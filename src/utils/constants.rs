/// Ruta del endpoint de farmacias (se concatena a la URL del backend)
pub const PHARMACIES_PATH: &str = "/get/farmacie";

/// ID del contenedor del mapa en el DOM
pub const MAP_CONTAINER_ID: &str = "map";

// Textos de la pantalla (la app es sólo en italiano)
pub const SCREEN_TITLE: &str = "Farmacie a Verona";
pub const USER_MARKER_LABEL: &str = "Tu sei qui";
pub const FALLBACK_LINES: [&str; 2] = [
    "Errore nell'avvio dell'applicazione",
    "Assicurarsi che il Geolocalizzazione e la connessione internet siano attive",
];
pub const GPS_TOAST_MESSAGE: &str = "Problema di caricamento mappa. Il GPS è attivo?";
pub const GPS_TOAST_BUTTON: &str = "OK";
pub const MODAL_CLOSE_LABEL: &str = "Chiudi";
pub const DEFAULT_PHARMACY_TITLE: &str = "Farmacia";

// Nombres de las capas en el control de Leaflet
pub const LAYER_BASE_NAME: &str = "Mappa base";
pub const LAYER_DISTRICTS_NAME: &str = "Circoscrizioni";
pub const LAYER_NEIGHBORHOODS_NAME: &str = "Quartieri";

// Propiedad con el nombre en cada GeoJSON empaquetado
pub const DISTRICT_LABEL_KEY: &str = "circoscriz";
pub const NEIGHBORHOOD_LABEL_KEY: &str = "quartiere";

/// Propiedades candidatas para el nombre de una farmacia (en orden)
pub const PHARMACY_NAME_KEYS: &[&str] = &["nome", "name", "denominazione", "farmacia"];
