// ============================================================================
// ERRORS - Fallos reconocidos por la pantalla del mapa
// ============================================================================

use std::fmt;

/// Error de geolocalización (no se reintenta ni se distingue en la UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// El navegador no expone `navigator.geolocation`
    Unsupported,
}

impl GeolocationError {
    /// Código de `GeolocationPositionError` (1, 2, 3)
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::PositionUnavailable,
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::PermissionDenied => write!(f, "Location permission denied"),
            GeolocationError::PositionUnavailable => write!(f, "Position unavailable"),
            GeolocationError::Timeout => write!(f, "Location request timed out"),
            GeolocationError::Unsupported => write!(f, "Geolocation not supported"),
        }
    }
}

impl std::error::Error for GeolocationError {}

/// Error al obtener las farmacias del backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, status_text: String },
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, status_text } => write!(f, "HTTP {}: {}", status, status_text),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    AlreadyMounted,
    InvalidCoordinates,
    /// Error devuelto por la librería JS del mapa
    Library(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::AlreadyMounted => write!(f, "Map is already mounted"),
            MapError::InvalidCoordinates => write!(f, "Invalid coordinates"),
            MapError::Library(msg) => write!(f, "Map library error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
