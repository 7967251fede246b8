// Módulo de mapas con implementaciones específicas por plataforma

#[cfg(target_arch = "wasm32")]
pub mod leaflet;

#[cfg(test)]
pub mod recording;

// Traits comunes para todas las plataformas
pub mod traits;

pub use traits::*;
