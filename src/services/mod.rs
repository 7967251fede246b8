pub mod api_client;

#[cfg(target_arch = "wasm32")]
pub mod geolocation;

pub use api_client::{parse_pharmacies, ApiClient};
