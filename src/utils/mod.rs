// Utils compartidos

pub mod constants;
pub mod text;

#[cfg(target_arch = "wasm32")]
pub mod leaflet_ffi;

pub use constants::*;
pub use text::{humanize_key, title_case};
