pub mod map_viewmodel;
pub mod screen_viewmodel;

pub use map_viewmodel::{DetailRow, LocationDetails, MapViewModel};
pub use screen_viewmodel::{MapScreenViewModel, OverlayView, ScreenBody, ScreenView, ToastView};
