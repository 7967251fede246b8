pub mod geo;
pub mod error;

pub use geo::{Coordinates, Feature, FeatureCollection, Geometry, Position};
pub use error::{ApiError, GeolocationError, MapError};
