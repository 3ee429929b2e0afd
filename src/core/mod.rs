pub mod itinerary;
pub mod places;
pub mod weather;

pub use crate::domain::model::{ItineraryViewModel, PlaceResult, WeatherSnapshot};
pub use crate::domain::ports::{ConfigProvider, PlacesProvider, WeatherProvider};
pub use crate::utils::error::Result;
