pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{
    itinerary::{build_itinerary, ItineraryAssembler},
    places::aggregate_places,
    weather::normalize_weather,
};
pub use crate::domain::model::{
    Category, Coordinates, Emphasis, ItineraryViewModel, OpenStatus, PlaceResult,
    PrecipitationForecast, PrecipitationType, PriceTier, Rating, UpstreamResponse,
    WeatherSnapshot, WindDirection,
};
pub use crate::utils::error::{ItineraryError, Result};
