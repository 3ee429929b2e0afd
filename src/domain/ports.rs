use crate::domain::model::{Category, Coordinates, UpstreamResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn weather_endpoint(&self) -> &str;
    fn weather_api_key(&self) -> &str;
    fn forecast_days(&self) -> u8;
    fn places_endpoint(&self) -> &str;
    fn places_api_key(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_forecast(&self, location: &str) -> Result<UpstreamResponse>;
}

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn nearby_search(
        &self,
        coordinates: Coordinates,
        radius: u32,
        category: Category,
    ) -> Result<UpstreamResponse>;
}
