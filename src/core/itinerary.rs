use crate::adapters::http::{HttpPlacesProvider, HttpWeatherProvider};
use crate::core::places::aggregate_places;
use crate::core::weather::normalize_weather;
use crate::domain::model::{Category, Coordinates, ItineraryViewModel, PlaceResult};
use crate::domain::ports::{ConfigProvider, PlacesProvider, WeatherProvider};
use crate::utils::error::Result;
use std::time::Instant;

pub struct ItineraryAssembler<W: WeatherProvider, P: PlacesProvider> {
    weather: W,
    places: P,
}

impl<W: WeatherProvider, P: PlacesProvider> ItineraryAssembler<W, P> {
    pub fn new(weather: W, places: P) -> Self {
        Self { weather, places }
    }

    /// 先取天氣（需要座標），再同時查詢景點與餐廳
    ///
    /// 半徑需由呼叫端先行驗證；任何一個請求失敗都會直接回傳錯誤，不產生部分結果。
    pub async fn build_itinerary(&self, location: &str, radius: u32) -> Result<ItineraryViewModel> {
        let start = Instant::now();
        tracing::debug!("Fetching weather for '{}'", location);

        let weather_response = self.weather.fetch_forecast(location).await?;
        let weather = normalize_weather(location, &weather_response)?;
        let coordinates = weather.coordinates();

        tracing::debug!(
            "Searching places within {}m of {}",
            radius,
            coordinates.as_query()
        );

        let (attractions, restaurants) = tokio::try_join!(
            self.fetch_places(coordinates, radius, Category::Attraction),
            self.fetch_places(coordinates, radius, Category::Restaurant),
        )?;

        tracing::info!(
            "Built itinerary for {} with {} attractions and {} restaurants in {:?}",
            weather.location.name,
            attractions.len(),
            restaurants.len(),
            start.elapsed()
        );

        Ok(ItineraryViewModel {
            weather,
            attractions,
            restaurants,
        })
    }

    async fn fetch_places(
        &self,
        coordinates: Coordinates,
        radius: u32,
        category: Category,
    ) -> Result<Vec<PlaceResult>> {
        let response = self
            .places
            .nearby_search(coordinates, radius, category)
            .await?;
        aggregate_places(&response, category)
    }
}

/// 以一個只屬於本次請求的 HTTP client 建立行程，結束時（含失敗）即釋放
pub async fn build_itinerary<C: ConfigProvider>(
    config: &C,
    location: &str,
    radius: u32,
) -> Result<ItineraryViewModel> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent())
        .build()?;

    let assembler = ItineraryAssembler::new(
        HttpWeatherProvider::new(client.clone(), config),
        HttpPlacesProvider::new(client, config),
    );

    assembler.build_itinerary(location, radius).await
}
