use crate::domain::model::{Category, Coordinates, UpstreamResponse};
use crate::domain::ports::{ConfigProvider, PlacesProvider, WeatherProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Response};

/// WeatherAPI forecast 端點
#[derive(Debug, Clone)]
pub struct HttpWeatherProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    forecast_days: u8,
}

impl HttpWeatherProvider {
    pub fn new<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self {
            client,
            endpoint: config.weather_endpoint().to_string(),
            api_key: config.weather_api_key().to_string(),
            forecast_days: config.forecast_days(),
        }
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    async fn fetch_forecast(&self, location: &str) -> Result<UpstreamResponse> {
        tracing::debug!("Making weather request to: {}", self.endpoint);
        let days = self.forecast_days.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", days.as_str()),
            ])
            .send()
            .await?;

        read_response(response).await
    }
}

/// Google Places nearby search 端點
#[derive(Debug, Clone)]
pub struct HttpPlacesProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpPlacesProvider {
    pub fn new<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self {
            client,
            endpoint: config.places_endpoint().to_string(),
            api_key: config.places_api_key().to_string(),
        }
    }
}

#[async_trait]
impl PlacesProvider for HttpPlacesProvider {
    async fn nearby_search(
        &self,
        coordinates: Coordinates,
        radius: u32,
        category: Category,
    ) -> Result<UpstreamResponse> {
        tracing::debug!(
            "Making places request to: {} (type={})",
            self.endpoint,
            category.place_type()
        );
        let location = coordinates.as_query();
        let radius = radius.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("type", category.place_type()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        read_response(response).await
    }
}

/// 讀取狀態碼、標頭與內容；非 JSON 內容會以字串保留
async fn read_response(response: Response) -> Result<UpstreamResponse> {
    let status = response.status().as_u16();
    tracing::debug!("API response status: {}", status);

    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    let text = response.text().await?;
    let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));

    Ok(UpstreamResponse {
        status,
        headers,
        body,
    })
}
