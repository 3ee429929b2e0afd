//! 外部 API 的原始回應結構
//!
//! 這裡只描述正規化需要的欄位，可能缺少的欄位一律用 `Option` 表示。

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastResponse {
    pub location: RawLocation,
    pub current: RawCurrent,
    pub forecast: RawForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub name: String,
    pub region: Option<String>,
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrent {
    pub temp_c: f64,
    pub temp_f: Option<f64>,
    pub wind_degree: u16,
    pub wind_kph: Option<f64>,
    pub condition: RawCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub text: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecast {
    pub forecastday: Vec<RawForecastDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastDay {
    pub date: Option<String>,
    pub day: RawDay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDay {
    #[serde(deserialize_with = "chance_percent")]
    pub daily_chance_of_rain: u8,
    #[serde(deserialize_with = "chance_percent")]
    pub daily_chance_of_snow: u8,
    pub maxtemp_c: Option<f64>,
    pub mintemp_c: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// 舊版 API 會以字串回傳機率，統一轉成 0-100 的整數
fn chance_percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(number) => number,
        NumberOrText::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom)?,
    };
    Ok(value.clamp(0.0, 100.0).round() as u8)
}

/// 天氣 API 失敗時的回應內容
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherErrorBody {
    pub error: RawWeatherError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherError {
    pub code: i64,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlacesResponse {
    #[serde(default)]
    pub results: Vec<RawPlace>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    pub name: String,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub price_level: Option<i64>,
    pub opening_hours: Option<RawOpeningHours>,
    pub business_status: Option<BusinessStatus>,
    #[serde(default)]
    pub types: Vec<String>,
    pub place_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOpeningHours {
    pub open_now: Option<bool>,
    /// `weekday_text`、`periods` 等其餘營業時間欄位
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl RawOpeningHours {
    /// 空物件 `{}` 視為沒有提供營業時間
    pub fn is_supplied(&self) -> bool {
        self.open_now.is_some() || !self.details.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    #[serde(other)]
    Other,
}
