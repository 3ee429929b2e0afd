use crate::domain::model::{
    CurrentConditions, DailyOutlook, LocationInfo, PrecipitationForecast, UpstreamResponse,
    WeatherSnapshot, WindDirection,
};
use crate::domain::raw::{RawForecastResponse, RawWeatherErrorBody};
use crate::utils::error::{ItineraryError, Result};
use chrono::NaiveDate;

/// WeatherAPI 的「找不到地點」錯誤碼
pub const LOCATION_NOT_FOUND_CODE: i64 = 1006;

const ICON_SCHEME: &str = "https:";

/// 將天氣 API 回應轉成 `WeatherSnapshot`
///
/// `location` 是使用者查詢的地點，只用來標示 `LocationNotFound` 錯誤。
pub fn normalize_weather(location: &str, response: &UpstreamResponse) -> Result<WeatherSnapshot> {
    if !response.is_success() {
        return Err(classify_failure(location, response));
    }

    let raw: RawForecastResponse = serde_json::from_value(response.body.clone())?;
    let today = raw.forecast.forecastday.into_iter().next().ok_or_else(|| {
        ItineraryError::UpstreamWeather {
            status: response.status,
            headers: response.headers.clone(),
            body: "forecast contained no days".to_string(),
        }
    })?;

    let rain_chance = today.day.daily_chance_of_rain;
    let snow_chance = today.day.daily_chance_of_snow;
    let precipitation = PrecipitationForecast::pick(rain_chance, snow_chance);

    let wind_degree = raw.current.wind_degree % 360;
    let wind_direction = WindDirection::from_degrees(wind_degree);

    tracing::debug!(
        "Normalized weather for {} ({}, {}): {:?} {}%, wind {}° {}",
        raw.location.name,
        raw.location.lat,
        raw.location.lon,
        precipitation.kind,
        precipitation.chance,
        wind_degree,
        wind_direction.label()
    );

    Ok(WeatherSnapshot {
        location: LocationInfo {
            name: raw.location.name,
            region: raw.location.region,
            country: raw.location.country,
            lat: raw.location.lat,
            lon: raw.location.lon,
        },
        current: CurrentConditions {
            temperature: raw.current.temp_c,
            temperature_f: raw.current.temp_f,
            condition_text: raw.current.condition.text,
            condition_icon_url: absolute_icon_url(&raw.current.condition.icon),
            wind_degree,
            wind_kph: raw.current.wind_kph,
            wind_direction,
            wind_arrow: wind_direction.arrow(),
            precipitation,
        },
        forecast_today: DailyOutlook {
            date: today
                .date
                .as_deref()
                .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()),
            rain_chance,
            snow_chance,
            max_temperature: today.day.maxtemp_c,
            min_temperature: today.day.mintemp_c,
        },
    })
}

/// 圖示路徑是 `//cdn...` 形式，補上 https scheme
pub fn absolute_icon_url(icon: &str) -> String {
    if icon.starts_with("http://") || icon.starts_with("https://") {
        icon.to_string()
    } else {
        format!("{}{}", ICON_SCHEME, icon)
    }
}

fn classify_failure(location: &str, response: &UpstreamResponse) -> ItineraryError {
    if let Ok(body) = serde_json::from_value::<RawWeatherErrorBody>(response.body.clone()) {
        if body.error.code == LOCATION_NOT_FOUND_CODE {
            return ItineraryError::LocationNotFound {
                location: location.to_string(),
                message: body
                    .error
                    .message
                    .unwrap_or_else(|| "No matching location found.".to_string()),
            };
        }
    }

    tracing::warn!("Weather provider returned status {}", response.status);
    ItineraryError::UpstreamWeather {
        status: response.status,
        headers: response.headers.clone(),
        body: response.body.to_string(),
    }
}
