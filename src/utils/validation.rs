use crate::utils::error::{ItineraryError, Result};
use url::Url;

pub const MIN_RADIUS: i64 = 1000;
pub const MAX_RADIUS: i64 = 50000;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ItineraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ItineraryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ItineraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ItineraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ItineraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 搜尋半徑（公尺），上下限皆包含
pub fn validate_radius(radius: i64) -> Result<u32> {
    validate_range("radius", radius, MIN_RADIUS, MAX_RADIUS).map_err(|_| {
        ItineraryError::RadiusInvalid {
            value: radius.to_string(),
        }
    })?;
    u32::try_from(radius).map_err(|_| ItineraryError::RadiusInvalid {
        value: radius.to_string(),
    })
}

pub fn validate_location(location: &str) -> Result<&str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(ItineraryError::InvalidLocation {
            value: location.to_string(),
        });
    }
    Ok(trimmed)
}
