use crate::domain::model::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("Location not found: '{location}' ({message})")]
    LocationNotFound { location: String, message: String },

    #[error("Weather provider request failed with status {status}")]
    UpstreamWeather {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
    },

    #[error("Places provider request for {category} failed ({status}): {message}")]
    UpstreamPlaces {
        category: Category,
        status: String,
        message: String,
    },

    #[error("Invalid radius: {value}")]
    RadiusInvalid { value: String },

    #[error("Invalid location: '{value}'")]
    InvalidLocation { value: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入錯誤
    Input,
    /// 外部服務錯誤
    Upstream,
    /// 連線或逾時
    Network,
    Configuration,
    /// 回應內容或檔案讀寫錯誤
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ItineraryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LocationNotFound { .. }
            | Self::RadiusInvalid { .. }
            | Self::InvalidLocation { .. } => ErrorCategory::Input,
            Self::UpstreamWeather { .. } | Self::UpstreamPlaces { .. } => ErrorCategory::Upstream,
            Self::ApiError(_) => ErrorCategory::Network,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Upstream | ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::LocationNotFound { .. } => {
                "The requested location could not be found. Please enter a valid location."
                    .to_string()
            }
            Self::RadiusInvalid { .. } => {
                "The entered radius is invalid. Please enter a valid radius between 1000 and 50000."
                    .to_string()
            }
            Self::InvalidLocation { .. } => "Please enter a location.".to_string(),
            Self::UpstreamWeather {
                status,
                headers,
                body,
            } => format!(
                "Something went wrong when getting the weather!\n  |->  Status: {}\n  |->  Headers: {:?}\n  |->  Response: {}",
                status, headers, body
            ),
            Self::UpstreamPlaces { category, .. } => {
                format!("Something went wrong when looking up nearby {}.", category.plural())
            }
            Self::ApiError(_) => {
                "Unable to reach the weather or places service. Please check your connection."
                    .to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the location and radius, then try again",
            ErrorCategory::Upstream => "The provider rejected the request; verify API keys and quotas",
            ErrorCategory::Network => "Check network connectivity and the configured endpoints",
            ErrorCategory::Data => "The provider returned an unexpected payload; retry later",
            ErrorCategory::Configuration => "Review the configuration file and environment variables",
        }
    }
}

pub type Result<T> = std::result::Result<T, ItineraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = ItineraryError::LocationNotFound {
            location: "Atlantis".to_string(),
            message: "No matching location found.".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("could not be found"));
        assert!(err.to_string().contains("'Atlantis'"));

        let err = ItineraryError::RadiusInvalid {
            value: "10".to_string(),
        };
        assert!(err.user_friendly_message().contains("between 1000 and 50000"));
    }

    #[test]
    fn test_upstream_weather_message_carries_diagnostics() {
        let err = ItineraryError::UpstreamWeather {
            status: 401,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: r#"{"error":{"code":2006}}"#.to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("Status: 401"));
        assert!(message.contains("content-type"));
        assert!(message.contains("2006"));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_places_error_names_category() {
        let err = ItineraryError::UpstreamPlaces {
            category: Category::Restaurant,
            status: "REQUEST_DENIED".to_string(),
            message: "The provided API key is invalid.".to_string(),
        };
        assert!(err.to_string().contains("REQUEST_DENIED"));
        assert!(err.user_friendly_message().contains("restaurants"));
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = ItineraryError::MissingConfigError {
            field: "weather.api_key".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
