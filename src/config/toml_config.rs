use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ItineraryError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

pub const WEATHER_KEY_VAR: &str = "WEATHERAPI_KEY";
pub const PLACES_KEY_VAR: &str = "GOOGLE_PLACES_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub weather: WeatherSourceConfig,
    pub places: PlacesSourceConfig,
    #[serde(default)]
    pub http: HttpConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSourceConfig {
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesSourceConfig {
    #[serde(default = "default_places_endpoint")]
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// "compact" 或 "json"
    pub format: Option<String>,
}

fn default_weather_endpoint() -> String {
    "https://api.weatherapi.com/v1/forecast.json".to_string()
}

fn default_places_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json".to_string()
}

fn default_forecast_days() -> u8 {
    1
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("trip-itinerary/{}", env!("CARGO_PKG_VERSION"))
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ItineraryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ItineraryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 沒有設定檔時，以預設端點加上環境變數中的 API 金鑰建立配置
    pub fn from_env() -> Result<Self> {
        let weather_key = std::env::var(WEATHER_KEY_VAR).map_err(|_| {
            ItineraryError::MissingConfigError {
                field: WEATHER_KEY_VAR.to_string(),
            }
        })?;
        let places_key = std::env::var(PLACES_KEY_VAR).map_err(|_| {
            ItineraryError::MissingConfigError {
                field: PLACES_KEY_VAR.to_string(),
            }
        })?;

        Ok(Self {
            weather: WeatherSourceConfig {
                endpoint: default_weather_endpoint(),
                api_key: weather_key,
                forecast_days: default_forecast_days(),
            },
            places: PlacesSourceConfig {
                endpoint: default_places_endpoint(),
                api_key: places_key,
            },
            http: HttpConfig::default(),
            logging: None,
        })
    }

    /// 替換環境變數 (例如 ${WEATHERAPI_KEY})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn log_format_is_json(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.format.as_deref())
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("weather.endpoint", &self.weather.endpoint)?;
        validate_url("places.endpoint", &self.places.endpoint)?;
        validate_api_key("weather.api_key", &self.weather.api_key)?;
        validate_api_key("places.api_key", &self.places.api_key)?;
        validate_range("weather.forecast_days", self.weather.forecast_days, 1, 14)?;
        validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 300)?;
        validate_non_empty_string("http.user_agent", &self.http.user_agent)?;

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            let valid_levels = ["error", "warn", "info", "debug", "trace"];
            if !valid_levels.contains(&level) {
                return Err(ItineraryError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

/// 未被替換的 `${VAR}` 代表環境變數沒有設定
fn validate_api_key(field_name: &str, key: &str) -> Result<()> {
    validate_non_empty_string(field_name, key)?;
    if env_var_pattern().is_match(key) {
        return Err(ItineraryError::MissingConfigError {
            field: format!("{} ({})", field_name, key),
        });
    }
    Ok(())
}

impl ConfigProvider for TomlConfig {
    fn weather_endpoint(&self) -> &str {
        &self.weather.endpoint
    }

    fn weather_api_key(&self) -> &str {
        &self.weather.api_key
    }

    fn forecast_days(&self) -> u8 {
        self.weather.forecast_days
    }

    fn places_endpoint(&self) -> &str {
        &self.places.endpoint
    }

    fn places_api_key(&self) -> &str {
        &self.places.api_key
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.http.user_agent
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[weather]
api_key = "weather-secret"

[places]
api_key = "places-secret"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.weather_endpoint(),
            "https://api.weatherapi.com/v1/forecast.json"
        );
        assert_eq!(
            config.places_endpoint(),
            "https://maps.googleapis.com/maps/api/place/nearbysearch/json"
        );
        assert_eq!(config.forecast_days(), 1);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ITINERARY_WEATHER_KEY", "from-env-123");

        let toml_content = r#"
[weather]
api_key = "${TEST_ITINERARY_WEATHER_KEY}"

[places]
api_key = "places-secret"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.weather_api_key(), "from-env-123");

        std::env::remove_var("TEST_ITINERARY_WEATHER_KEY");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[weather]
api_key = "${TEST_ITINERARY_NEVER_SET}"

[places]
api_key = "places-secret"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.weather_api_key(), "${TEST_ITINERARY_NEVER_SET}");
        assert!(matches!(
            config.validate(),
            Err(ItineraryError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[weather]
endpoint = "invalid-url"
api_key = "weather-secret"

[places]
api_key = "places-secret"

[http]
timeout_seconds = 10
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[weather]
api_key = "weather-secret"

[places]
api_key = "places-secret"

[http]
timeout_seconds = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let toml_content = r#"
[weather]
api_key = "weather-secret"

[places]
api_key = "places-secret"

[logging]
level = "loud"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.log_format_is_json());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[weather]
endpoint = "http://localhost:8080/forecast.json"
api_key = "weather-secret"
forecast_days = 3

[places]
endpoint = "http://localhost:8080/nearbysearch"
api_key = "places-secret"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.forecast_days(), 3);
        assert_eq!(config.places_endpoint(), "http://localhost:8080/nearbysearch");
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let toml_content = r#"
[weather]
api_key = "weather-secret"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, ItineraryError::ConfigError { .. }));
        assert!(err.to_string().contains("TOML parsing error"));
    }

    #[test]
    fn test_missing_file() {
        let result = TomlConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(ItineraryError::IoError(_))));
    }
}
