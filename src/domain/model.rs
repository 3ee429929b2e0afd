use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 單次外部 API 回應（狀態碼、標頭、內容）
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl UpstreamResponse {
    pub fn ok(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Places API 需要的 `"lat,lon"` 格式
    pub fn as_query(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Attraction,
    Restaurant,
}

impl Category {
    /// Places API 的 `type` 參數
    pub fn place_type(&self) -> &'static str {
        match self {
            Category::Attraction => "tourist_attraction",
            Category::Restaurant => "restaurant",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Category::Attraction => "attractions",
            Category::Restaurant => "restaurants",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// 呈現層使用的語意標記，取代原本的顏色字串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    #[default]
    None,
    LowConfidence,
    Warning,
    Costly,
    Alert,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    North,
    #[serde(rename = "North-East")]
    NorthEast,
    East,
    #[serde(rename = "South-East")]
    SouthEast,
    South,
    #[serde(rename = "South-West")]
    SouthWest,
    West,
    #[serde(rename = "North-West")]
    NorthWest,
}

impl WindDirection {
    pub const ALL: [WindDirection; 8] = [
        WindDirection::North,
        WindDirection::NorthEast,
        WindDirection::East,
        WindDirection::SouthEast,
        WindDirection::South,
        WindDirection::SouthWest,
        WindDirection::West,
        WindDirection::NorthWest,
    ];

    /// 每個方位涵蓋 45°（下界開、上界閉），北方跨越 0°：(337, 360) ∪ [0, 22]
    pub fn from_degrees(degrees: u16) -> Self {
        match degrees % 360 {
            0..=22 | 338..=359 => WindDirection::North,
            23..=67 => WindDirection::NorthEast,
            68..=112 => WindDirection::East,
            113..=157 => WindDirection::SouthEast,
            158..=202 => WindDirection::South,
            203..=247 => WindDirection::SouthWest,
            248..=292 => WindDirection::West,
            _ => WindDirection::NorthWest,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            WindDirection::North => "↑",
            WindDirection::NorthEast => "↗",
            WindDirection::East => "→",
            WindDirection::SouthEast => "↘",
            WindDirection::South => "↓",
            WindDirection::SouthWest => "↙",
            WindDirection::West => "←",
            WindDirection::NorthWest => "↖",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindDirection::North => "North",
            WindDirection::NorthEast => "North-East",
            WindDirection::East => "East",
            WindDirection::SouthEast => "South-East",
            WindDirection::South => "South",
            WindDirection::SouthWest => "South-West",
            WindDirection::West => "West",
            WindDirection::NorthWest => "North-West",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecipitationType {
    Rain,
    Snow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecipitationForecast {
    pub chance: u8,
    #[serde(rename = "type")]
    pub kind: PrecipitationType,
}

impl PrecipitationForecast {
    /// 降雪機率嚴格大於降雨時才選雪，相同時維持雨
    pub fn pick(rain_chance: u8, snow_chance: u8) -> Self {
        if snow_chance > rain_chance {
            Self {
                chance: snow_chance,
                kind: PrecipitationType::Snow,
            }
        } else {
            Self {
                chance: rain_chance,
                kind: PrecipitationType::Rain,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationInfo {
    pub name: String,
    pub region: Option<String>,
    pub country: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl LocationInfo {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// 攝氏
    pub temperature: f64,
    pub temperature_f: Option<f64>,
    pub condition_text: Option<String>,
    pub condition_icon_url: String,
    pub wind_degree: u16,
    pub wind_kph: Option<f64>,
    pub wind_direction: WindDirection,
    pub wind_arrow: &'static str,
    pub precipitation: PrecipitationForecast,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyOutlook {
    pub date: Option<NaiveDate>,
    pub rain_chance: u8,
    pub snow_chance: u8,
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    pub forecast_today: DailyOutlook,
}

impl WeatherSnapshot {
    pub fn coordinates(&self) -> Coordinates {
        self.location.coordinates()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Rated(f64),
    Unrated,
}

impl Rating {
    /// 缺少或為 0 的評分視為未評分
    pub fn from_raw(raw: Option<f64>) -> Self {
        match raw {
            Some(value) if value > 0.0 => Rating::Rated(value),
            _ => Rating::Unrated,
        }
    }

    /// 排序用的原始值；未評分一律為 0
    pub fn score(&self) -> f64 {
        match self {
            Rating::Rated(value) => *value,
            Rating::Unrated => 0.0,
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            Rating::Rated(value) if (1.0..=3.5).contains(value) => Emphasis::LowConfidence,
            Rating::Rated(_) => Emphasis::None,
            Rating::Unrated => Emphasis::Unknown,
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Rating::Rated(value) => serializer.serialize_f64(*value),
            Rating::Unrated => serializer.serialize_str("N/A"),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Rated(value) => write!(f, "{}", value),
            Rating::Unrated => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceTier {
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    #[serde(rename = "Very Expensive")]
    VeryExpensive,
    #[serde(rename = "N/A")]
    Unknown,
}

impl PriceTier {
    pub fn from_level(level: Option<i64>) -> Self {
        match level {
            Some(0) => PriceTier::Free,
            Some(1) => PriceTier::Inexpensive,
            Some(2) => PriceTier::Moderate,
            Some(3) => PriceTier::Expensive,
            Some(4) => PriceTier::VeryExpensive,
            _ => PriceTier::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Free => "Free",
            PriceTier::Inexpensive => "Inexpensive",
            PriceTier::Moderate => "Moderate",
            PriceTier::Expensive => "Expensive",
            PriceTier::VeryExpensive => "Very Expensive",
            PriceTier::Unknown => "N/A",
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            PriceTier::Moderate | PriceTier::Expensive | PriceTier::VeryExpensive => {
                Emphasis::Costly
            }
            PriceTier::Unknown => Emphasis::Unknown,
            PriceTier::Free | PriceTier::Inexpensive => Emphasis::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OpenStatus {
    #[serde(rename = "Currently Open")]
    Open,
    Closed,
    #[serde(rename = "Temporarily Shut Down")]
    TemporarilyClosed,
    #[serde(rename = "N/A")]
    Unknown,
}

impl OpenStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OpenStatus::Open => "Currently Open",
            OpenStatus::Closed => "Closed",
            OpenStatus::TemporarilyClosed => "Temporarily Shut Down",
            OpenStatus::Unknown => "N/A",
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            OpenStatus::Open => Emphasis::None,
            OpenStatus::Closed | OpenStatus::TemporarilyClosed => Emphasis::Alert,
            OpenStatus::Unknown => Emphasis::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    pub category: Category,
    pub rating: Rating,
    pub rating_emphasis: Emphasis,
    pub total_ratings: u32,
    pub total_ratings_emphasis: Emphasis,
    pub price_tier: PriceTier,
    pub price_emphasis: Emphasis,
    pub open_status: OpenStatus,
    pub open_emphasis: Emphasis,
    pub type_tags: String,
    pub map_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryViewModel {
    pub weather: WeatherSnapshot,
    pub attractions: Vec<PlaceResult>,
    pub restaurants: Vec<PlaceResult>,
}

impl ItineraryViewModel {
    pub fn location(&self) -> &LocationInfo {
        &self.weather.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_buckets_cover_full_circle() {
        for degrees in 0..360u16 {
            let direction = WindDirection::from_degrees(degrees);
            let matches = WindDirection::ALL
                .iter()
                .filter(|candidate| **candidate == direction)
                .count();
            assert_eq!(matches, 1, "degree {} mapped ambiguously", degrees);
        }
    }

    #[test]
    fn test_wind_bucket_boundaries() {
        assert_eq!(WindDirection::from_degrees(0), WindDirection::North);
        assert_eq!(WindDirection::from_degrees(22), WindDirection::North);
        assert_eq!(WindDirection::from_degrees(23), WindDirection::NorthEast);
        assert_eq!(WindDirection::from_degrees(67), WindDirection::NorthEast);
        assert_eq!(WindDirection::from_degrees(68), WindDirection::East);
        assert_eq!(WindDirection::from_degrees(112), WindDirection::East);
        assert_eq!(WindDirection::from_degrees(157), WindDirection::SouthEast);
        assert_eq!(WindDirection::from_degrees(180), WindDirection::South);
        assert_eq!(WindDirection::from_degrees(247), WindDirection::SouthWest);
        assert_eq!(WindDirection::from_degrees(270), WindDirection::West);
        assert_eq!(WindDirection::from_degrees(337), WindDirection::NorthWest);
        assert_eq!(WindDirection::from_degrees(338), WindDirection::North);
        assert_eq!(WindDirection::from_degrees(359), WindDirection::North);
        assert_eq!(WindDirection::from_degrees(360), WindDirection::North);
    }

    #[test]
    fn test_each_bucket_spans_45_degrees() {
        for direction in WindDirection::ALL {
            let width = (0..360u16)
                .filter(|d| WindDirection::from_degrees(*d) == direction)
                .count();
            assert_eq!(width, 45, "{} covers {} degrees", direction.label(), width);
        }
    }

    #[test]
    fn test_precipitation_pick() {
        for rain in (0..=100u8).step_by(5) {
            for snow in (0..=100u8).step_by(5) {
                let pick = PrecipitationForecast::pick(rain, snow);
                if snow > rain {
                    assert_eq!(pick.kind, PrecipitationType::Snow);
                    assert_eq!(pick.chance, snow);
                } else {
                    assert_eq!(pick.kind, PrecipitationType::Rain);
                    assert_eq!(pick.chance, rain);
                }
            }
        }
    }

    #[test]
    fn test_precipitation_serializes_type_field() {
        let value = serde_json::to_value(PrecipitationForecast::pick(20, 20)).unwrap();
        assert_eq!(value, serde_json::json!({"chance": 20, "type": "Rain"}));
    }

    #[test]
    fn test_price_tier_labels() {
        let expected = ["Free", "Inexpensive", "Moderate", "Expensive", "Very Expensive"];
        for (level, label) in expected.iter().enumerate() {
            let tier = PriceTier::from_level(Some(level as i64));
            assert_eq!(tier.label(), *label);
            assert_eq!(serde_json::to_value(tier).unwrap(), serde_json::json!(label));
        }
        assert_eq!(PriceTier::from_level(None), PriceTier::Unknown);
        assert_eq!(PriceTier::from_level(Some(5)), PriceTier::Unknown);
        assert_eq!(PriceTier::from_level(Some(-1)), PriceTier::Unknown);
        assert_eq!(PriceTier::Unknown.emphasis(), Emphasis::Unknown);
        assert_eq!(PriceTier::Moderate.emphasis(), Emphasis::Costly);
        assert_eq!(PriceTier::Inexpensive.emphasis(), Emphasis::None);
    }

    #[test]
    fn test_rating_serialization_and_emphasis() {
        assert_eq!(serde_json::to_value(Rating::Unrated).unwrap(), serde_json::json!("N/A"));
        assert_eq!(serde_json::to_value(Rating::Rated(4.5)).unwrap(), serde_json::json!(4.5));
        assert_eq!(Rating::from_raw(Some(0.0)), Rating::Unrated);
        assert_eq!(Rating::from_raw(None), Rating::Unrated);
        assert_eq!(Rating::Rated(3.5).emphasis(), Emphasis::LowConfidence);
        assert_eq!(Rating::Rated(1.0).emphasis(), Emphasis::LowConfidence);
        assert_eq!(Rating::Rated(3.6).emphasis(), Emphasis::None);
        assert_eq!(Rating::Unrated.emphasis(), Emphasis::Unknown);
    }

    #[test]
    fn test_open_status_labels_match_serialization() {
        for status in [
            OpenStatus::Open,
            OpenStatus::Closed,
            OpenStatus::TemporarilyClosed,
            OpenStatus::Unknown,
        ] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::json!(status.label())
            );
        }
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::Rated(4.5).to_string(), "4.5");
        assert_eq!(Rating::Unrated.to_string(), "N/A");
    }

    #[test]
    fn test_emphasis_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(Emphasis::LowConfidence).unwrap(),
            serde_json::json!("low-confidence")
        );
        assert_eq!(serde_json::to_value(Emphasis::None).unwrap(), serde_json::json!("none"));
    }

    #[test]
    fn test_coordinates_query() {
        assert_eq!(Coordinates::new(51.52, -0.11).as_query(), "51.52,-0.11");
    }
}
