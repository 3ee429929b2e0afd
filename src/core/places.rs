use crate::domain::model::{
    Category, Emphasis, OpenStatus, PlaceResult, PriceTier, Rating, UpstreamResponse,
};
use crate::domain::raw::{BusinessStatus, RawPlace, RawPlacesResponse};
use crate::utils::error::{ItineraryError, Result};
use std::cmp::Ordering;

const MAP_LINK_PREFIX: &str = "https://www.google.com/maps/place/?q=place_id:";
const FEW_REVIEWS_THRESHOLD: u32 = 25;
const ACCEPTED_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

/// 將 nearby search 回應整理成依評分排序的 `PlaceResult` 清單
///
/// 永久歇業的地點直接剔除；未評分的地點排在所有已評分地點之後。
pub fn aggregate_places(response: &UpstreamResponse, category: Category) -> Result<Vec<PlaceResult>> {
    let raw: RawPlacesResponse = match serde_json::from_value(response.body.clone()) {
        Ok(raw) if response.is_success() => raw,
        Ok(raw) => {
            return Err(ItineraryError::UpstreamPlaces {
                category,
                status: response.status.to_string(),
                message: raw.error_message.unwrap_or_else(|| response.body.to_string()),
            })
        }
        Err(_) if !response.is_success() => {
            return Err(ItineraryError::UpstreamPlaces {
                category,
                status: response.status.to_string(),
                message: response.body.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(status) = raw.status.as_deref() {
        if !ACCEPTED_STATUSES.contains(&status) {
            return Err(ItineraryError::UpstreamPlaces {
                category,
                status: status.to_string(),
                message: raw.error_message.unwrap_or_default(),
            });
        }
    }

    let total = raw.results.len();
    let mut places: Vec<PlaceResult> = raw
        .results
        .into_iter()
        .filter_map(|place| map_place(place, category))
        .collect();

    // sort_by 為穩定排序，同分時保留 API 原本的順序
    places.sort_by(|a, b| {
        b.rating
            .score()
            .partial_cmp(&a.rating.score())
            .unwrap_or(Ordering::Equal)
    });

    tracing::info!(
        "Aggregated {} {} ({} dropped as permanently closed)",
        places.len(),
        category,
        total - places.len()
    );

    Ok(places)
}

fn map_place(place: RawPlace, category: Category) -> Option<PlaceResult> {
    let open_status = match open_status(&place) {
        Some(status) => status,
        None => {
            tracing::debug!("Dropping permanently closed place: {}", place.name);
            return None;
        }
    };

    let rating = Rating::from_raw(place.rating);
    let total_ratings = place.user_ratings_total.unwrap_or(0);
    let total_ratings_emphasis = if total_ratings < FEW_REVIEWS_THRESHOLD {
        Emphasis::Warning
    } else {
        Emphasis::None
    };
    let price_tier = PriceTier::from_level(place.price_level);

    let mut types = place.types;
    types.sort();

    tracing::debug!(
        "{} '{}': rating {} ({} reviews), price {}, {}",
        category,
        place.name,
        rating,
        total_ratings,
        price_tier.label(),
        open_status.label()
    );

    Some(PlaceResult {
        map_link: format!("{}{}", MAP_LINK_PREFIX, place.place_id),
        name: place.name,
        address: place.vicinity.unwrap_or_default(),
        category,
        rating,
        rating_emphasis: rating.emphasis(),
        total_ratings,
        total_ratings_emphasis,
        price_tier,
        price_emphasis: price_tier.emphasis(),
        open_status,
        open_emphasis: open_status.emphasis(),
        type_tags: types.join(", "),
    })
}

/// 回傳 `None` 代表該地點已永久歇業
fn open_status(place: &RawPlace) -> Option<OpenStatus> {
    if place.business_status == Some(BusinessStatus::ClosedPermanently) {
        return None;
    }

    let opening_hours = place
        .opening_hours
        .as_ref()
        .filter(|hours| hours.is_supplied());

    match opening_hours {
        // 有營業時間但沒有 open_now 時視為未營業
        Some(hours) if hours.open_now == Some(true) => Some(OpenStatus::Open),
        Some(_) => Some(OpenStatus::Closed),
        None if place.business_status == Some(BusinessStatus::ClosedTemporarily) => {
            Some(OpenStatus::TemporarilyClosed)
        }
        None => Some(OpenStatus::Unknown),
    }
}
