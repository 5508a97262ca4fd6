use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, RawQuery, State},
    routing::get,
    Json, Router,
};
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha1::Sha1;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub const API_PATH: &str = "/maps/api/geocode/json";

/// Credentials the mock service accepts.
#[derive(Clone, Debug)]
pub struct MockConfig {
    pub api_key: String,
    pub client_id: String,
    /// URL-safe base64, as issued to signed clients.
    pub crypto_key: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            api_key: "test-key".to_string(),
            client_id: "gme-test".to_string(),
            crypto_key: "vNIXE0xscrmjlyV-12Nj_BvUPaw=".to_string(),
        }
    }
}

pub type Shared = Arc<MockConfig>;

pub fn app() -> Router {
    app_with(MockConfig::default())
}

pub fn app_with(config: MockConfig) -> Router {
    Router::new()
        .route(API_PATH, get(geocode))
        .with_state(Arc::new(config))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn status_only(status: &str) -> Json<Value> {
    Json(json!({ "results": [], "status": status }))
}

/// Recompute the signature over everything before `&signature=`.
fn signature_is_valid(config: &MockConfig, raw_query: &str) -> bool {
    let Some((signed_part, signature)) = raw_query.rsplit_once("&signature=") else {
        return false;
    };
    let standard = config.crypto_key.replace('-', "+").replace('_', "/");
    let Ok(secret) = STANDARD.decode(standard) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha1>::new_from_slice(&secret) else {
        return false;
    };
    mac.update(format!("{API_PATH}?{signed_part}").as_bytes());
    URL_SAFE.encode(mac.finalize().into_bytes()) == signature
}

async fn geocode(
    State(config): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
    RawQuery(raw): RawQuery,
) -> Json<Value> {
    let raw = raw.unwrap_or_default();
    info!(query = %raw, "geocode request");

    let keyed = params.contains_key("key");
    let signed = params.contains_key("client");
    if keyed && params.get("key") != Some(&config.api_key) {
        warn!("rejected api key");
        return status_only("REQUEST_DENIED");
    }
    if signed
        && (params.get("client") != Some(&config.client_id) || !signature_is_valid(&config, &raw))
    {
        warn!("rejected signature");
        return status_only("REQUEST_DENIED");
    }
    let post_search = params.contains_key("result_type") || params.contains_key("location_type");
    if post_search && !keyed && !signed {
        return status_only("REQUEST_DENIED");
    }

    if let Some(address) = params.get("address") {
        return Json(lookup_address(address));
    }
    if let Some(latlng) = params.get("latlng") {
        return Json(lookup_latlng(latlng));
    }
    if let Some(components) = params.get("components") {
        return Json(lookup_components(components));
    }
    status_only("INVALID_REQUEST")
}

fn henrietta(partial_match: bool) -> Value {
    json!({
        "address_components": [
            { "long_name": "21", "short_name": "21", "types": ["street_number"] },
            { "long_name": "Henrietta Street", "short_name": "Henrietta St", "types": ["route"] },
            { "long_name": "Bristol", "short_name": "Bristol", "types": ["postal_town"] },
            { "long_name": "United Kingdom", "short_name": "GB", "types": ["country", "political"] }
        ],
        "formatted_address": "21 Henrietta Street, Bristol, City of Bristol BS5 6HU, UK",
        "geometry": {
            "location": { "lat": 51.4647, "lng": -2.5801 },
            "location_type": "ROOFTOP",
            "viewport": {
                "northeast": { "lat": 51.4660, "lng": -2.5787 },
                "southwest": { "lat": 51.4633, "lng": -2.5814 }
            }
        },
        "partial_match": partial_match,
        "place_id": "ChIJ-henrietta-street",
        "types": ["street_address"]
    })
}

fn lookup_address(address: &str) -> Value {
    match address {
        "21 Henrietta St, Bristol, UK" => json!({ "results": [henrietta(false)], "status": "OK" }),
        "21 Henr St, Bristol, UK" => json!({ "results": [henrietta(true)], "status": "OK" }),
        "London" => json!({
            "results": [{
                "address_components": [
                    { "long_name": "London", "short_name": "London", "types": ["locality", "political"] }
                ],
                "formatted_address": "London, UK",
                "geometry": {
                    "location": { "lat": 51.5072, "lng": -0.1276 },
                    "location_type": "APPROXIMATE",
                    "viewport": {
                        "northeast": { "lat": 51.6723, "lng": 0.1482 },
                        "southwest": { "lat": 51.3849, "lng": -0.3515 }
                    },
                    "bounds": {
                        "northeast": { "lat": 51.6723, "lng": 0.1482 },
                        "southwest": { "lat": 51.3849, "lng": -0.3515 }
                    }
                },
                "place_id": "ChIJ-london",
                "types": ["locality", "political"]
            }],
            "status": "OK"
        }),
        "Atlantis" => json!({ "results": [], "status": "SOMETHING_NEW" }),
        _ => status_only("ZERO_RESULTS").0,
    }
}

fn lookup_latlng(latlng: &str) -> Value {
    match latlng {
        "32.715736,-117.161087" => json!({
            "results": [{
                "address_components": [
                    { "long_name": "San Diego", "short_name": "San Diego", "types": ["locality", "political"] }
                ],
                "formatted_address": "1200 Third Ave, San Diego, CA 92101, USA",
                "geometry": {
                    "location": { "lat": 32.7157, "lng": -117.1611 },
                    "location_type": "ROOFTOP",
                    "viewport": {
                        "northeast": { "lat": 32.7171, "lng": -117.1597 },
                        "southwest": { "lat": 32.7144, "lng": -117.1624 }
                    }
                },
                "place_id": "ChIJ-san-diego",
                "types": ["street_address"]
            }],
            "status": "OK"
        }),
        _ => status_only("ZERO_RESULTS").0,
    }
}

fn lookup_components(components: &str) -> Value {
    if components.split('|').any(|c| c == "country:es") {
        return json!({
            "results": [{
                "address_components": [
                    { "long_name": "Spain", "short_name": "ES", "types": ["country", "political"] }
                ],
                "formatted_address": "Spain",
                "geometry": {
                    "location": { "lat": 40.4637, "lng": -3.7492 },
                    "location_type": "APPROXIMATE",
                    "viewport": {
                        "northeast": { "lat": 45.244, "lng": 5.098 },
                        "southwest": { "lat": 27.4335, "lng": -18.3936 }
                    }
                },
                "place_id": "ChIJ-spain",
                "types": ["country", "political"]
            }],
            "status": "OK"
        });
    }
    status_only("ZERO_RESULTS").0
}
