//! Verify URL building and status normalization against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Each URL vector describes a query, an authentication mode, and either the
//! exact expected URL (signature included) or the expected error kind.

use geocode_core::{
    build_url, location_type_of, status_of, Authentication, GeocodeClient, GeocodeError,
    GeocodeQuery, GeocodeStatus, HttpResponse, LocationType, DEFAULT_DOMAIN,
};
use serde_json::Value;

/// Build the `Authentication` described by a vector's `auth` object.
fn parse_auth(auth: &Value) -> Authentication {
    match auth["mode"].as_str().unwrap() {
        "anonymous" => Authentication::Anonymous,
        "api_key" => Authentication::api_key(auth["key"].as_str().unwrap()).unwrap(),
        "signed" => Authentication::signed(
            auth["client_id"].as_str().unwrap(),
            auth["crypto_key"].as_str().unwrap(),
        )
        .unwrap(),
        other => panic!("unknown auth mode: {other}"),
    }
}

fn error_kind(err: &GeocodeError) -> &'static str {
    match err {
        GeocodeError::InvalidArgument { .. } => "invalid_argument",
        GeocodeError::InvalidFilter => "invalid_filter",
        GeocodeError::UnsupportedInMode { .. } => "unsupported_in_mode",
        GeocodeError::Deserialization(_) => "deserialization",
    }
}

fn parse_status(s: &str) -> GeocodeStatus {
    match s {
        "Ok" => GeocodeStatus::Ok,
        "ZeroResults" => GeocodeStatus::ZeroResults,
        "OverQueryLimit" => GeocodeStatus::OverQueryLimit,
        "RequestDenied" => GeocodeStatus::RequestDenied,
        "InvalidRequest" => GeocodeStatus::InvalidRequest,
        "UnknownError" => GeocodeStatus::UnknownError,
        "Unexpected" => GeocodeStatus::Unexpected,
        other => panic!("unknown status: {other}"),
    }
}

fn parse_location_type(s: &str) -> LocationType {
    match s {
        "Rooftop" => LocationType::Rooftop,
        "RangeInterpolated" => LocationType::RangeInterpolated,
        "GeometricCenter" => LocationType::GeometricCenter,
        "Approximate" => LocationType::Approximate,
        "Unknown" => LocationType::Unknown,
        other => panic!("unknown location type: {other}"),
    }
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

#[test]
fn url_test_vectors() {
    let raw = include_str!("../../test-vectors/urls.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query: GeocodeQuery = serde_json::from_value(case["query"].clone()).unwrap();
        let auth = parse_auth(&case["auth"]);

        let result = build_url(DEFAULT_DOMAIN, &query, &auth);
        match (case.get("expected_url"), case.get("expected_error")) {
            (Some(url), None) => {
                assert_eq!(result.unwrap(), url.as_str().unwrap(), "{name}: url");
            }
            (None, Some(kind)) => {
                let err = result.unwrap_err();
                assert_eq!(error_kind(&err), kind.as_str().unwrap(), "{name}: error kind");
            }
            _ => panic!("{name}: vector needs exactly one of expected_url / expected_error"),
        }
    }
}

// ---------------------------------------------------------------------------
// Status / location type
// ---------------------------------------------------------------------------

#[test]
fn status_test_vectors() {
    let raw = include_str!("../../test-vectors/statuses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let text = case["text"].as_str().unwrap();
        let expected = parse_status(case["expected"].as_str().unwrap());
        assert_eq!(status_of(text), expected, "status {text:?}");
    }

    for case in vectors["location_types"].as_array().unwrap() {
        let text = case["text"].as_str().unwrap();
        let expected = parse_location_type(case["expected"].as_str().unwrap());
        assert_eq!(location_type_of(text), expected, "location type {text:?}");
    }
}

#[test]
fn response_body_test_vectors() {
    let raw = include_str!("../../test-vectors/statuses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let client = GeocodeClient::default();
    for case in vectors["responses"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: case["body"].as_str().unwrap().to_string(),
        };
        let parsed = client.parse_response(response).unwrap();
        let expected = parse_status(case["expected_status"].as_str().unwrap());
        assert_eq!(parsed.status(), expected, "{name}: status");

        if let Some(location_type) = case.get("expected_location_type") {
            let expected = parse_location_type(location_type.as_str().unwrap());
            assert_eq!(parsed.results[0].geometry.location_type(), expected, "{name}: location type");
        }
    }
}
