//! Response wire model and status normalization.
//!
//! # Design
//! The service reports status and location precision as free-text strings.
//! Only the text is stored and serialized; the strict enums are derived on
//! every access by [`status_of`] and [`location_type_of`], which are total:
//! strings the service may add later map to `Unexpected` / `Unknown`.

use serde::{Deserialize, Deserializer, Serialize};

/// Normalized value of the response `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeocodeStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    /// Any string outside the known set, including an empty or missing status.
    Unexpected,
}

impl GeocodeStatus {
    /// True for every status except `Ok` and `ZeroResults`.
    pub fn is_error(self) -> bool {
        !matches!(self, Self::Ok | Self::ZeroResults)
    }
}

/// Normalized value of `geometry.location_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationType {
    Rooftop,
    RangeInterpolated,
    GeometricCenter,
    Approximate,
    Unknown,
}

pub fn status_of(text: &str) -> GeocodeStatus {
    match text {
        "OK" => GeocodeStatus::Ok,
        "ZERO_RESULTS" => GeocodeStatus::ZeroResults,
        "OVER_QUERY_LIMIT" => GeocodeStatus::OverQueryLimit,
        "REQUEST_DENIED" => GeocodeStatus::RequestDenied,
        "INVALID_REQUEST" => GeocodeStatus::InvalidRequest,
        "UNKNOWN_ERROR" => GeocodeStatus::UnknownError,
        _ => GeocodeStatus::Unexpected,
    }
}

pub fn location_type_of(text: &str) -> LocationType {
    match text {
        "ROOFTOP" => LocationType::Rooftop,
        "RANGE_INTERPOLATED" => LocationType::RangeInterpolated,
        "GEOMETRIC_CENTER" => LocationType::GeometricCenter,
        "APPROXIMATE" => LocationType::Approximate,
        _ => LocationType::Unknown,
    }
}

/// Read a wire string that the service may send as `null`; null becomes `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(rename = "status", default, deserialize_with = "null_as_empty")]
    pub status_text: String,
}

impl GeocodeResponse {
    pub fn status(&self) -> GeocodeStatus {
        status_of(&self.status_text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeResult {
    pub address_components: Vec<AddressComponent>,
    pub formatted_address: String,
    pub geometry: Geometry,
    pub partial_match: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub location: GeoCoordinate,
    #[serde(rename = "location_type", deserialize_with = "null_as_empty")]
    pub location_type_text: String,
    pub viewport: GeoViewport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<GeoViewport>,
}

impl Geometry {
    pub fn location_type(&self) -> LocationType {
        location_type_of(&self.location_type_text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoViewport {
    pub northeast: GeoCoordinate,
    pub southwest: GeoCoordinate,
}
