//! Request URL assembly.
//!
//! # Design
//! Parameters are always rendered in one fixed order:
//! `address`/`latlng`, `region`, `language`, `result_type`, `location_type`,
//! `components`. The order is part of the signing input, so it does not
//! depend on the order in which optional fields were set. Blank optional
//! values are omitted. Every value is percent-encoded before concatenation.

use crate::auth::Authentication;
use crate::error::{GeocodeError, Result};
use crate::query::{AddressQuery, ComponentQuery, GeocodeQuery, ReverseQuery};

pub const DEFAULT_DOMAIN: &str = "https://maps.googleapis.com";

/// Path of the JSON endpoint, including the `?` that starts the query.
pub const API_PATH: &str = "/maps/api/geocode/json?";

/// Ordered `name=value` pairs whose values are already percent-encoded.
#[derive(Debug, Default)]
struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    fn push_encoded(&mut self, name: &'static str, value: String) {
        if !value.is_empty() {
            self.0.push((name, value));
        }
    }

    fn push_text(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.0.push((name, urlencoding::encode(value).into_owned()));
        }
    }

    fn render(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Format one coordinate with at most six decimals, `.` as separator.
fn format_coordinate(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

fn address_params(query: &AddressQuery) -> Result<QueryParams> {
    if query.address.trim().is_empty() {
        return Err(GeocodeError::invalid_argument("address", "must not be blank"));
    }
    let mut params = QueryParams::default();
    params.push_text("address", Some(query.address.as_str()));
    params.push_text("region", query.region.as_deref());
    params.push_text("language", query.language.as_deref());
    if let Some(filter) = &query.filter {
        params.push_encoded("components", filter.encode()?);
    }
    Ok(params)
}

fn reverse_params(query: &ReverseQuery, auth: &Authentication) -> Result<QueryParams> {
    // Post-search filters are a paid feature; reject them before rendering.
    if !auth.is_authenticated() {
        if query.result_type.is_some_and(|f| !f.is_empty()) {
            return Err(GeocodeError::UnsupportedInMode { filter: "result_type" });
        }
        if query.location_type.is_some_and(|f| !f.is_empty()) {
            return Err(GeocodeError::UnsupportedInMode { filter: "location_type" });
        }
    }
    let (lat, lng) = (query.latitude, query.longitude);
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(GeocodeError::invalid_argument("latitude", format!("{lat} is out of range")));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(GeocodeError::invalid_argument("longitude", format!("{lng} is out of range")));
    }
    let latlng = format!("{},{}", format_coordinate(lat), format_coordinate(lng));

    let mut params = QueryParams::default();
    params.push_text("latlng", Some(latlng.as_str()));
    params.push_text("language", query.language.as_deref());
    if let Some(filter) = &query.result_type {
        params.push_encoded("result_type", filter.encode());
    }
    if let Some(filter) = &query.location_type {
        params.push_encoded("location_type", filter.encode());
    }
    Ok(params)
}

fn component_params(query: &ComponentQuery) -> Result<QueryParams> {
    let components = query.filter.encode()?;
    let mut params = QueryParams::default();
    params.push_text("region", query.region.as_deref());
    params.push_encoded("components", components);
    Ok(params)
}

/// Render the query fragment that follows [`API_PATH`], without credentials.
pub fn build_query(query: &GeocodeQuery, auth: &Authentication) -> Result<String> {
    let params = match query {
        GeocodeQuery::Address(q) => address_params(q)?,
        GeocodeQuery::Reverse(q) => reverse_params(q, auth)?,
        GeocodeQuery::Components(q) => component_params(q)?,
    };
    Ok(params.render())
}

/// Build the full request URL: `domain + API_PATH + query + auth suffix`.
///
/// A trailing `/` on `domain` is dropped so the path is never doubled.
pub fn build_url(domain: &str, query: &GeocodeQuery, auth: &Authentication) -> Result<String> {
    let domain = domain.trim_end_matches('/');
    let query_part = build_query(query, auth)?;
    let auth_part = auth.suffix(&query_part);
    Ok(format!("{domain}{API_PATH}{query_part}{auth_part}"))
}
