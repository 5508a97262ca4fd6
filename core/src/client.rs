//! Stateless request builder and response parser for the geocoding API.
//!
//! # Design
//! `GeocodeClient` holds only the service domain and the authentication mode,
//! both fixed at construction. Each lookup is split into a `build_*` method
//! that produces an `HttpRequest` and `parse_response`, which consumes the
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping the
//! core deterministic and free of I/O dependencies.

use tracing::{debug, warn};

use crate::auth::Authentication;
use crate::builder::{build_url, DEFAULT_DOMAIN};
use crate::error::Result;
use crate::filter::ComponentFilter;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{AddressQuery, ComponentQuery, GeocodeQuery, ReverseQuery};
use crate::response::{GeocodeResponse, GeocodeStatus};

/// Synchronous, stateless client for the geocoding API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    domain: String,
    auth: Authentication,
}

impl GeocodeClient {
    pub fn new(auth: Authentication) -> Self {
        Self::with_domain(DEFAULT_DOMAIN, auth)
    }

    /// Target another host, e.g. a caching proxy in front of the service.
    pub fn with_domain(domain: &str, auth: Authentication) -> Self {
        Self {
            domain: domain.trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn authentication(&self) -> &Authentication {
        &self.auth
    }

    pub fn build(&self, query: &GeocodeQuery) -> Result<HttpRequest> {
        let url = build_url(&self.domain, query, &self.auth)?;
        debug!(shape = query.shape(), auth = self.auth.mode(), "built geocode request");
        Ok(HttpRequest {
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    pub fn build_address(&self, query: AddressQuery) -> Result<HttpRequest> {
        self.build(&query.into())
    }

    pub fn build_reverse(&self, query: ReverseQuery) -> Result<HttpRequest> {
        self.build(&query.into())
    }

    pub fn build_components(&self, filter: ComponentFilter, region: Option<&str>) -> Result<HttpRequest> {
        let mut query = ComponentQuery::new(filter);
        query.region = region.map(str::to_string);
        self.build(&query.into())
    }

    /// Decode the response body. The HTTP status code is not interpreted;
    /// service-level failures are reported through [`GeocodeResponse::status`].
    pub fn parse_response(&self, response: HttpResponse) -> Result<GeocodeResponse> {
        let parsed: GeocodeResponse = serde_json::from_str(&response.body)?;
        match parsed.status() {
            GeocodeStatus::Unexpected => {
                warn!(status = %parsed.status_text, "geocoding service returned an unrecognized status");
            }
            status => {
                debug!(?status, results = parsed.results.len(), "parsed geocode response");
            }
        }
        Ok(parsed)
    }
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new(Authentication::Anonymous)
    }
}
