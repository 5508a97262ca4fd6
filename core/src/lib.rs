//! Request-construction and response-normalization core for the geocoding API.
//!
//! # Overview
//! Turns address, reverse (lat/lng) and component-filter lookups into
//! well-formed, optionally signed request URLs, and decodes the JSON reply
//! into typed results with a normalized status. The core never touches the
//! network (host-does-IO pattern): the caller executes the GET request.
//!
//! # Design
//! - `GeocodeClient` is stateless; it holds the domain and an immutable
//!   `Authentication` mode.
//! - Query parameters are rendered in a fixed order because the signed mode
//!   computes an HMAC over the rendered query.
//! - Status and location type are derived from the wire strings on every
//!   access and are never stored or serialized.

pub mod auth;
pub mod builder;
pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod query;
pub mod response;

pub use auth::{Authentication, SigningKey};
pub use builder::{build_query, build_url, API_PATH, DEFAULT_DOMAIN};
pub use client::GeocodeClient;
pub use error::{GeocodeError, Result};
pub use filter::{ComponentFilter, LocationTypeFilter, ResultTypeFilter};
pub use http::{HttpRequest, HttpResponse};
pub use query::{AddressQuery, ComponentQuery, GeocodeQuery, ReverseQuery};
pub use response::{
    location_type_of, status_of, AddressComponent, GeoCoordinate, GeoViewport, GeocodeResponse,
    GeocodeResult, GeocodeStatus, Geometry, LocationType,
};
