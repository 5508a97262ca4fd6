//! Geocoding request shapes.
//!
//! Exactly one shape is active per request: a free-text address, a reverse
//! lookup by coordinates, or a component-filter-only lookup.

use serde::{Deserialize, Serialize};

use crate::filter::{ComponentFilter, LocationTypeFilter, ResultTypeFilter};

/// Forward geocoding of a free-text address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressQuery {
    pub address: String,
    /// ccTLD region bias; influences but does not restrict results.
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub filter: Option<ComponentFilter>,
}

impl AddressQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_filter(mut self, filter: ComponentFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Reverse geocoding of a latitude/longitude pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReverseQuery {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub language: Option<String>,
    /// Post-search filter; needs an authenticated client.
    #[serde(default)]
    pub result_type: Option<ResultTypeFilter>,
    /// Post-search filter; needs an authenticated client.
    #[serde(default)]
    pub location_type: Option<LocationTypeFilter>,
}

impl ReverseQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_result_type(mut self, filter: ResultTypeFilter) -> Self {
        self.result_type = Some(filter);
        self
    }

    pub fn with_location_type(mut self, filter: LocationTypeFilter) -> Self {
        self.location_type = Some(filter);
        self
    }
}

/// Lookup driven only by a component filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentQuery {
    pub filter: ComponentFilter,
    #[serde(default)]
    pub region: Option<String>,
}

impl ComponentQuery {
    pub fn new(filter: ComponentFilter) -> Self {
        Self {
            filter,
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeocodeQuery {
    Address(AddressQuery),
    Reverse(ReverseQuery),
    Components(ComponentQuery),
}

impl GeocodeQuery {
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::Reverse(_) => "reverse",
            Self::Components(_) => "components",
        }
    }
}

impl From<AddressQuery> for GeocodeQuery {
    fn from(query: AddressQuery) -> Self {
        Self::Address(query)
    }
}

impl From<ReverseQuery> for GeocodeQuery {
    fn from(query: ReverseQuery) -> Self {
        Self::Reverse(query)
    }
}

impl From<ComponentQuery> for GeocodeQuery {
    fn from(query: ComponentQuery) -> Self {
        Self::Components(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tagged_address_query() {
        let query: GeocodeQuery = serde_json::from_str(
            r#"{"kind":"address","address":"London","language":"en"}"#,
        )
        .unwrap();
        assert_eq!(
            query,
            GeocodeQuery::Address(AddressQuery::new("London").with_language("en"))
        );
        assert_eq!(query.shape(), "address");
    }

    #[test]
    fn deserializes_reverse_query_with_filters() {
        let query: GeocodeQuery = serde_json::from_str(
            r#"{"kind":"reverse","latitude":1.5,"longitude":2.5,"result_type":{"park":true}}"#,
        )
        .unwrap();
        let GeocodeQuery::Reverse(reverse) = query else {
            panic!("expected reverse query");
        };
        assert!(reverse.result_type.unwrap().park);
        assert!(reverse.location_type.is_none());
    }

    #[test]
    fn component_query_requires_filter_field() {
        let result: Result<GeocodeQuery, _> =
            serde_json::from_str(r#"{"kind":"components","region":"es"}"#);
        assert!(result.is_err());
    }
}
