//! Filter encoders for the `components`, `result_type` and `location_type`
//! query parameters.
//!
//! # Design
//! Each filter is a plain struct with named fields. The encoding order is the
//! field declaration order, pinned in the `entries` tables below, because the
//! rendered query is the input of the request signature. The joined
//! `key:value|key` list is percent-encoded as one opaque token.

use serde::{Deserialize, Serialize};

use crate::error::{GeocodeError, Result};

/// Join entries with `|` and percent-encode the result as a single token.
fn encode_pipe_list<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = entries.into_iter().fold(String::new(), |mut acc, entry| {
        if !acc.is_empty() {
            acc.push('|');
        }
        acc.push_str(entry.as_ref());
        acc
    });
    urlencoding::encode(&joined).into_owned()
}

/// Exact-match constraints that restrict geocoding results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentFilter {
    /// Matches the long or short name of a route.
    pub route: Option<String>,
    /// Matches both locality and sublocality types.
    pub locality: Option<String>,
    /// Matches all administrative_area levels.
    pub administrative_area: Option<String>,
    /// Matches postal_code and postal_code_prefix.
    pub postal_code: Option<String>,
    /// Country name or two letter ISO 3166-1 code.
    pub country: Option<String>,
}

impl ComponentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn with_administrative_area(mut self, area: impl Into<String>) -> Self {
        self.administrative_area = Some(area.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    fn entries(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("route", self.route.as_deref()),
            ("locality", self.locality.as_deref()),
            ("administrative_area", self.administrative_area.as_deref()),
            ("postal_code", self.postal_code.as_deref()),
            ("country", self.country.as_deref()),
        ]
    }

    fn usable_entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries()
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (key, v)))
    }

    /// True when no component carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        self.usable_entries().next().is_none()
    }

    /// Render the filter as the percent-encoded value of `components=`.
    ///
    /// Blank components are skipped. A filter with no usable component is a
    /// caller error and fails with [`GeocodeError::InvalidFilter`].
    pub fn encode(&self) -> Result<String> {
        if self.is_empty() {
            return Err(GeocodeError::InvalidFilter);
        }
        Ok(encode_pipe_list(
            self.usable_entries().map(|(key, value)| format!("{key}:{value}")),
        ))
    }
}

/// Post-search filter on the address types of reverse geocoding results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultTypeFilter {
    pub street_address: bool,
    pub route: bool,
    pub intersection: bool,
    pub political: bool,
    pub country: bool,
    pub administrative_area_level_1: bool,
    pub administrative_area_level_2: bool,
    pub administrative_area_level_3: bool,
    pub administrative_area_level_4: bool,
    pub administrative_area_level_5: bool,
    pub colloquial_area: bool,
    pub locality: bool,
    pub sublocality: bool,
    pub neighborhood: bool,
    pub premise: bool,
    pub subpremise: bool,
    pub postal_code: bool,
    pub natural_feature: bool,
    pub airport: bool,
    pub park: bool,
    pub point_of_interest: bool,
}

impl ResultTypeFilter {
    fn entries(&self) -> [(&'static str, bool); 21] {
        [
            ("street_address", self.street_address),
            ("route", self.route),
            ("intersection", self.intersection),
            ("political", self.political),
            ("country", self.country),
            ("administrative_area_level_1", self.administrative_area_level_1),
            ("administrative_area_level_2", self.administrative_area_level_2),
            ("administrative_area_level_3", self.administrative_area_level_3),
            ("administrative_area_level_4", self.administrative_area_level_4),
            ("administrative_area_level_5", self.administrative_area_level_5),
            ("colloquial_area", self.colloquial_area),
            ("locality", self.locality),
            ("sublocality", self.sublocality),
            ("neighborhood", self.neighborhood),
            ("premise", self.premise),
            ("subpremise", self.subpremise),
            ("postal_code", self.postal_code),
            ("natural_feature", self.natural_feature),
            ("airport", self.airport),
            ("park", self.park),
            ("point_of_interest", self.point_of_interest),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, on)| !on)
    }

    /// Render the enabled flags as the value of `result_type=`. An empty
    /// filter encodes to an empty string.
    pub fn encode(&self) -> String {
        encode_pipe_list(
            self.entries()
                .into_iter()
                .filter_map(|(key, on)| on.then_some(key)),
        )
    }
}

/// Post-search filter on the precision of reverse geocoding results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationTypeFilter {
    pub rooftop: bool,
    pub range_interpolated: bool,
    pub geometric_center: bool,
    pub approximate: bool,
}

impl LocationTypeFilter {
    fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("ROOFTOP", self.rooftop),
            ("RANGE_INTERPOLATED", self.range_interpolated),
            ("GEOMETRIC_CENTER", self.geometric_center),
            ("APPROXIMATE", self.approximate),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, on)| !on)
    }

    /// Render the enabled flags as the value of `location_type=`.
    pub fn encode(&self) -> String {
        encode_pipe_list(
            self.entries()
                .into_iter()
                .filter_map(|(key, on)| on.then_some(key)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_list_joins_then_encodes_once() {
        assert_eq!(encode_pipe_list(["route:Main St", "country:GB"]), "route%3AMain%20St%7Ccountry%3AGB");
        assert_eq!(encode_pipe_list(["rooftop"]), "rooftop");
        assert_eq!(encode_pipe_list(Vec::<String>::new()), "");
    }

    #[test]
    fn component_filter_encodes_single_country() {
        let filter = ComponentFilter::new().with_country("es");
        assert_eq!(filter.encode().unwrap(), "country%3Aes");
    }

    #[test]
    fn component_filter_uses_declaration_order() {
        let filter = ComponentFilter::new()
            .with_country("GB")
            .with_postal_code("BS5 6HU")
            .with_route("Henrietta Street");
        assert_eq!(
            filter.encode().unwrap(),
            "route%3AHenrietta%20Street%7Cpostal_code%3ABS5%206HU%7Ccountry%3AGB"
        );
    }

    #[test]
    fn component_filter_skips_blank_values() {
        let filter = ComponentFilter::new()
            .with_locality("   ")
            .with_administrative_area("")
            .with_country("fr");
        assert_eq!(filter.encode().unwrap(), "country%3Afr");
    }

    #[test]
    fn empty_component_filter_is_invalid() {
        assert!(matches!(
            ComponentFilter::new().encode(),
            Err(GeocodeError::InvalidFilter)
        ));
        let blank = ComponentFilter::new().with_route(" ");
        assert!(blank.is_empty());
        assert!(matches!(blank.encode(), Err(GeocodeError::InvalidFilter)));
    }

    #[test]
    fn component_filter_deserializes_partial_json() {
        let filter: ComponentFilter =
            serde_json::from_str(r#"{"locality":"Bristol","country":"uk"}"#).unwrap();
        assert_eq!(filter.locality.as_deref(), Some("Bristol"));
        assert!(filter.route.is_none());
    }

    #[test]
    fn result_type_filter_joins_enabled_flags() {
        let filter = ResultTypeFilter {
            point_of_interest: true,
            street_address: true,
            administrative_area_level_2: true,
            ..Default::default()
        };
        assert_eq!(
            filter.encode(),
            "street_address%7Cadministrative_area_level_2%7Cpoint_of_interest"
        );
    }

    #[test]
    fn empty_post_search_filters_encode_to_empty_string() {
        assert!(ResultTypeFilter::default().is_empty());
        assert_eq!(ResultTypeFilter::default().encode(), "");
        assert!(LocationTypeFilter::default().is_empty());
        assert_eq!(LocationTypeFilter::default().encode(), "");
    }

    #[test]
    fn location_type_filter_uses_upper_case_wire_names() {
        let filter = LocationTypeFilter {
            rooftop: true,
            approximate: true,
            ..Default::default()
        };
        assert_eq!(filter.encode(), "ROOFTOP%7CAPPROXIMATE");
    }
}
