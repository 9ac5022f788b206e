// src/domain/query_codec.rs
//
// Maps `SearchCriteria` to and from the query string of a search URL.
//
// Keys: query, category, minPrice, maxPrice, types (repeated), minBedrooms, city.
// Anything unparsable decodes to "unset", never to an error.

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::domain::criteria::{clean_text, SearchCriteria};
use crate::domain::listing::{Category, PropertyType};

pub const KEY_QUERY: &str = "query";
pub const KEY_CATEGORY: &str = "category";
pub const KEY_MIN_PRICE: &str = "minPrice";
pub const KEY_MAX_PRICE: &str = "maxPrice";
pub const KEY_TYPES: &str = "types";
pub const KEY_MIN_BEDROOMS: &str = "minBedrooms";
pub const KEY_CITY: &str = "city";

/// Flat, ordered key/value pairs; keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a=1&b=2` (a leading `?` is tolerated).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `path` plus `?query` when there is anything to append.
    pub fn to_url(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{self}")
        }
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            ser.append_pair(k, v);
        }
        f.write_str(&ser.finish())
    }
}

/// Drop unset fields; one `types` pair per set element.
pub fn encode(criteria: &SearchCriteria) -> QueryString {
    let mut qs = QueryString::new();

    if let Some(q) = &criteria.query {
        qs.push(KEY_QUERY, q.as_str());
    }
    if let Some(cat) = criteria.category {
        qs.push(KEY_CATEGORY, cat.as_str());
    }
    if let Some(min) = criteria.min_price {
        qs.push(KEY_MIN_PRICE, min.to_string());
    }
    if let Some(max) = criteria.max_price {
        qs.push(KEY_MAX_PRICE, max.to_string());
    }
    for ty in &criteria.types {
        qs.push(KEY_TYPES, ty.as_str());
    }
    if let Some(beds) = criteria.min_bedrooms {
        qs.push(KEY_MIN_BEDROOMS, beds.to_string());
    }
    if let Some(city) = &criteria.city {
        qs.push(KEY_CITY, city.as_str());
    }

    qs
}

pub fn decode(qs: &QueryString) -> SearchCriteria {
    SearchCriteria {
        query: clean_text(qs.get(KEY_QUERY).map(str::to_string)),
        category: parse_opt::<Category>(qs.get(KEY_CATEGORY)),
        min_price: parse_opt::<u64>(qs.get(KEY_MIN_PRICE)),
        max_price: parse_opt::<u64>(qs.get(KEY_MAX_PRICE)),
        types: qs
            .get_all(KEY_TYPES)
            .filter_map(|v| v.parse::<PropertyType>().ok())
            .collect(),
        min_bedrooms: parse_opt::<u32>(qs.get(KEY_MIN_BEDROOMS)),
        city: clean_text(qs.get(KEY_CITY).map(str::to_string)),
    }
}

/// Permissive parse: absent, blank or invalid all become `None`.
pub fn parse_opt<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse::<T>().ok())
}
