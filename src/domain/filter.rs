// src/domain/filter.rs
use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::criteria::SearchCriteria;
use crate::domain::listing::{ListingRecord, ListingStatus, UnknownValue};

/// Record fields the free-text query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Location,
    City,
    Description,
}

impl SearchField {
    fn value<'a>(&self, rec: &'a ListingRecord) -> &'a str {
        match self {
            SearchField::Title => &rec.title,
            SearchField::Location => &rec.location,
            SearchField::City => &rec.city,
            SearchField::Description => &rec.description,
        }
    }
}

/// Query-string key carrying the sort order next to the search criteria.
pub const SORT_PARAM: &str = "sort";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest first",
            SortOrder::Oldest => "Oldest first",
            SortOrder::PriceAsc => "Price: low to high",
            SortOrder::PriceDesc => "Price: high to low",
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SortOrder::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == needle)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

/// Per-view knobs that are not part of `SearchCriteria`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub fields: Vec<SearchField>,
    pub status: Option<ListingStatus>,
    pub sort: SortOrder,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            fields: vec![SearchField::Title, SearchField::Location],
            status: None,
            sort: SortOrder::default(),
        }
    }
}

/// Strip everything but ASCII digits: "$1,200,000" -> 1200000.
/// Returns `None` when no digits remain or the value overflows.
pub fn normalize_price(price: &str) -> Option<u64> {
    let digits: String = price.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches(
    rec: &ListingRecord,
    criteria: &SearchCriteria,
    options: &FilterOptions,
    query_lower: Option<&str>,
    city_lower: Option<&str>,
) -> bool {
    if let Some(q) = query_lower {
        if !options.fields.iter().any(|f| contains_ci(f.value(rec), q)) {
            return false;
        }
    }

    if criteria.category.is_some_and(|c| c != rec.category) {
        return false;
    }

    if !criteria.types.is_empty() && !criteria.types.contains(&rec.property_type) {
        return false;
    }

    if options.status.is_some_and(|s| s != rec.status) {
        return false;
    }

    if criteria.min_bedrooms.is_some_and(|min| rec.bedrooms < min) {
        return false;
    }

    if let Some(city) = city_lower {
        if !contains_ci(&rec.location, city) && !contains_ci(&rec.city, city) {
            return false;
        }
    }

    let (lo, hi) = criteria.price_bounds();
    if lo.is_some() || hi.is_some() {
        let Some(price) = normalize_price(&rec.price) else {
            return false;
        };
        if lo.is_some_and(|lo| price < lo) || hi.is_some_and(|hi| price > hi) {
            return false;
        }
    }

    true
}

// Missing prices sort after every priced record, whichever direction.
fn cmp_price(a: Option<u64>, b: Option<u64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Apply `criteria` and `options` to `records`. Pure; the sort is stable.
pub fn filter_listings<'a>(
    records: &'a [ListingRecord],
    criteria: &SearchCriteria,
    options: &FilterOptions,
) -> Vec<&'a ListingRecord> {
    let query_lower = criteria.query.as_deref().map(str::to_lowercase);
    let city_lower = criteria.city.as_deref().map(str::to_lowercase);

    let mut out: Vec<&ListingRecord> = records
        .iter()
        .filter(|rec| {
            matches(
                rec,
                criteria,
                options,
                query_lower.as_deref(),
                city_lower.as_deref(),
            )
        })
        .collect();

    match options.sort {
        SortOrder::Newest => out.sort_by(|a, b| b.listed_at.cmp(&a.listed_at)),
        SortOrder::Oldest => out.sort_by(|a, b| a.listed_at.cmp(&b.listed_at)),
        SortOrder::PriceAsc | SortOrder::PriceDesc => {
            let desc = options.sort == SortOrder::PriceDesc;
            out.sort_by(|a, b| {
                cmp_price(normalize_price(&a.price), normalize_price(&b.price), desc)
            });
        }
    }

    out
}
