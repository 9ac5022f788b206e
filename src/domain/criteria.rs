// src/domain/criteria.rs
use std::collections::BTreeSet;

use crate::domain::listing::{Category, PropertyType};
use crate::domain::query_codec::{self, QueryString};

/// Every constraint a visitor can put on a listing search.
/// `None` / empty set means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub category: Option<Category>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub types: BTreeSet<PropertyType>,
    pub min_bedrooms: Option<u32>,
    pub city: Option<String>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        *self == SearchCriteria::default()
    }

    /// Price bounds in ascending order. A reversed pair is swapped.
    pub fn price_bounds(&self) -> (Option<u64>, Option<u64>) {
        match (self.min_price, self.max_price) {
            (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
            bounds => bounds,
        }
    }

    pub fn has_reversed_price_range(&self) -> bool {
        matches!((self.min_price, self.max_price), (Some(lo), Some(hi)) if lo > hi)
    }
}

/// A single scalar field assignment for [`FilterStore::set_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    Query(Option<String>),
    Category(Option<Category>),
    MinPrice(Option<u64>),
    MaxPrice(Option<u64>),
    MinBedrooms(Option<u32>),
    City(Option<String>),
}

/// Blank text is the same as no text.
pub(crate) fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Holds the criteria for one search view.
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    criteria: SearchCriteria,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::from_criteria(SearchCriteria::default())
    }

    pub fn from_criteria(criteria: SearchCriteria) -> Self {
        Self { criteria }
    }

    /// Seed the store from a raw query string (shareable search URL).
    /// Decoded values go through the same setters the form uses.
    pub fn from_query(raw: &str) -> Self {
        let decoded = query_codec::decode(&QueryString::parse(raw));
        let mut store = Self::new();
        store.set_field(FilterField::Query(decoded.query));
        store.set_field(FilterField::Category(decoded.category));
        store.set_field(FilterField::MinPrice(decoded.min_price));
        store.set_field(FilterField::MaxPrice(decoded.max_price));
        store.set_field(FilterField::MinBedrooms(decoded.min_bedrooms));
        store.set_field(FilterField::City(decoded.city));
        for ty in decoded.types {
            store.toggle_type(ty);
        }
        store
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn set_field(&mut self, field: FilterField) {
        let c = &mut self.criteria;
        match field {
            FilterField::Query(v) => c.query = clean_text(v),
            FilterField::Category(v) => c.category = v,
            FilterField::MinPrice(v) => c.min_price = v,
            FilterField::MaxPrice(v) => c.max_price = v,
            FilterField::MinBedrooms(v) => c.min_bedrooms = v,
            FilterField::City(v) => c.city = clean_text(v),
        }
    }

    /// Add `ty` if absent, remove it if present.
    pub fn toggle_type(&mut self, ty: PropertyType) {
        if !self.criteria.types.remove(&ty) {
            self.criteria.types.insert(ty);
        }
    }

    /// Copy of the current criteria with `ty` toggled; the store is unchanged.
    pub fn toggled(&self, ty: PropertyType) -> SearchCriteria {
        let mut next = self.clone();
        next.toggle_type(ty);
        next.criteria
    }

    /// Query string a search submission navigates to.
    pub fn submit(&self) -> QueryString {
        query_codec::encode(&self.criteria)
    }

    /// Reset every field and return the query string of the empty re-search.
    pub fn clear(&mut self) -> QueryString {
        self.criteria = SearchCriteria::default();
        self.submit()
    }
}
