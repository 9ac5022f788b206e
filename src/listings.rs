// src/listings.rs
//
// Where listing records come from. The filter code only ever sees
// `Vec<ListingRecord>`, so sources can be swapped freely.
use crate::config::ListingSourceKind;
use crate::db::connection::Database;
use crate::db::listings::{get_all_listings, get_listing, seed_listings};
use crate::domain::listing::ListingRecord;
use crate::errors::ServerError;

const MOCK_LISTINGS_JSON: &str = include_str!("../data/listings.json");

pub trait ListingSource: Send + Sync {
    fn all(&self) -> Result<Vec<ListingRecord>, ServerError>;

    fn find(&self, id: &str) -> Result<Option<ListingRecord>, ServerError> {
        Ok(self.all()?.into_iter().find(|r| r.id == id))
    }
}

/// The bundled sample listings, parsed once at startup.
pub struct MockListings {
    records: Vec<ListingRecord>,
}

impl MockListings {
    pub fn load() -> Result<Self, ServerError> {
        Ok(Self {
            records: parse_listings(MOCK_LISTINGS_JSON)?,
        })
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }
}

/// A broken bundled file is a server fault, not the caller's.
fn parse_listings(json: &str) -> Result<Vec<ListingRecord>, ServerError> {
    serde_json::from_str(json).map_err(|e| {
        tracing::error!(error = %e, "bundled listings are not valid JSON");
        ServerError::InternalError
    })
}

impl ListingSource for MockListings {
    fn all(&self) -> Result<Vec<ListingRecord>, ServerError> {
        Ok(self.records.clone())
    }
}

/// Listings read from the `listings` table.
pub struct SqliteListings {
    db: Database,
}

impl SqliteListings {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ListingSource for SqliteListings {
    fn all(&self) -> Result<Vec<ListingRecord>, ServerError> {
        get_all_listings(&self.db)
    }

    fn find(&self, id: &str) -> Result<Option<ListingRecord>, ServerError> {
        get_listing(&self.db, id)
    }
}

/// Build the configured source. The SQLite source is seeded from the sample data.
pub fn listing_source_for(
    kind: ListingSourceKind,
    db: &Database,
) -> Result<Box<dyn ListingSource>, ServerError> {
    let mock = MockListings::load()?;
    match kind {
        ListingSourceKind::Mock => {
            tracing::info!(count = mock.records().len(), "serving mock listings");
            Ok(Box::new(mock))
        }
        ListingSourceKind::Sqlite => {
            let n = seed_listings(db, mock.records())?;
            tracing::info!(count = n, "seeded listings table");
            Ok(Box::new(SqliteListings::new(db.clone())))
        }
    }
}
