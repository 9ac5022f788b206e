use crate::db::connection::Database;
use crate::domain::listing::ListingRecord;
use crate::errors::ServerError;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

const SELECT_LISTING_COLUMNS: &str = r#"
    SELECT
        id,              -- 0
        title,           -- 1
        price,           -- 2
        location,        -- 3
        city,            -- 4
        status,          -- 5
        category,        -- 6
        property_type,   -- 7
        bedrooms,        -- 8
        bathrooms,       -- 9
        area_sqft,       -- 10
        listed_at,       -- 11
        description,     -- 12
        features_json,   -- 13
        agent_name,      -- 14
        agent_email      -- 15
    FROM listings
"#;

// Enum columns hold the same strings the query string uses.
fn parse_column<T: std::str::FromStr>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn row_to_listing(row: &Row<'_>) -> rusqlite::Result<ListingRecord> {
    let features_json: String = row.get(13)?;
    let features: Vec<String> = serde_json::from_str(&features_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(13, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(ListingRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        price: row.get(2)?,
        location: row.get(3)?,
        city: row.get(4)?,
        status: parse_column(row, 5)?,
        category: parse_column(row, 6)?,
        property_type: parse_column(row, 7)?,
        bedrooms: row.get(8)?,
        bathrooms: row.get(9)?,
        area_sqft: row.get(10)?,
        listed_at: row.get::<_, NaiveDate>(11)?,
        description: row.get(12)?,
        features,
        agent_name: row.get(14)?,
        agent_email: row.get(15)?,
    })
}

/// Upsert `records` in one transaction, keyed by listing id.
pub fn seed_listings(db: &Database, records: &[ListingRecord]) -> Result<usize, ServerError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for rec in records {
            let features_json = serde_json::to_string(&rec.features)
                .map_err(|e| ServerError::DbError(e.to_string()))?;

            tx.execute(
                r#"
                INSERT INTO listings (
                    id, title, price, location, city,
                    status, category, property_type,
                    bedrooms, bathrooms, area_sqft, listed_at,
                    description, features_json, agent_name, agent_email
                ) VALUES (
                    ?1, ?2, ?3, ?4, ?5,
                    ?6, ?7, ?8,
                    ?9, ?10, ?11, ?12,
                    ?13, ?14, ?15, ?16
                )
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    price = excluded.price,
                    location = excluded.location,
                    city = excluded.city,
                    status = excluded.status,
                    category = excluded.category,
                    property_type = excluded.property_type,
                    bedrooms = excluded.bedrooms,
                    bathrooms = excluded.bathrooms,
                    area_sqft = excluded.area_sqft,
                    listed_at = excluded.listed_at,
                    description = excluded.description,
                    features_json = excluded.features_json,
                    agent_name = excluded.agent_name,
                    agent_email = excluded.agent_email
                "#,
                params![
                    rec.id,
                    rec.title,
                    rec.price,
                    rec.location,
                    rec.city,
                    rec.status.as_str(),
                    rec.category.as_str(),
                    rec.property_type.as_str(),
                    rec.bedrooms,
                    rec.bathrooms,
                    rec.area_sqft,
                    rec.listed_at,
                    rec.description,
                    features_json,
                    rec.agent_name,
                    rec.agent_email,
                ],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        Ok(records.len())
    })
}

/// All listings in insertion order; ordering for display is the filter's job.
pub fn get_all_listings(db: &Database) -> Result<Vec<ListingRecord>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&format!("{SELECT_LISTING_COLUMNS} ORDER BY rowid"))
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], row_to_listing)
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(results)
    })
}

pub fn get_listing(db: &Database, id: &str) -> Result<Option<ListingRecord>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("{SELECT_LISTING_COLUMNS} WHERE id = ?1"),
            params![id],
            row_to_listing,
        )
        .optional()
        .map_err(|e| ServerError::DbError(e.to_string()))
    })
}
