// src/domain/listing.rs
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Broad market segment a listing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Residential,
    Commercial,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Residential, Category::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Commercial => "commercial",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Commercial => "Commercial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    Villa,
    Land,
    Office,
    Retail,
}

impl PropertyType {
    pub const ALL: [PropertyType; 8] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::Villa,
        PropertyType::Land,
        PropertyType::Office,
        PropertyType::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Condo => "condo",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Villa => "villa",
            PropertyType::Land => "land",
            PropertyType::Office => "office",
            PropertyType::Retail => "retail",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Villa => "Villa",
            PropertyType::Land => "Land",
            PropertyType::Office => "Office",
            PropertyType::Retail => "Retail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    ForSale,
    ForRent,
    Sold,
    Pending,
}

impl ListingStatus {
    pub const ALL: [ListingStatus; 4] = [
        ListingStatus::ForSale,
        ListingStatus::ForRent,
        ListingStatus::Sold,
        ListingStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for-sale",
            ListingStatus::ForRent => "for-rent",
            ListingStatus::Sold => "sold",
            ListingStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "For Sale",
            ListingStatus::ForRent => "For Rent",
            ListingStatus::Sold => "Sold",
            ListingStatus::Pending => "Pending",
        }
    }
}

/// Parse error shared by the controlled-vocabulary enums above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownValue {}

// All three enums parse from their `as_str` form, ignoring case and surrounding space.
macro_rules! impl_from_str {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_ascii_lowercase();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == needle)
                    .ok_or_else(|| UnknownValue(s.to_string()))
            }
        }
    };
}

impl_from_str!(Category);
impl_from_str!(PropertyType);
impl_from_str!(ListingStatus);

/// A listing as supplied by a `ListingSource`. Read-only to the search code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    /// Display price exactly as the source formats it, e.g. "$450,000" or "$2,500/mo".
    pub price: String,
    pub location: String,
    pub city: String,
    pub status: ListingStatus,
    pub category: Category,
    pub property_type: PropertyType,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub area_sqft: u32,
    pub listed_at: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub agent_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_parse_their_own_query_form() {
        for t in PropertyType::ALL {
            assert_eq!(t.as_str().parse::<PropertyType>().unwrap(), t);
        }
        for s in ListingStatus::ALL {
            assert_eq!(s.as_str().parse::<ListingStatus>().unwrap(), s);
        }
        assert_eq!(
            " Commercial ".parse::<Category>().unwrap(),
            Category::Commercial
        );
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let err = "castle".parse::<PropertyType>().unwrap_err();
        assert_eq!(err, UnknownValue("castle".to_string()));
        assert!("for_sale".parse::<ListingStatus>().is_err());
    }

    #[test]
    fn listing_record_deserializes_with_defaults() {
        let json = r#"{
            "id": "p-1",
            "title": "Cozy Studio",
            "price": "$1,800/mo",
            "location": "Mission District, San Francisco",
            "city": "San Francisco",
            "status": "for-rent",
            "category": "residential",
            "property_type": "apartment",
            "listed_at": "2024-03-02"
        }"#;

        let rec: ListingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.status, ListingStatus::ForRent);
        assert_eq!(rec.property_type, PropertyType::Apartment);
        assert_eq!(rec.bedrooms, 0);
        assert!(rec.features.is_empty());
        assert_eq!(rec.listed_at, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }
}
