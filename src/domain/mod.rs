pub mod contact;
pub mod criteria;
pub mod filter;
pub mod listing;
pub mod query_codec;

pub use criteria::{FilterStore, SearchCriteria};
pub use filter::{filter_listings, FilterOptions, SearchField, SortOrder, SORT_PARAM};
pub use listing::{Category, ListingRecord, ListingStatus, PropertyType};
pub use query_codec::QueryString;
