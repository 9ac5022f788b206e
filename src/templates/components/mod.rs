pub mod card;
pub mod email_cta;
pub mod error;
pub mod search_form;

pub use card::{card, listing_card, status_badge};
pub use email_cta::email_cta_form;
pub use error::{alert, field_error, AlertKind};
pub use search_form::search_filter_form;
