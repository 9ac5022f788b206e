pub mod about;
pub mod check_email;
pub mod contact;
pub mod error;
pub mod home;
pub mod login;
pub mod pricing;
pub mod properties;
pub mod search;
pub mod verify_email;

pub use about::about_page;
pub use check_email::check_email_content;
pub use contact::contact_page;
pub use error::error_page;
pub use home::home_page;
pub use login::login_page;
pub use pricing::pricing_page;
pub use properties::{properties_page, property_details_page, PropertiesView};
pub use search::search_page;
pub use verify_email::{verify_failed_page, verify_success_page};
