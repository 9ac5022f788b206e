pub mod auth;
pub mod connection;
pub mod contact;
pub mod listings;
pub mod plans;

pub use connection::{init_db, Database};
