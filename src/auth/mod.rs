pub mod context;
pub mod sessions;
pub mod token;
pub mod verify;

pub use context::SessionContext;
pub use verify::{EmailVerificationService, VerificationConfig};
