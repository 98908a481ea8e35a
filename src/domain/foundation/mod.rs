//! Foundation value objects shared across the domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedCaller};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChatTurnId, UserId};
pub use timestamp::Timestamp;
