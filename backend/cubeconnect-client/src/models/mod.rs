pub mod health;
pub mod message_response;

pub(crate) mod lenient;

pub use health::{HealthChecks, HealthStatus};
pub use message_response::MessageResponse;
