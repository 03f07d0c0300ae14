//! Domain layer: entities and response contracts
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod report;
pub mod response;

pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use report::{ErrorCode, ErrorEnvelope};
