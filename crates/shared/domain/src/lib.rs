//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Both the wink store and the mail service depend on it.

pub mod constants;
pub mod email;
pub mod error;
pub mod wink;

pub use constants::*;
pub use email::{DeliveryReport, OutgoingEmail};
pub use error::{DomainError, DomainResult};
pub use wink::{parse_reference, NewWink, Wink, WinkResponse};
