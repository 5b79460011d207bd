//! Service layer - wink use cases.

mod wink_service;

pub use wink_service::{WinkManager, WinkService};
