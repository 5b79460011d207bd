//! Repository layer for data access.

pub mod entities;
mod wink_repository;

pub use wink_repository::{WinkRepository, WinkStore};

#[cfg(test)]
pub use wink_repository::MockWinkRepository;
