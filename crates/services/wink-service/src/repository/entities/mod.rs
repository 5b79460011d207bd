//! SeaORM entities.

pub mod wink;
