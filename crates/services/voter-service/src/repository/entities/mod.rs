//! SeaORM entities.

pub mod voter;
