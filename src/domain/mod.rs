//! Domain entities and constrained value types.

pub mod category;
pub mod product;
pub mod types;
