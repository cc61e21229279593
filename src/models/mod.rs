//! Diesel row types and their conversions into domain entities.

pub mod category;
pub mod product;
pub mod product_category;
