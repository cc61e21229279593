//! Serializable shapes returned by the HTTP API.

pub mod categories;
pub mod products;
pub mod responses;
