//! Request payloads and their validation.

pub mod products;
