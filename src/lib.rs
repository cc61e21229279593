//! Core library exports for the inventory service.
//!
//! With only the `data` feature the crate exposes the persistence layer
//! (`domain`, `models`, `schema`, `repository`). The default `server` feature
//! adds request parsing, services, HTTP routes and catalog seeding.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod services;
