//! Modules layer - Infrastructure components
//!
//! Contains the data access layer behind the feature services.

pub mod store;
