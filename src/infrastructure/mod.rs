//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic: configuration loading, credentials, logging, and the
//! factories that wire production adapters.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`factory`] - Component factory functions

pub mod config;
pub mod factory;
