//! Factory modules for building infrastructure components.
//!
//! # Submodules
//!
//! - [`gateway`] - Execution gateway construction
pub mod gateway;
