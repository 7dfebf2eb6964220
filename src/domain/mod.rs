//! Exchange-agnostic domain types.
//!
//! - [`id`] - Token, order and submission identifiers
//! - [`order`] - Order requests and venue responses
//! - [`allowance`] - USDC units and the allowance floor policy
//! - [`mode`] - Execution mode and bootstrap state
//! - [`error`] - Domain validation errors

pub mod allowance;
pub mod error;
pub mod id;
pub mod mode;
pub mod order;
