//! Application services (use cases).
//!
//! The execution gateway orchestrates domain logic and the outbound ports.
//! Nothing here depends on infrastructure.

pub mod gateway;
