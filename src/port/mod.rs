//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────┐
//!                 │  ExecutionGateway    │
//!                 └──────────┬───────────┘
//!            ┌───────────────┴───────────────┐
//!            ▼                               ▼
//!    ┌───────────────┐               ┌───────────────┐
//!    │AllowanceReader│               │  OrderVenue   │
//!    │  (RPC/alloy)  │               │ (CLOB client) │
//!    └───────────────┘               └───────────────┘
//! ```

pub mod outbound;
