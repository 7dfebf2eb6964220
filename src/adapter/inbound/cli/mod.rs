//! CLI module graph.

pub mod allowance;
pub mod command;
pub mod config;
pub mod order;
pub mod output;
pub mod session;
pub mod status;
