//! Infrastructure configuration modules.

pub mod credentials;
pub mod logging;
pub mod settings;
pub mod strategy;
