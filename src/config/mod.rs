//! Configuration module for finledger
//!
//! User settings persistence. No configuration is required: a missing file
//! yields defaults.

pub mod settings;

pub use settings::Settings;
