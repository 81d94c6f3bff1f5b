//! userpick — headless user picker (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod cache;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
pub mod picker;
pub mod progress;
pub mod providers;
