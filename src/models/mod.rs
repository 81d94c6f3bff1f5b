//! Shared types used across all modules.
//!
//! Other modules import from here rather than reaching into each other's
//! internals.

pub mod user;

pub use user::{UserId, UserOption, UserRecord};
