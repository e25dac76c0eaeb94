//! Foundation types for termfolio.
//!
//! Shared by every termfolio crate: the error enum, key events delivered
//! by the host UI, and the TOML-backed configuration (including the
//! profile content that the built-in commands present).

pub mod config;
pub mod error;
pub mod input;
pub mod profile;
