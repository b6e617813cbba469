//! Shared types and models for the inventory client
//!
//! This crate contains the domain models, form validation and display
//! formatting used by the terminal client and the browser (WASM) bindings.

pub mod format;
pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
