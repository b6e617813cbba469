//! Inventory client
//!
//! Lets a user pick a warehouse, list its stock and add new products. All
//! persistence and business rules live in the external inventory API; this
//! crate manages view state and the REST calls.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod screens;
pub mod shell;

pub use api::{HttpInventoryApi, InventoryApi};
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use shell::{Shell, Tab};
