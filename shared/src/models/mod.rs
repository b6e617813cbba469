//! Domain models for the inventory client

mod inventory;
mod product;
mod warehouse;

pub use inventory::*;
pub use product::*;
pub use warehouse::*;
