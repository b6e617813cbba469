//! The two screens of the client

pub mod inventory;
pub mod product_form;

pub use inventory::{InventoryView, InventoryViewer};
pub use product_form::ProductForm;
