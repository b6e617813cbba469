//! Inventory listing models: rendered rows and the stock summary

use serde::{Deserialize, Serialize};

use super::Product;
use crate::format;

/// One rendered line of the inventory table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRow {
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub min_stock: String,
    pub max_stock: String,
    pub unit: String,
    pub status: String,
    pub expiration_date: String,
    pub low_stock: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            category: format::category_label(product.category.as_deref()),
            price: format::format_price(product.price),
            stock: format::quantity_label(product.stock),
            min_stock: format::quantity_label(product.min_stock),
            max_stock: format::quantity_label(product.max_stock),
            unit: format::unit_label(product.unit.as_deref()),
            status: format::status_label(product.is_active()).to_string(),
            expiration_date: format::format_expiration_date(product.expiration_date.as_deref()),
            low_stock: product.is_low_stock(),
        }
    }
}

/// Totals shown under the inventory table
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventorySummary {
    pub total_products: usize,
    pub low_stock_products: usize,
}

impl InventorySummary {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            total_products: products.len(),
            low_stock_products: products.iter().filter(|p| p.is_low_stock()).count(),
        }
    }
}
