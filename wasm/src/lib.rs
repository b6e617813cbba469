//! WebAssembly module for the inventory client
//!
//! Provides client-side computation for:
//! - Product form validation and payload coercion
//! - Normalization of product listing responses
//! - Price, date and low-stock formatting for the inventory table

use rust_decimal::Decimal;
use shared::format;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

fn parse_draft(draft_json: &str) -> Result<ProductDraft, String> {
    serde_json::from_str(draft_json).map_err(|e| format!("Invalid form JSON: {}", e))
}

fn parse_products(body_json: &str) -> Result<Vec<Product>, String> {
    serde_json::from_str::<OneOrMany<Product>>(body_json)
        .map(OneOrMany::into_vec)
        .map_err(|e| format!("Invalid products JSON: {}", e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Violated rules of a product form, empty when it can be submitted
pub fn form_violations(draft_json: &str) -> Result<Vec<String>, String> {
    parse_draft(draft_json).map(|draft| validate_product_draft(&draft))
}

/// Create-product JSON body for a valid form
pub fn product_payload(draft_json: &str) -> Result<String, String> {
    let draft = parse_draft(draft_json)?;
    let payload = prepare_new_product(&draft).map_err(|e| e.to_string())?;
    to_json(&payload)
}

/// Product listing normalized to a JSON list
pub fn normalized_products(body_json: &str) -> Result<String, String> {
    to_json(&parse_products(body_json)?)
}

/// Rendered inventory rows as JSON
pub fn product_rows(body_json: &str) -> Result<String, String> {
    let rows: Vec<ProductRow> = parse_products(body_json)?
        .iter()
        .map(ProductRow::from)
        .collect();
    to_json(&rows)
}

/// Total and low-stock counts as JSON
pub fn inventory_summary(body_json: &str) -> Result<String, String> {
    to_json(&InventorySummary::from_products(&parse_products(body_json)?))
}

/// Validate a product form given as JSON with the form's field names
#[wasm_bindgen]
pub fn validate_product_form(draft_json: &str) -> Result<js_sys::Array, JsValue> {
    let violations = form_violations(draft_json).map_err(to_js_error)?;
    Ok(violations.into_iter().map(JsValue::from).collect())
}

/// Build the create-product body; throws the joined violations if invalid
#[wasm_bindgen]
pub fn build_product_payload(draft_json: &str) -> Result<String, JsValue> {
    product_payload(draft_json).map_err(to_js_error)
}

/// Normalize a product listing response (single object or list) to a list
#[wasm_bindgen]
pub fn normalize_products(body_json: &str) -> Result<String, JsValue> {
    normalized_products(body_json).map_err(to_js_error)
}

/// Rendered rows for the inventory table
#[wasm_bindgen]
pub fn inventory_rows(body_json: &str) -> Result<String, JsValue> {
    product_rows(body_json).map_err(to_js_error)
}

/// Summary counts for the inventory table
#[wasm_bindgen]
pub fn summarize_inventory(body_json: &str) -> Result<String, JsValue> {
    inventory_summary(body_json).map_err(to_js_error)
}

/// Format a price as local currency; non-finite input renders a placeholder
#[wasm_bindgen]
pub fn format_price(price: f64) -> String {
    format::format_price(Decimal::try_from(price).ok())
}

/// Format an expiration date as dd/mm/yyyy
#[wasm_bindgen]
pub fn format_expiration_date(date: Option<String>) -> String {
    format::format_expiration_date(date.as_deref())
}

/// Check whether current stock is at or below the minimum
#[wasm_bindgen]
pub fn is_low_stock(stock: i32, min_stock: i32) -> bool {
    shared::is_low_stock(stock.into(), min_stock.into())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_validate_product_form_returns_array() {
        let violations = validate_product_form("{}").unwrap();
        assert_eq!(violations.length(), 5);
    }

    #[wasm_bindgen_test]
    fn test_build_product_payload_throws_on_invalid() {
        assert!(build_product_payload("{}").is_err());
    }
}
