//! Client-side validation of the product form
//!
//! Every rule is evaluated on each submission; violations are collected, not
//! short-circuited, so the user sees all of them at once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{NewProduct, ProductDraft, UnitOfMeasure};

pub const CODE_REQUIRED: &str = "El código es obligatorio";
pub const CODE_TOO_LONG: &str = "El código no puede superar 50 caracteres";
pub const NAME_REQUIRED: &str = "El nombre es obligatorio";
pub const NAME_TOO_LONG: &str = "El nombre no puede superar 100 caracteres";
pub const DESCRIPTION_TOO_LONG: &str = "La descripción no puede superar 500 caracteres";
pub const CATEGORY_TOO_LONG: &str = "La categoría no puede superar 50 caracteres";
pub const PRICE_NOT_POSITIVE: &str = "El precio debe ser mayor a 0";
pub const STOCK_REQUIRED: &str = "La cantidad en stock es obligatoria";
pub const STOCK_NOT_INTEGER: &str = "La cantidad en stock debe ser un número entero";
pub const STOCK_NEGATIVE: &str = "La cantidad en stock no puede ser negativa";
pub const WAREHOUSE_REQUIRED: &str = "Debe seleccionar un almacén";
pub const WAREHOUSE_INVALID: &str = "El almacén seleccionado no es válido";
pub const MIN_NOT_INTEGER: &str = "La cantidad mínima debe ser un número entero";
pub const MIN_NEGATIVE: &str = "La cantidad mínima no puede ser negativa";
pub const MAX_NOT_INTEGER: &str = "La cantidad máxima debe ser un número entero";
pub const MAX_NEGATIVE: &str = "La cantidad máxima no puede ser negativa";
pub const MIN_ABOVE_MAX: &str = "La cantidad mínima no puede ser mayor que la máxima";
pub const UNIT_INVALID: &str = "La unidad de medida no es válida";
pub const EXPIRATION_DATE_INVALID: &str = "La fecha de vencimiento no es válida";

pub const MAX_CODE_CHARS: usize = 50;
pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_DESCRIPTION_CHARS: usize = 500;
pub const MAX_CATEGORY_CHARS: usize = 50;

/// The violated rules of a rejected form, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.join(", "))]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, message: &str) -> bool {
        self.0.iter().any(|m| m == message)
    }
}

/// Outcome of reading one raw form value
#[derive(Debug, Clone, Copy, PartialEq)]
enum Parsed<T> {
    Blank,
    Invalid,
    Value(T),
}

fn parse_field<T: FromStr>(raw: &str) -> Parsed<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Parsed::Blank;
    }
    match trimmed.parse() {
        Ok(value) => Parsed::Value(value),
        Err(_) => Parsed::Invalid,
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn too_long(raw: &str, limit: usize) -> bool {
    raw.trim().chars().count() > limit
}

/// Run every rule against the draft; empty when the draft is submittable
pub fn validate_product_draft(draft: &ProductDraft) -> Vec<String> {
    match prepare_new_product(draft) {
        Ok(_) => Vec::new(),
        Err(errors) => errors.0,
    }
}

/// Validate the draft and coerce it into the create-product payload
///
/// Text is trimmed, blank optional text becomes `None`, a blank minimum
/// becomes `0` and a blank maximum stays `None`.
pub fn prepare_new_product(draft: &ProductDraft) -> Result<NewProduct, ValidationErrors> {
    let mut errors: Vec<&'static str> = Vec::new();

    let code = draft.code.trim();
    if code.is_empty() {
        errors.push(CODE_REQUIRED);
    } else if too_long(code, MAX_CODE_CHARS) {
        errors.push(CODE_TOO_LONG);
    }

    let name = draft.name.trim();
    if name.is_empty() {
        errors.push(NAME_REQUIRED);
    } else if too_long(name, MAX_NAME_CHARS) {
        errors.push(NAME_TOO_LONG);
    }

    if too_long(&draft.description, MAX_DESCRIPTION_CHARS) {
        errors.push(DESCRIPTION_TOO_LONG);
    }
    if too_long(&draft.category, MAX_CATEGORY_CHARS) {
        errors.push(CATEGORY_TOO_LONG);
    }

    let price = match parse_field::<Decimal>(&draft.price) {
        Parsed::Value(price) if price > Decimal::ZERO => Some(price),
        _ => {
            errors.push(PRICE_NOT_POSITIVE);
            None
        }
    };

    let stock = match parse_field::<i64>(&draft.stock) {
        Parsed::Blank => {
            errors.push(STOCK_REQUIRED);
            None
        }
        Parsed::Invalid => {
            errors.push(STOCK_NOT_INTEGER);
            None
        }
        Parsed::Value(stock) if stock < 0 => {
            errors.push(STOCK_NEGATIVE);
            None
        }
        Parsed::Value(stock) => Some(stock),
    };

    let warehouse_id = match parse_field::<i64>(&draft.warehouse_id) {
        Parsed::Blank => {
            errors.push(WAREHOUSE_REQUIRED);
            None
        }
        Parsed::Invalid => {
            errors.push(WAREHOUSE_INVALID);
            None
        }
        Parsed::Value(id) => Some(id),
    };

    let min_stock = parse_field::<i64>(&draft.min_stock);
    match min_stock {
        Parsed::Invalid => errors.push(MIN_NOT_INTEGER),
        Parsed::Value(min) if min < 0 => errors.push(MIN_NEGATIVE),
        _ => {}
    }

    let max_stock = parse_field::<i64>(&draft.max_stock);
    match max_stock {
        Parsed::Invalid => errors.push(MAX_NOT_INTEGER),
        Parsed::Value(max) if max < 0 => errors.push(MAX_NEGATIVE),
        _ => {}
    }

    if let (Parsed::Value(min), Parsed::Value(max)) = (min_stock, max_stock) {
        if min > max {
            errors.push(MIN_ABOVE_MAX);
        }
    }

    let unit = match parse_field::<UnitOfMeasure>(&draft.unit) {
        Parsed::Blank => None,
        Parsed::Invalid => {
            errors.push(UNIT_INVALID);
            None
        }
        Parsed::Value(unit) => Some(unit),
    };

    let expiration_date = match optional_text(&draft.expiration_date) {
        None => None,
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(EXPIRATION_DATE_INVALID);
                None
            }
        },
    };

    let (Some(price), Some(stock), Some(warehouse_id)) = (price, stock, warehouse_id) else {
        return Err(ValidationErrors(errors.into_iter().map(String::from).collect()));
    };
    if !errors.is_empty() {
        return Err(ValidationErrors(errors.into_iter().map(String::from).collect()));
    }

    Ok(NewProduct {
        code: code.to_string(),
        name: name.to_string(),
        description: optional_text(&draft.description),
        price,
        stock,
        min_stock: match min_stock {
            Parsed::Value(min) => min,
            _ => 0,
        },
        max_stock: match max_stock {
            Parsed::Value(max) => Some(max),
            _ => None,
        },
        category: optional_text(&draft.category),
        unit,
        expiration_date,
        warehouse_id,
    })
}
