//! Display formatting for inventory rows
//!
//! Amounts follow the es-CO convention (`$ 1.234,50`), dates render as
//! `dd/mm/yyyy`. Missing or malformed values fall back to labels instead of
//! failing.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::models::UnitOfMeasure;

pub const PLACEHOLDER: &str = "N/A";
pub const NO_CATEGORY: &str = "Sin categoría";
pub const DEFAULT_UNIT: &str = "Unidad";
pub const ACTIVE: &str = "Activo";
pub const INACTIVE: &str = "Inactivo";

/// Format an amount as local currency, rounded half away from zero to cents
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}$ {},{}", sign, grouped, cents)
}

pub fn format_price(price: Option<Decimal>) -> String {
    price
        .map(format_currency)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Parse the leading `YYYY-MM-DD` of a date or timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

pub fn format_expiration_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn category_label(category: Option<&str>) -> String {
    non_blank(category).unwrap_or(NO_CATEGORY).to_string()
}

/// Known units render with their long label, unknown codes verbatim
pub fn unit_label(unit: Option<&str>) -> String {
    match non_blank(unit) {
        Some(code) => UnitOfMeasure::from_str(code)
            .map(|unit| unit.label().to_string())
            .unwrap_or_else(|_| code.to_string()),
        None => DEFAULT_UNIT.to_string(),
    }
}

pub fn quantity_label(quantity: Option<i64>) -> String {
    quantity
        .map(|q| q.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn status_label(active: bool) -> &'static str {
    if active {
        ACTIVE
    } else {
        INACTIVE
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec("1000")), "$ 1.000,00");
        assert_eq!(format_currency(dec("10.5")), "$ 10,50");
        assert_eq!(format_currency(dec("0")), "$ 0,00");
        assert_eq!(format_currency(dec("1234567.891")), "$ 1.234.567,89");
        assert_eq!(format_currency(dec("999.995")), "$ 1.000,00");
        assert_eq!(format_currency(dec("-2500")), "-$ 2.500,00");
    }

    #[test]
    fn test_format_price_placeholder() {
        assert_eq!(format_price(None), PLACEHOLDER);
        assert_eq!(format_price(Some(dec("100"))), "$ 100,00");
    }

    #[test]
    fn test_format_expiration_date() {
        assert_eq!(format_expiration_date(Some("2025-12-31")), "31/12/2025");
        assert_eq!(
            format_expiration_date(Some("2025-01-05T00:00:00")),
            "05/01/2025"
        );
        assert_eq!(format_expiration_date(Some("mañana")), PLACEHOLDER);
        assert_eq!(format_expiration_date(None), PLACEHOLDER);
    }

    #[test]
    fn test_fallback_labels() {
        assert_eq!(category_label(None), NO_CATEGORY);
        assert_eq!(category_label(Some("  ")), NO_CATEGORY);
        assert_eq!(category_label(Some("Bebidas")), "Bebidas");

        assert_eq!(unit_label(None), DEFAULT_UNIT);
        assert_eq!(unit_label(Some("Lt")), "Litros");
        assert_eq!(unit_label(Some("Galón")), "Galón");

        assert_eq!(quantity_label(None), "-");
        assert_eq!(quantity_label(Some(7)), "7");

        assert_eq!(status_label(true), ACTIVE);
        assert_eq!(status_label(false), INACTIVE);
    }
}
