//! Product models: the API record, the create-product payload and the raw form draft

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A product as returned by the inventory API
///
/// Everything but `codigo` and `nombre` may be absent or `null` on the wire;
/// rendering falls back to placeholders instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(
        rename = "precio",
        default,
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(rename = "cantidadStock", default)]
    pub stock: Option<i64>,
    #[serde(rename = "cantidadMinima", default)]
    pub min_stock: Option<i64>,
    #[serde(rename = "cantidadMaxima", default)]
    pub max_stock: Option<i64>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "unidadMedida", default)]
    pub unit: Option<String>,
    #[serde(rename = "almacenId", default)]
    pub warehouse_id: Option<i64>,
    #[serde(rename = "activo", default)]
    pub active: Option<bool>,
    /// Kept as text; the API has sent both plain dates and timestamps
    #[serde(rename = "fechaVencimiento", default)]
    pub expiration_date: Option<String>,
}

impl Product {
    /// Low stock: current stock at or below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.stock.unwrap_or(0), self.min_stock.unwrap_or(0))
    }

    /// A missing flag counts as active
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

pub fn is_low_stock(stock: i64, min_stock: i64) -> bool {
    stock <= min_stock
}

/// Request body of the create-product call
///
/// Optional fields serialize as `null` rather than being omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "cantidadStock")]
    pub stock: i64,
    #[serde(rename = "cantidadMinima")]
    pub min_stock: i64,
    #[serde(rename = "cantidadMaxima")]
    pub max_stock: Option<i64>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "unidadMedida")]
    pub unit: Option<UnitOfMeasure>,
    #[serde(rename = "fechaVencimiento")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(rename = "almacenId")]
    pub warehouse_id: i64,
}

/// Units of measure offered by the product form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnitOfMeasure {
    Unidad,
    Kg,
    Lt,
    Mt,
    Caja,
    Paquete,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 6] = [
        UnitOfMeasure::Unidad,
        UnitOfMeasure::Kg,
        UnitOfMeasure::Lt,
        UnitOfMeasure::Mt,
        UnitOfMeasure::Caja,
        UnitOfMeasure::Paquete,
    ];

    /// Value sent on the wire
    pub fn code(&self) -> &'static str {
        match self {
            UnitOfMeasure::Unidad => "Unidad",
            UnitOfMeasure::Kg => "Kg",
            UnitOfMeasure::Lt => "Lt",
            UnitOfMeasure::Mt => "Mt",
            UnitOfMeasure::Caja => "Caja",
            UnitOfMeasure::Paquete => "Paquete",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            UnitOfMeasure::Unidad => "Unidad",
            UnitOfMeasure::Kg => "Kilogramos",
            UnitOfMeasure::Lt => "Litros",
            UnitOfMeasure::Mt => "Metros",
            UnitOfMeasure::Caja => "Caja",
            UnitOfMeasure::Paquete => "Paquete",
        }
    }
}

impl std::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitOfMeasure::ALL
            .into_iter()
            .find(|unit| unit.code() == s)
            .ok_or(())
    }
}

/// Fields of the product form, named by their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Code,
    Name,
    Description,
    Price,
    Stock,
    MinStock,
    MaxStock,
    Category,
    Unit,
    ExpirationDate,
    WarehouseId,
}

impl DraftField {
    pub const ALL: [DraftField; 11] = [
        DraftField::Code,
        DraftField::Name,
        DraftField::Description,
        DraftField::Price,
        DraftField::Stock,
        DraftField::MinStock,
        DraftField::MaxStock,
        DraftField::Category,
        DraftField::Unit,
        DraftField::ExpirationDate,
        DraftField::WarehouseId,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Code => "codigo",
            DraftField::Name => "nombre",
            DraftField::Description => "descripcion",
            DraftField::Price => "precio",
            DraftField::Stock => "cantidadStock",
            DraftField::MinStock => "cantidadMinima",
            DraftField::MaxStock => "cantidadMaxima",
            DraftField::Category => "categoria",
            DraftField::Unit => "unidadMedida",
            DraftField::ExpirationDate => "fechaVencimiento",
            DraftField::WarehouseId => "almacenId",
        }
    }
}

/// Unknown form field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown product field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Raw text of the product form, exactly as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProductDraft {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: String,
    #[serde(rename = "cantidadStock")]
    pub stock: String,
    #[serde(rename = "cantidadMinima")]
    pub min_stock: String,
    #[serde(rename = "cantidadMaxima")]
    pub max_stock: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "unidadMedida")]
    pub unit: String,
    #[serde(rename = "fechaVencimiento")]
    pub expiration_date: String,
    #[serde(rename = "almacenId")]
    pub warehouse_id: String,
}

impl ProductDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Code => &self.code,
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
            DraftField::Stock => &self.stock,
            DraftField::MinStock => &self.min_stock,
            DraftField::MaxStock => &self.max_stock,
            DraftField::Category => &self.category,
            DraftField::Unit => &self.unit,
            DraftField::ExpirationDate => &self.expiration_date,
            DraftField::WarehouseId => &self.warehouse_id,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Code => &mut self.code,
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
            DraftField::Stock => &mut self.stock,
            DraftField::MinStock => &mut self.min_stock,
            DraftField::MaxStock => &mut self.max_stock,
            DraftField::Category => &mut self.category,
            DraftField::Unit => &mut self.unit,
            DraftField::ExpirationDate => &mut self.expiration_date,
            DraftField::WarehouseId => &mut self.warehouse_id,
        };
        *slot = value.into();
    }

    /// True when every field is back to its initial empty state
    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn reset(&mut self) {
        *self = ProductDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_tolerates_missing_fields() {
        let json = r#"{"codigo":"A1","nombre":"Widget"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.code, "A1");
        assert_eq!(product.price, None);
        assert_eq!(product.stock, None);
        assert!(product.is_active());
    }

    #[test]
    fn test_product_wire_names() {
        let json = r#"{
            "id": 10, "codigo": "A1", "nombre": "Widget", "descripcion": null,
            "precio": 1000, "cantidadStock": 2, "cantidadMinima": 5,
            "cantidadMaxima": 20, "categoria": "Herramientas", "unidadMedida": "Caja",
            "almacenId": 1, "activo": false, "fechaVencimiento": "2025-12-31"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(10));
        assert_eq!(product.price, Some(Decimal::from(1000)));
        assert_eq!(product.min_stock, Some(5));
        assert_eq!(product.max_stock, Some(20));
        assert_eq!(product.warehouse_id, Some(1));
        assert!(!product.is_active());
        assert_eq!(product.expiration_date.as_deref(), Some("2025-12-31"));
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(is_low_stock(2, 5));
        assert!(is_low_stock(5, 5));
        assert!(!is_low_stock(6, 5));
        assert!(is_low_stock(0, 0));
    }

    #[test]
    fn test_new_product_serializes_nulls() {
        let payload = NewProduct {
            code: "A1".to_string(),
            name: "Widget".to_string(),
            description: None,
            price: Decimal::from_str("10.5").unwrap(),
            stock: 3,
            min_stock: 0,
            max_stock: None,
            category: None,
            unit: Some(UnitOfMeasure::Kg),
            expiration_date: None,
            warehouse_id: 1,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["precio"], serde_json::json!(10.5));
        assert_eq!(value["cantidadMinima"], serde_json::json!(0));
        assert!(value["cantidadMaxima"].is_null());
        assert!(value["descripcion"].is_null());
        assert_eq!(value["unidadMedida"], serde_json::json!("Kg"));
        assert_eq!(value["almacenId"], serde_json::json!(1));
    }

    #[test]
    fn test_draft_field_names_round_trip() {
        for field in DraftField::ALL {
            assert_eq!(DraftField::from_str(field.name()), Ok(field));
        }
        assert!(DraftField::from_str("sku").is_err());
    }

    #[test]
    fn test_draft_set_and_reset() {
        let mut draft = ProductDraft::default();
        assert!(draft.is_empty());

        draft.set(DraftField::Price, "10.5");
        draft.set(DraftField::WarehouseId, "1");
        assert_eq!(draft.price, "10.5");
        assert_eq!(draft.get(DraftField::WarehouseId), "1");
        assert!(!draft.is_empty());

        draft.reset();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_unit_of_measure() {
        assert_eq!(UnitOfMeasure::from_str("Kg"), Ok(UnitOfMeasure::Kg));
        assert_eq!(UnitOfMeasure::Kg.label(), "Kilogramos");
        assert!(UnitOfMeasure::from_str("kg").is_err());
    }
}
