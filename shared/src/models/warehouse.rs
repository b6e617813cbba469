//! Warehouse reference data

use serde::{Deserialize, Serialize};

/// A physical stock location (almacén)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warehouse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ciudad", default)]
    pub city: Option<String>,
}

impl Warehouse {
    /// Label used in warehouse pickers, e.g. "Centro - Bogotá"
    pub fn label(&self) -> String {
        match self.city.as_deref().map(str::trim) {
            Some(city) if !city.is_empty() => format!("{} - {}", self.name, city),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{"id":1,"nombre":"Centro","ciudad":"Bogotá"}"#;
        let warehouse: Warehouse = serde_json::from_str(json).unwrap();
        assert_eq!(warehouse.id, 1);
        assert_eq!(warehouse.name, "Centro");
        assert_eq!(warehouse.city.as_deref(), Some("Bogotá"));
    }

    #[test]
    fn test_label() {
        let mut warehouse = Warehouse {
            id: 1,
            name: "Centro".to_string(),
            city: Some("Bogotá".to_string()),
        };
        assert_eq!(warehouse.label(), "Centro - Bogotá");

        warehouse.city = None;
        assert_eq!(warehouse.label(), "Centro");
    }
}
