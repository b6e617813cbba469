//! Inventory viewer: pick a warehouse and list its products

use shared::{InventorySummary, Product, ProductRow, Warehouse};

use crate::api::InventoryApi;

pub const LOAD_WAREHOUSES_FAILED: &str = "Error al cargar los almacenes";
pub const WAREHOUSE_NOT_SELECTED: &str = "Debe seleccionar un almacén";
pub const LOAD_PRODUCTS_FAILED: &str = "Error al consultar los productos";

/// State of the inventory screen
pub struct InventoryViewer<A> {
    api: A,
    warehouses: Vec<Warehouse>,
    selected_warehouse: Option<i64>,
    products: Vec<Product>,
    loading: bool,
    error: Option<String>,
    /// Set once a consult for the current selection has returned
    consulted: bool,
}

/// Everything the inventory screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub warehouses: Vec<Warehouse>,
    pub selected_warehouse: Option<i64>,
    pub rows: Vec<ProductRow>,
    pub summary: InventorySummary,
    pub loading: bool,
    pub error: Option<String>,
    /// "No products" notice: selection consulted, idle, no error, empty result
    pub show_empty_notice: bool,
}

impl<A: InventoryApi> InventoryViewer<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            warehouses: Vec::new(),
            selected_warehouse: None,
            products: Vec::new(),
            loading: false,
            error: None,
            consulted: false,
        }
    }

    /// Load the warehouse list
    pub async fn mount(&mut self) {
        match self.api.list_warehouses().await {
            Ok(warehouses) => self.warehouses = warehouses,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load warehouses");
                self.warehouses.clear();
                self.error = Some(LOAD_WAREHOUSES_FAILED.to_string());
            }
        }
    }

    /// Store a new selection, dropping the previous results and error
    pub fn select_warehouse(&mut self, warehouse_id: Option<i64>) {
        self.selected_warehouse = warehouse_id;
        self.products.clear();
        self.error = None;
        self.consulted = false;
    }

    /// Fetch the products of the selected warehouse
    pub async fn consult(&mut self) {
        let Some(warehouse_id) = self.selected_warehouse else {
            self.error = Some(WAREHOUSE_NOT_SELECTED.to_string());
            return;
        };

        self.loading = true;
        self.error = None;

        match self.api.list_products(warehouse_id).await {
            Ok(products) => {
                tracing::debug!(warehouse_id, count = products.len(), "Products loaded");
                self.products = products;
                self.error = None;
                self.consulted = true;
            }
            Err(e) => {
                tracing::error!(warehouse_id, error = %e, "Failed to load products");
                self.products.clear();
                self.consulted = false;
                self.error = Some(LOAD_PRODUCTS_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn selected_warehouse(&self) -> Option<i64> {
        self.selected_warehouse
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> InventoryView {
        InventoryView {
            warehouses: self.warehouses.clone(),
            selected_warehouse: self.selected_warehouse,
            rows: self.products.iter().map(ProductRow::from).collect(),
            summary: InventorySummary::from_products(&self.products),
            loading: self.loading,
            error: self.error.clone(),
            show_empty_notice: self.selected_warehouse.is_some()
                && self.consulted
                && !self.loading
                && self.error.is_none()
                && self.products.is_empty(),
        }
    }
}
