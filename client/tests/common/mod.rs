//! In-memory inventory API that records every call

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use inventory_client::{ClientError, ClientResult, InventoryApi};
use rust_decimal::Decimal;
use shared::{NewProduct, Product, Warehouse};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListWarehouses,
    ListProducts(i64),
    CreateProduct(NewProduct),
}

#[derive(Default)]
struct FakeState {
    warehouses: Vec<Warehouse>,
    warehouses_fail: bool,
    products: HashMap<i64, Vec<Product>>,
    products_fail: bool,
    create_error: Option<(u16, Option<String>)>,
    calls: Vec<Call>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouses(self, warehouses: Vec<Warehouse>) -> Self {
        self.state.lock().unwrap().warehouses = warehouses;
        self
    }

    pub fn failing_warehouses(self) -> Self {
        self.state.lock().unwrap().warehouses_fail = true;
        self
    }

    pub fn with_products(self, warehouse_id: i64, products: Vec<Product>) -> Self {
        self.state
            .lock()
            .unwrap()
            .products
            .insert(warehouse_id, products);
        self
    }

    pub fn set_products_failing(&self, fail: bool) {
        self.state.lock().unwrap().products_fail = fail;
    }

    pub fn reject_create(self, status: u16, message: Option<&str>) -> Self {
        self.state.lock().unwrap().create_error = Some((status, message.map(String::from)));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn created(&self) -> Vec<NewProduct> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateProduct(product) => Some(product),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }
}

fn unavailable() -> ClientError {
    ClientError::Server {
        status: 503,
        message: None,
    }
}

impl InventoryApi for FakeApi {
    async fn list_warehouses(&self) -> ClientResult<Vec<Warehouse>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListWarehouses);
        if state.warehouses_fail {
            return Err(unavailable());
        }
        Ok(state.warehouses.clone())
    }

    async fn list_products(&self, warehouse_id: i64) -> ClientResult<Vec<Product>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListProducts(warehouse_id));
        if state.products_fail {
            return Err(unavailable());
        }
        Ok(state
            .products
            .get(&warehouse_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_product(&self, product: &NewProduct) -> ClientResult<Product> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateProduct(product.clone()));
        if let Some((status, message)) = state.create_error.clone() {
            return Err(ClientError::Server { status, message });
        }
        Ok(stored(product, state.calls.len() as i64))
    }
}

fn stored(product: &NewProduct, id: i64) -> Product {
    Product {
        id: Some(id),
        code: product.code.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        price: Some(product.price),
        stock: Some(product.stock),
        min_stock: Some(product.min_stock),
        max_stock: product.max_stock,
        category: product.category.clone(),
        unit: product.unit.map(|u| u.code().to_string()),
        warehouse_id: Some(product.warehouse_id),
        active: Some(true),
        expiration_date: product.expiration_date.map(|d| d.to_string()),
    }
}

pub fn warehouse(id: i64, name: &str, city: &str) -> Warehouse {
    Warehouse {
        id,
        name: name.to_string(),
        city: Some(city.to_string()),
    }
}

pub fn product(code: &str, price: i64, stock: i64, min_stock: i64) -> Product {
    Product {
        id: None,
        code: code.to_string(),
        name: "Widget".to_string(),
        description: None,
        price: Some(Decimal::from(price)),
        stock: Some(stock),
        min_stock: Some(min_stock),
        max_stock: None,
        category: None,
        unit: None,
        warehouse_id: Some(1),
        active: Some(true),
        expiration_date: None,
    }
}
