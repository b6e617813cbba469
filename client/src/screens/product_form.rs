//! Product form: collect, validate and submit a new product

use shared::{prepare_new_product, DraftField, FormMessage, Product, ProductDraft, Warehouse};

use crate::api::InventoryApi;

pub const LOAD_WAREHOUSES_FAILED: &str = "Error al cargar los almacenes";
pub const PRODUCT_CREATED: &str = "Producto agregado exitosamente";
pub const CREATE_PRODUCT_FAILED: &str = "Error al agregar el producto";

/// State of the add-product screen
pub struct ProductForm<A> {
    api: A,
    warehouses: Vec<Warehouse>,
    draft: ProductDraft,
    submitting: bool,
    message: Option<FormMessage>,
}

impl<A: InventoryApi> ProductForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            warehouses: Vec::new(),
            draft: ProductDraft::default(),
            submitting: false,
            message: None,
        }
    }

    /// Load the warehouse options
    pub async fn mount(&mut self) {
        match self.api.list_warehouses().await {
            Ok(warehouses) => self.warehouses = warehouses,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load warehouses");
                self.message = Some(FormMessage::error(LOAD_WAREHOUSES_FAILED));
            }
        }
    }

    /// Store a raw field value; nothing is validated while typing
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate the draft and create the product
    ///
    /// Returns the created product on success. Validation failures never
    /// reach the API.
    pub async fn submit(&mut self) -> Option<Product> {
        let payload = match prepare_new_product(&self.draft) {
            Ok(payload) => payload,
            Err(errors) => {
                tracing::debug!(violations = errors.messages().len(), "Product form rejected");
                self.message = Some(FormMessage::error(errors.to_string()));
                return None;
            }
        };

        self.submitting = true;
        self.message = None;

        let outcome = match self.api.create_product(&payload).await {
            Ok(product) => {
                tracing::info!(code = %product.code, "Product created");
                self.message = Some(FormMessage::success(PRODUCT_CREATED));
                self.draft.reset();
                Some(product)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create product");
                self.message = Some(FormMessage::error(e.user_message(CREATE_PRODUCT_FAILED)));
                None
            }
        };

        self.submitting = false;
        outcome
    }

    /// Reset every field without calling the API
    pub fn clear(&mut self) {
        self.draft.reset();
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}
