//! Two-tab shell hosting the inventory viewer and the product form

use std::str::FromStr;

use crate::api::InventoryApi;
use crate::screens::{InventoryViewer, ProductForm};

/// Tabs of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Inventory,
    AddProduct,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Inventory, Tab::AddProduct];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Inventory => "Consultar Inventario",
            Tab::AddProduct => "Agregar Producto",
        }
    }

    /// Command that activates the tab
    pub fn command(&self) -> &'static str {
        match self {
            Tab::Inventory => "inventario",
            Tab::AddProduct => "producto",
        }
    }
}

impl FromStr for Tab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.command() == s)
            .ok_or(())
    }
}

/// The mounted screen
pub enum Screen<A> {
    Inventory(InventoryViewer<A>),
    AddProduct(ProductForm<A>),
}

impl<A> Screen<A> {
    pub fn tab(&self) -> Tab {
        match self {
            Screen::Inventory(_) => Tab::Inventory,
            Screen::AddProduct(_) => Tab::AddProduct,
        }
    }
}

/// Application shell; owns exactly one mounted screen at a time
pub struct Shell<A> {
    api: A,
    screen: Screen<A>,
}

impl<A> Shell<A> {
    pub fn active_tab(&self) -> Tab {
        self.screen.tab()
    }

    pub fn screen(&self) -> &Screen<A> {
        &self.screen
    }
}

impl<A: InventoryApi + Clone> Shell<A> {
    /// Build the shell with the inventory tab mounted
    pub async fn start(api: A) -> Self {
        let screen = Self::mount(api.clone(), Tab::Inventory).await;
        Self { api, screen }
    }

    /// Activate `tab`, mounting a fresh screen; the active tab is left as is
    pub async fn switch_to(&mut self, tab: Tab) {
        if self.active_tab() == tab {
            return;
        }
        tracing::debug!(tab = tab.title(), "Switching tab");
        self.screen = Self::mount(self.api.clone(), tab).await;
    }

    async fn mount(api: A, tab: Tab) -> Screen<A> {
        match tab {
            Tab::Inventory => {
                let mut viewer = InventoryViewer::new(api);
                viewer.mount().await;
                Screen::Inventory(viewer)
            }
            Tab::AddProduct => {
                let mut form = ProductForm::new(api);
                form.mount().await;
                Screen::AddProduct(form)
            }
        }
    }

    pub fn inventory_mut(&mut self) -> Option<&mut InventoryViewer<A>> {
        match &mut self.screen {
            Screen::Inventory(viewer) => Some(viewer),
            Screen::AddProduct(_) => None,
        }
    }

    pub fn product_form_mut(&mut self) -> Option<&mut ProductForm<A>> {
        match &mut self.screen {
            Screen::AddProduct(form) => Some(form),
            Screen::Inventory(_) => None,
        }
    }
}
