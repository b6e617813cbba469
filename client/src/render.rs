//! Plain-text rendering of the screens for the terminal front end

use shared::{DraftField, FormMessage, MessageKind, ProductDraft, ProductRow, Warehouse};

use crate::screens::InventoryView;
use crate::shell::Tab;

pub const LOW_STOCK_MARKER: &str = "*";
pub const EMPTY_NOTICE: &str = "No hay productos registrados en este almacén";
pub const LOADING_NOTICE: &str = "Cargando productos...";
pub const SAVING_NOTICE: &str = "Guardando...";

const HEADERS: [&str; 12] = [
    "", "Código", "Nombre", "Descripción", "Categoría", "Precio", "Stock", "Mín", "Máx",
    "Unidad", "Estado", "Vence",
];

/// Tab bar with the active tab in brackets
pub fn render_tabs(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_warehouses(warehouses: &[Warehouse], selected: Option<i64>) -> String {
    if warehouses.is_empty() {
        return "Sin almacenes disponibles".to_string();
    }
    warehouses
        .iter()
        .map(|w| {
            let mark = if Some(w.id) == selected { ">" } else { " " };
            format!("{} {}) {}", mark, w.id, w.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_message(message: &FormMessage) -> String {
    match message.kind {
        MessageKind::Success => format!("[OK] {}", message.text),
        MessageKind::Error => format!("[ERROR] {}", message.text),
    }
}

pub fn render_inventory(view: &InventoryView) -> String {
    let mut out = vec![
        "Inventario por Almacén".to_string(),
        render_warehouses(&view.warehouses, view.selected_warehouse),
    ];

    if let Some(error) = &view.error {
        out.push(render_message(&FormMessage::error(error.as_str())));
    }
    if view.loading {
        out.push(LOADING_NOTICE.to_string());
    }

    if !view.rows.is_empty() {
        out.push(render_table(&view.rows));
        out.push(format!(
            "Total de productos: {} | Productos con stock bajo: {}",
            view.summary.total_products, view.summary.low_stock_products
        ));
        if view.summary.low_stock_products > 0 {
            out.push(format!("{} Stock bajo", LOW_STOCK_MARKER));
        }
    } else if view.show_empty_notice {
        out.push(EMPTY_NOTICE.to_string());
    }

    out.join("\n")
}

fn row_cells(row: &ProductRow) -> [&str; 12] {
    [
        if row.low_stock { LOW_STOCK_MARKER } else { "" },
        row.code.as_str(),
        row.name.as_str(),
        row.description.as_str(),
        row.category.as_str(),
        row.price.as_str(),
        row.stock.as_str(),
        row.min_stock.as_str(),
        row.max_stock.as_str(),
        row.unit.as_str(),
        row.status.as_str(),
        row.expiration_date.as_str(),
    ]
}

fn render_table(rows: &[ProductRow]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row_cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 12]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![line(HEADERS)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|row| line(row_cells(row))));
    lines.join("\n")
}

pub fn render_product_form(
    warehouses: &[Warehouse],
    draft: &ProductDraft,
    submitting: bool,
    message: Option<&FormMessage>,
) -> String {
    let mut out = vec!["Agregar Nuevo Producto".to_string()];
    if let Some(message) = message {
        out.push(render_message(message));
    }

    for field in DraftField::ALL {
        out.push(format!("  {}: {}", field.name(), draft.get(field)));
    }

    out.push("Almacenes:".to_string());
    let selected = draft.warehouse_id.trim().parse().ok();
    out.push(render_warehouses(warehouses, selected));

    if submitting {
        out.push(SAVING_NOTICE.to_string());
    }
    out.join("\n")
}
