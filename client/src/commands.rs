//! Line commands of the terminal front end

use std::str::FromStr;

use shared::DraftField;

use crate::api::InventoryApi;
use crate::render;
use crate::shell::{Screen, Shell, Tab};

pub const HELP: &str = "\
Comandos:
  inventario                 pestaña Consultar Inventario
  producto                   pestaña Agregar Producto
  almacenes                  mostrar la pantalla actual
  seleccionar [id]           elegir almacén (sin id: ninguno)
  consultar                  consultar productos del almacén
  campo <nombre> <valor>     editar un campo del formulario
  enviar                     agregar el producto
  limpiar                    vaciar el formulario
  ayuda                      esta ayuda
  salir                      terminar";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchTab(Tab),
    Show,
    Select(Option<i64>),
    Consult,
    SetField(DraftField, String),
    Submit,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        if let Ok(tab) = Tab::from_str(name) {
            return Ok(Command::SwitchTab(tab));
        }

        match name {
            "almacenes" => Ok(Command::Show),
            "seleccionar" if rest.is_empty() => Ok(Command::Select(None)),
            "seleccionar" => rest
                .parse()
                .map(|id| Command::Select(Some(id)))
                .map_err(|_| format!("Almacén no válido: {}", rest)),
            "consultar" => Ok(Command::Consult),
            "campo" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field = DraftField::from_str(field).map_err(|e| e.to_string())?;
                Ok(Command::SetField(field, value.trim().to_string()))
            }
            "enviar" => Ok(Command::Submit),
            "limpiar" => Ok(Command::Clear),
            "ayuda" | "" => Ok(Command::Help),
            "salir" => Ok(Command::Quit),
            other => Err(format!("Comando desconocido: {}", other)),
        }
    }
}

/// Run one command against the shell and return the text to print
pub async fn execute<A: InventoryApi + Clone>(shell: &mut Shell<A>, command: Command) -> String {
    match command {
        Command::SwitchTab(tab) => shell.switch_to(tab).await,
        Command::Show => {}
        Command::Select(id) => match shell.inventory_mut() {
            Some(viewer) => viewer.select_warehouse(id),
            None => return wrong_tab(Tab::Inventory),
        },
        Command::Consult => match shell.inventory_mut() {
            Some(viewer) => viewer.consult().await,
            None => return wrong_tab(Tab::Inventory),
        },
        Command::SetField(field, value) => match shell.product_form_mut() {
            Some(form) => form.set_field(field, value),
            None => return wrong_tab(Tab::AddProduct),
        },
        Command::Submit => match shell.product_form_mut() {
            Some(form) => {
                form.submit().await;
            }
            None => return wrong_tab(Tab::AddProduct),
        },
        Command::Clear => match shell.product_form_mut() {
            Some(form) => form.clear(),
            None => return wrong_tab(Tab::AddProduct),
        },
        Command::Help => return HELP.to_string(),
        Command::Quit => return String::new(),
    }
    render_active(shell)
}

/// Render the tab bar and the mounted screen
pub fn render_active<A: InventoryApi>(shell: &Shell<A>) -> String {
    let body = match shell.screen() {
        Screen::Inventory(viewer) => render::render_inventory(&viewer.view()),
        Screen::AddProduct(form) => render::render_product_form(
            form.warehouses(),
            form.draft(),
            form.is_submitting(),
            form.message(),
        ),
    };
    format!("{}\n\n{}", render::render_tabs(shell.screen().tab()), body)
}

fn wrong_tab(tab: Tab) -> String {
    format!(
        "Comando disponible en la pestaña {} (use '{}')",
        tab.title(),
        tab.command()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("inventario".parse(), Ok(Command::SwitchTab(Tab::Inventory)));
        assert_eq!("producto".parse(), Ok(Command::SwitchTab(Tab::AddProduct)));
        assert_eq!("seleccionar 3".parse(), Ok(Command::Select(Some(3))));
        assert_eq!("seleccionar".parse(), Ok(Command::Select(None)));
        assert_eq!(" consultar ".parse(), Ok(Command::Consult));
        assert_eq!("".parse(), Ok(Command::Help));
        assert_eq!("salir".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_field_keeps_inner_spaces() {
        assert_eq!(
            "campo descripcion Caja de 12 unidades".parse(),
            Ok(Command::SetField(
                DraftField::Description,
                "Caja de 12 unidades".to_string()
            ))
        );
        assert_eq!(
            "campo cantidadMaxima".parse(),
            Ok(Command::SetField(DraftField::MaxStock, String::new()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("seleccionar centro".parse::<Command>().is_err());
        assert!("campo sku A1".parse::<Command>().is_err());
        assert!("borrar".parse::<Command>().is_err());
    }
}
