//! WebAssembly module for the Obras Inventory platform
//!
//! Provides client-side computation for:
//! - Stock status and movement sign rules
//! - Inventory, budget and movement totals over JSON lists
//! - The materials page controller, with `window.confirm` before deletes

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::totals::*;
pub use shared::types::*;
use shared::validation::finite_decimal;
use shared::MaterialsPage;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("Obras Inventory WASM module initialized"));
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Stock status label for a quantity ("En Stock", "Stock Bajo", "Agotado")
#[wasm_bindgen]
pub fn stock_status(quantity: u32) -> String {
    StockStatus::from_quantity(quantity).label().to_string()
}

/// Apply the sign convention of a movement type ("Entrada", "Salida", ...).
/// Returns `undefined` for an unknown type or a non-finite quantity.
#[wasm_bindgen]
pub fn normalize_movement_quantity(kind: &str, quantity: f64) -> Option<f64> {
    let kind = MovementKind::from_label(kind)?;
    let quantity = finite_decimal("quantity", quantity).ok()?;
    Some(to_f64(kind.normalize(quantity)))
}

/// Total stock value of a JSON array of materials
#[wasm_bindgen]
pub fn calculate_inventory_value(materials_json: &str) -> Result<f64, JsValue> {
    let materials: Vec<Material> = serde_json::from_str(materials_json)
        .map_err(|e| js_error(format!("Invalid materials JSON: {}", e)))?;
    inventory_value(&materials).map(to_f64).map_err(js_error)
}

/// Budget, spent and balance of a JSON array of works, as JSON
#[wasm_bindgen]
pub fn calculate_obra_totals(obras_json: &str) -> Result<String, JsValue> {
    let obras: Vec<Obra> = serde_json::from_str(obras_json)
        .map_err(|e| js_error(format!("Invalid obras JSON: {}", e)))?;
    let totals = ObraTotals::compute(&obras).map_err(js_error)?;
    serde_json::to_string(&totals).map_err(js_error)
}

/// Entry/exit totals of a JSON array of movements, as JSON
#[wasm_bindgen]
pub fn calculate_movement_totals(movements_json: &str) -> Result<String, JsValue> {
    let movements: Vec<Movement> = serde_json::from_str(movements_json)
        .map_err(|e| js_error(format!("Invalid movements JSON: {}", e)))?;
    let totals = MovementTotals::compute(&movements).map_err(js_error)?;
    serde_json::to_string(&totals).map_err(js_error)
}

/// Asks through `window.confirm`; declines when there is no window
struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.confirm_with_message(message).unwrap_or(false),
            None => {
                web_sys::console::warn_1(&JsValue::from_str("No window available for confirm()"));
                false
            }
        }
    }
}

/// Materials page for JavaScript hosts
#[wasm_bindgen]
pub struct MaterialsController {
    page: MaterialsPage,
}

impl Default for MaterialsController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl MaterialsController {
    /// Controller preloaded with the demo materials
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            page: MaterialsPage::with_demo_data(),
        }
    }

    pub fn set_search(&mut self, query: &str) {
        self.page.set_search(query);
    }

    /// Filtered materials as a JSON array
    pub fn filtered_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.page.filtered()).map_err(js_error)
    }

    /// Ids of the filtered materials, in display order
    pub fn filtered_ids(&self) -> Vec<u32> {
        self.page.filtered().iter().map(|m| m.id).collect()
    }

    /// Stock value of the filtered view
    pub fn inventory_value(&self) -> Result<f64, JsValue> {
        self.page.inventory_value().map(to_f64).map_err(js_error)
    }

    /// Add a material, returning its new id
    pub fn add(
        &mut self,
        name: &str,
        quantity: f64,
        unit: &str,
        cost: f64,
        supplier: &str,
    ) -> Result<u32, JsValue> {
        let input = NewMaterial {
            name: name.to_string(),
            quantity: finite_decimal("quantity", quantity).map_err(js_error)?,
            unit: unit.to_string(),
            cost: finite_decimal("cost", cost).map_err(js_error)?,
            supplier: supplier.to_string(),
        };
        self.page.add(input).map(|m| m.id).map_err(js_error)
    }

    pub fn begin_edit(&mut self, id: u32) -> Result<(), JsValue> {
        self.page.begin_edit(id).map_err(js_error)
    }

    pub fn editing_id(&self) -> Option<u32> {
        self.page.editing_id()
    }

    /// Update the buffered quantity; non-finite input is ignored
    pub fn set_edit_quantity(&mut self, quantity: f64) -> bool {
        match (self.page.buffer_mut(), finite_decimal("quantity", quantity)) {
            (Some(buffer), Ok(quantity)) => {
                buffer.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Save the buffered quantity; returns whether it was accepted
    pub fn commit_edit(&mut self) -> bool {
        self.page.commit_edit().is_ok()
    }

    pub fn cancel_edit(&mut self) {
        self.page.cancel_edit();
    }

    /// Delete after asking the user; returns whether the material was removed
    pub fn delete(&mut self, id: u32) -> Result<bool, JsValue> {
        self.page.delete(id, &BrowserConfirm).map_err(js_error)
    }
}
