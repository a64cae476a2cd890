//! Construction material models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{mul_checked, validate_non_negative, validate_required, whole_quantity};

/// Quantities below this are reported as low stock
pub const LOW_STOCK_THRESHOLD: u32 = 100;

/// Unit of measure used when none is given
pub const DEFAULT_UNIT: &str = "unidades";

/// A material kept in stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    /// Free-form unit of measure (bolsas, tablones, ...)
    #[serde(rename = "unidad")]
    pub unit: String,
    /// Unit cost
    #[serde(rename = "costo")]
    pub cost: Decimal,
    #[serde(rename = "estado")]
    pub status: StockStatus,
    #[serde(rename = "proveedor")]
    pub supplier: String,
}

impl Material {
    /// Build a material from form input, assigning the given id
    pub fn create(id: u32, input: NewMaterial) -> Result<Self, ValidationError> {
        let name = validate_required("name", &input.name)?.to_string();
        let quantity = whole_quantity("quantity", input.quantity)?;
        validate_non_negative("cost", input.cost)?;

        let unit = match input.unit.trim() {
            "" => DEFAULT_UNIT.to_string(),
            unit => unit.to_string(),
        };

        let material = Self {
            id,
            name,
            quantity,
            unit,
            cost: input.cost,
            status: StockStatus::from_quantity(quantity),
            supplier: input.supplier.trim().to_string(),
        };
        material.value()?;
        Ok(material)
    }

    /// Stock value of this material (quantity x unit cost)
    pub fn value(&self) -> Result<Decimal, ValidationError> {
        mul_checked("value", Decimal::from(self.quantity), self.cost)
    }

    /// Set the quantity and recompute the stock status
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.status = StockStatus::from_quantity(quantity);
    }
}

/// Stock level of a material, derived from its quantity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    #[serde(rename = "En Stock")]
    InStock,
    #[serde(rename = "Stock Bajo")]
    LowStock,
    #[serde(rename = "Agotado")]
    Depleted,
}

impl StockStatus {
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::Depleted,
            q if q < LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "En Stock",
            StockStatus::LowStock => "Stock Bajo",
            StockStatus::Depleted => "Agotado",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input for creating a material
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMaterial {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: Decimal,
    #[serde(rename = "unidad")]
    pub unit: String,
    #[serde(rename = "costo")]
    pub cost: Decimal,
    #[serde(rename = "proveedor")]
    pub supplier: String,
}

impl Default for NewMaterial {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: Decimal::ZERO,
            unit: DEFAULT_UNIT.to_string(),
            cost: Decimal::ZERO,
            supplier: String::new(),
        }
    }
}

/// Partial update applied by the cached material store
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MaterialPatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "cantidad", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(rename = "unidad", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "costo", skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    #[serde(rename = "proveedor", skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl MaterialPatch {
    /// Merge the set fields into `material`. Nothing changes on error.
    pub fn apply(self, material: &mut Material) -> Result<(), ValidationError> {
        let mut updated = material.clone();
        if let Some(name) = &self.name {
            updated.name = validate_required("name", name)?.to_string();
        }
        if let Some(cost) = self.cost {
            validate_non_negative("cost", cost)?;
            updated.cost = cost;
        }
        if let Some(quantity) = self.quantity {
            updated.set_quantity(quantity);
        }
        if let Some(unit) = self.unit {
            updated.unit = unit;
        }
        if let Some(supplier) = self.supplier {
            updated.supplier = supplier;
        }
        updated.value()?;
        *material = updated;
        Ok(())
    }
}

/// Inline edit buffer for a material row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialEdit {
    pub quantity: Decimal,
}
