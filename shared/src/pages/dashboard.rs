//! Dashboard counters built from the live pages

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MaterialsPage, MovementsPage, ObrasPage};
use crate::error::ValidationError;
use crate::totals::inventory_value;

/// Headline figures of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub materials: usize,
    pub obras: usize,
    pub active_obras: usize,
    pub movements: usize,
    /// Stock value of every material, ignoring any search
    pub inventory_value: Decimal,
}

impl DashboardSummary {
    pub fn collect(
        materials: &MaterialsPage,
        obras: &ObrasPage,
        movements: &MovementsPage,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            materials: materials.materials().len(),
            obras: obras.obras().len(),
            active_obras: obras.active_count(),
            movements: movements.movements().len(),
            inventory_value: inventory_value(materials.materials())?,
        })
    }
}
