//! Derived totals shown under each list
//!
//! These are plain reductions over whatever records are passed in, usually
//! the filtered view of a page. Nothing is cached. Sums that do not fit in a
//! `Decimal` are reported as `ValidationError::OutOfRange`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::{Material, Movement, Obra};
use crate::validation::{add_checked, sub_checked};

fn sum_checked(
    field: &'static str,
    amounts: impl IntoIterator<Item = Result<Decimal, ValidationError>>,
) -> Result<Decimal, ValidationError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| add_checked(field, total, amount?))
}

// ============================================================================
// Materials
// ============================================================================

/// Total stock value (sum of quantity x unit cost)
pub fn inventory_value<'a>(
    materials: impl IntoIterator<Item = &'a Material>,
) -> Result<Decimal, ValidationError> {
    sum_checked("inventory value", materials.into_iter().map(Material::value))
}

// ============================================================================
// Works
// ============================================================================

pub fn total_budget<'a>(obras: impl IntoIterator<Item = &'a Obra>) -> Result<Decimal, ValidationError> {
    sum_checked("budget", obras.into_iter().map(|o| Ok(o.budget)))
}

pub fn total_spent<'a>(obras: impl IntoIterator<Item = &'a Obra>) -> Result<Decimal, ValidationError> {
    sum_checked("spent", obras.into_iter().map(|o| Ok(o.spent)))
}

/// Budget totals of a list of works
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObraTotals {
    pub budget: Decimal,
    pub spent: Decimal,
    pub balance: Decimal,
}

impl ObraTotals {
    pub fn compute<'a>(obras: impl IntoIterator<Item = &'a Obra>) -> Result<Self, ValidationError> {
        let mut totals = Self::default();
        for o in obras {
            totals.budget = add_checked("budget", totals.budget, o.budget)?;
            totals.spent = add_checked("spent", totals.spent, o.spent)?;
        }
        totals.balance = sub_checked("balance", totals.budget, totals.spent)?;
        Ok(totals)
    }
}

// ============================================================================
// Movements
// ============================================================================

/// Sum of positive quantities
pub fn entries_quantity<'a>(
    movements: impl IntoIterator<Item = &'a Movement>,
) -> Result<Decimal, ValidationError> {
    sum_checked(
        "entries",
        movements.into_iter().filter(|m| m.is_entry()).map(|m| Ok(m.quantity)),
    )
}

/// Sum of the magnitudes of negative quantities
pub fn exits_quantity<'a>(
    movements: impl IntoIterator<Item = &'a Movement>,
) -> Result<Decimal, ValidationError> {
    sum_checked(
        "exits",
        movements.into_iter().filter(|m| m.is_exit()).map(|m| Ok(m.quantity.abs())),
    )
}

pub fn entries_value<'a>(
    movements: impl IntoIterator<Item = &'a Movement>,
) -> Result<Decimal, ValidationError> {
    sum_checked(
        "entries value",
        movements.into_iter().filter(|m| m.is_entry()).map(Movement::value),
    )
}

pub fn exits_value<'a>(
    movements: impl IntoIterator<Item = &'a Movement>,
) -> Result<Decimal, ValidationError> {
    sum_checked(
        "exits value",
        movements.into_iter().filter(|m| m.is_exit()).map(Movement::value),
    )
}

/// Entry/exit totals of a list of movements, by quantity and by value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementTotals {
    pub entries_quantity: Decimal,
    pub exits_quantity: Decimal,
    pub net_quantity: Decimal,
    pub entries_value: Decimal,
    pub exits_value: Decimal,
    pub net_value: Decimal,
}

impl MovementTotals {
    pub fn compute<'a>(
        movements: impl IntoIterator<Item = &'a Movement>,
    ) -> Result<Self, ValidationError> {
        let mut totals = Self::default();
        for m in movements {
            if m.is_entry() {
                totals.entries_quantity = add_checked("entries", totals.entries_quantity, m.quantity)?;
                totals.entries_value = add_checked("entries value", totals.entries_value, m.value()?)?;
            } else if m.is_exit() {
                totals.exits_quantity = add_checked("exits", totals.exits_quantity, m.quantity.abs())?;
                totals.exits_value = add_checked("exits value", totals.exits_value, m.value()?)?;
            }
        }
        totals.net_quantity = sub_checked("net quantity", totals.entries_quantity, totals.exits_quantity)?;
        totals.net_value = sub_checked("net value", totals.entries_value, totals.exits_value)?;
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;

    #[test]
    fn test_inventory_value_of_seed() {
        // 500*10 + 200*50 + 80*5
        assert_eq!(inventory_value(&seed::materials()), Ok(Decimal::from(15_400)));
    }

    #[test]
    fn test_empty_lists_total_zero() {
        let materials: Vec<Material> = Vec::new();
        let obras: Vec<Obra> = Vec::new();
        let movements: Vec<Movement> = Vec::new();
        assert_eq!(inventory_value(&materials), Ok(Decimal::ZERO));
        assert_eq!(ObraTotals::compute(&obras), Ok(ObraTotals::default()));
        assert_eq!(MovementTotals::compute(&movements), Ok(MovementTotals::default()));
    }

    #[test]
    fn test_obra_totals_of_seed() {
        let obras = seed::obras();
        let totals = ObraTotals::compute(&obras).unwrap();
        assert_eq!(totals.budget, Decimal::from(2_500_000));
        assert_eq!(totals.spent, Decimal::from(1_268_500));
        assert_eq!(totals.balance, Decimal::from(1_231_500));
        assert_eq!(
            total_budget(&obras).unwrap() - total_spent(&obras).unwrap(),
            totals.balance
        );
    }

    #[test]
    fn test_movement_totals_match_single_sums() {
        let movements = seed::movements();
        let totals = MovementTotals::compute(&movements).unwrap();
        assert_eq!(Ok(totals.entries_quantity), entries_quantity(&movements));
        assert_eq!(Ok(totals.exits_quantity), exits_quantity(&movements));
        assert_eq!(Ok(totals.entries_value), entries_value(&movements));
        assert_eq!(Ok(totals.exits_value), exits_value(&movements));
    }

    #[test]
    fn test_inventory_value_overflow_is_an_error() {
        let huge = Decimal::from_i128_with_scale(40_000_000_000_000_000_000_000_000_000, 0);
        let mut materials = seed::materials();
        materials[0].quantity = 1;
        materials[0].cost = huge;
        materials[1].quantity = 1;
        materials[1].cost = huge;

        assert!(materials[0].value().is_ok());
        assert_eq!(
            inventory_value(&materials),
            Err(ValidationError::OutOfRange { field: "inventory value" })
        );
    }

    #[test]
    fn test_stored_value_overflow_is_an_error() {
        // Records read back from storage skip create-time validation
        let mut materials = seed::materials();
        materials[2].cost = Decimal::MAX;
        assert_eq!(
            inventory_value(&materials),
            Err(ValidationError::OutOfRange { field: "value" })
        );
    }

    #[test]
    fn test_obra_totals_overflow_is_an_error() {
        let mut obras = seed::obras();
        obras[0].budget = Decimal::MAX;
        obras[1].budget = Decimal::MAX;
        assert_eq!(
            ObraTotals::compute(&obras),
            Err(ValidationError::OutOfRange { field: "budget" })
        );
    }

    #[test]
    fn test_movement_totals_overflow_is_an_error() {
        let mut movements = seed::movements();
        movements[0].quantity = Decimal::MAX;
        movements[0].cost = Decimal::ONE;
        movements[3].quantity = Decimal::MAX;
        movements[3].cost = Decimal::ONE;
        assert_eq!(
            MovementTotals::compute(&movements),
            Err(ValidationError::OutOfRange { field: "entries" })
        );
    }
}
