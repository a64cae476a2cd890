//! Stock movement ("movimiento") models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{mul_checked, optional_text, validate_non_negative, validate_required};

/// A stock movement. Materials and works are referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub id: u32,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "tipo")]
    pub kind: MovementKind,
    pub material: String,
    /// Signed quantity: negative for exits, positive for entries
    #[serde(rename = "cantidad")]
    pub quantity: Decimal,
    /// Unit cost
    #[serde(rename = "costo")]
    pub cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obra: Option<String>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(rename = "nota", default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Movement {
    /// Build a movement from form input; a missing date falls back to `today`
    pub fn create(id: u32, input: NewMovement, today: NaiveDate) -> Result<Self, ValidationError> {
        let material = validate_required("material", &input.material)?.to_string();
        validate_non_negative("cost", input.cost)?;

        let movement = Self {
            id,
            date: input.date.unwrap_or(today),
            kind: input.kind,
            material,
            quantity: input.kind.normalize(input.quantity),
            cost: input.cost,
            obra: optional_text(&input.obra),
            user: optional_text(&input.user),
            note: optional_text(&input.note),
        };
        movement.value()?;
        Ok(movement)
    }

    pub fn is_entry(&self) -> bool {
        self.quantity > Decimal::ZERO
    }

    pub fn is_exit(&self) -> bool {
        self.quantity < Decimal::ZERO
    }

    /// Unsigned value of the movement (|quantity| x unit cost)
    pub fn value(&self) -> Result<Decimal, ValidationError> {
        mul_checked("value", self.quantity.abs(), self.cost)
    }
}

/// Kind of stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MovementKind {
    #[default]
    #[serde(rename = "Entrada")]
    Entry,
    #[serde(rename = "Salida")]
    Exit,
    #[serde(rename = "Ajuste")]
    Adjustment,
    #[serde(rename = "Transferencia")]
    Transfer,
}

impl MovementKind {
    pub const ALL: [MovementKind; 4] = [
        MovementKind::Entry,
        MovementKind::Exit,
        MovementKind::Adjustment,
        MovementKind::Transfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Entry => "Entrada",
            MovementKind::Exit => "Salida",
            MovementKind::Adjustment => "Ajuste",
            MovementKind::Transfer => "Transferencia",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Apply the sign convention of this kind to an input quantity.
    /// Exits are always negative and entries always positive; adjustments and
    /// transfers keep the sign they were given.
    pub fn normalize(&self, quantity: Decimal) -> Decimal {
        match self {
            MovementKind::Exit if quantity > Decimal::ZERO => -quantity,
            MovementKind::Entry => quantity.abs(),
            _ => quantity,
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input for recording a movement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewMovement {
    #[serde(rename = "fecha", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "tipo", default)]
    pub kind: MovementKind,
    pub material: String,
    #[serde(rename = "cantidad")]
    pub quantity: Decimal,
    #[serde(rename = "costo")]
    pub cost: Decimal,
    #[serde(default)]
    pub obra: String,
    #[serde(rename = "usuario", default)]
    pub user: String,
    #[serde(rename = "nota", default)]
    pub note: String,
}

impl NewMovement {
    /// Empty form dated `date`
    pub fn dated(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }
}

/// Inline edit buffer for a movement row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementEdit {
    pub quantity: Decimal,
    pub cost: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sign_convention() {
        let twenty = Decimal::from(20);
        assert_eq!(MovementKind::Exit.normalize(twenty), -twenty);
        assert_eq!(MovementKind::Exit.normalize(-twenty), -twenty);
        assert_eq!(MovementKind::Entry.normalize(-twenty), twenty);
        assert_eq!(MovementKind::Adjustment.normalize(-twenty), -twenty);
        assert_eq!(MovementKind::Transfer.normalize(twenty), twenty);
    }

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in MovementKind::ALL {
            assert_eq!(MovementKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(MovementKind::from_label("Devolucion"), None);
    }

    #[test]
    fn test_create_defaults_date_and_blanks() {
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let movement = Movement::create(
            5,
            NewMovement {
                kind: MovementKind::Exit,
                material: " Cemento ".to_string(),
                quantity: Decimal::from(20),
                cost: Decimal::from(10),
                obra: "  ".to_string(),
                ..NewMovement::default()
            },
            today,
        )
        .unwrap();

        assert_eq!(movement.date, today);
        assert_eq!(movement.material, "Cemento");
        assert_eq!(movement.quantity, Decimal::from(-20));
        assert_eq!(movement.obra, None);
        assert_eq!(movement.value(), Ok(Decimal::from(200)));
    }

    #[test]
    fn test_create_rejects_negative_cost() {
        let result = Movement::create(
            1,
            NewMovement {
                material: "Cemento".to_string(),
                cost: Decimal::from(-1),
                ..NewMovement::default()
            },
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        );
        assert_eq!(result, Err(ValidationError::Negative { field: "cost" }));
    }

    #[test]
    fn test_create_rejects_unrepresentable_value() {
        let result = Movement::create(
            1,
            NewMovement {
                material: "Cemento".to_string(),
                quantity: Decimal::from(-10),
                cost: Decimal::MAX,
                ..NewMovement::default()
            },
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        );
        assert_eq!(result, Err(ValidationError::OutOfRange { field: "value" }));
    }
}
