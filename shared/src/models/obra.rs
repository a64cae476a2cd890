//! Construction work ("obra") models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{sub_checked, validate_budget, validate_required};

/// A construction project or site with a budget and what has been spent on it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Obra {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "estado")]
    pub status: ObraStatus,
    #[serde(rename = "presupuesto")]
    pub budget: Decimal,
    #[serde(rename = "gastado")]
    pub spent: Decimal,
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fechaFin", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Obra {
    pub fn create(id: u32, input: NewObra) -> Result<Self, ValidationError> {
        let name = validate_required("name", &input.name)?.to_string();
        validate_budget(input.budget, input.spent)?;

        Ok(Self {
            id,
            name,
            location: input.location.trim().to_string(),
            responsible: input.responsible.trim().to_string(),
            status: input.status,
            budget: input.budget,
            spent: input.spent,
            start_date: input.start_date,
            end_date: input.end_date,
        })
    }

    /// Budget left (budget - spent)
    pub fn balance(&self) -> Result<Decimal, ValidationError> {
        sub_checked("balance", self.budget, self.spent)
    }
}

/// Work status. Set by hand, never transitioned automatically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ObraStatus {
    #[default]
    #[serde(rename = "Activa")]
    Active,
    #[serde(rename = "Pausada")]
    Paused,
    #[serde(rename = "Finalizada")]
    Finished,
}

impl ObraStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ObraStatus::Active => "Activa",
            ObraStatus::Paused => "Pausada",
            ObraStatus::Finished => "Finalizada",
        }
    }
}

impl std::fmt::Display for ObraStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input for creating a work
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewObra {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "estado")]
    pub status: ObraStatus,
    #[serde(rename = "presupuesto")]
    pub budget: Decimal,
    #[serde(rename = "gastado")]
    pub spent: Decimal,
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fechaFin", default)]
    pub end_date: Option<NaiveDate>,
}

impl NewObra {
    /// Empty form starting on `start_date`
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            responsible: String::new(),
            status: ObraStatus::Active,
            budget: Decimal::ZERO,
            spent: Decimal::ZERO,
            start_date,
            end_date: None,
        }
    }
}

impl Default for NewObra {
    fn default() -> Self {
        Self::starting(crate::types::today())
    }
}

/// Inline edit buffer for a work row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObraEdit {
    pub budget: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_rejects_overspent() {
        let input = NewObra {
            name: "Puente".to_string(),
            budget: Decimal::from(100),
            spent: Decimal::from(150),
            ..NewObra::starting(date(2025, 1, 1))
        };
        assert_eq!(Obra::create(1, input), Err(ValidationError::SpentExceedsBudget));
    }

    #[test]
    fn test_balance() {
        let obra = Obra::create(
            1,
            NewObra {
                name: "Puente".to_string(),
                budget: Decimal::from(1000),
                spent: Decimal::from(250),
                ..NewObra::starting(date(2025, 1, 1))
            },
        )
        .unwrap();
        assert_eq!(obra.balance(), Ok(Decimal::from(750)));
    }

    #[test]
    fn test_end_date_is_optional_in_json() {
        let json = serde_json::json!({
            "id": 2,
            "nombre": "Colegio San Pedro",
            "ubicacion": "Santiago de Surco",
            "responsable": "Arq. Salazar",
            "estado": "Pausada",
            "presupuesto": 800000,
            "gastado": 420000,
            "fechaInicio": "2025-03-10"
        });
        let obra: Obra = serde_json::from_value(json).unwrap();
        assert_eq!(obra.status, ObraStatus::Paused);
        assert_eq!(obra.end_date, None);
    }
}
