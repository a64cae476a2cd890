//! Demo records the pages start with

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Material, Movement, MovementKind, Obra, ObraStatus, StockStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Only called with the literal dates below
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn material(id: u32, name: &str, quantity: u32, unit: &str, cost: i64, supplier: &str) -> Material {
    Material {
        id,
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
        cost: Decimal::from(cost),
        status: StockStatus::from_quantity(quantity),
        supplier: supplier.to_string(),
    }
}

pub fn materials() -> Vec<Material> {
    vec![
        material(1, "Cemento", 500, "bolsas", 10, "Proveedor A"),
        material(2, "Vigas de Acero", 200, "unidades", 50, "Proveedor B"),
        material(3, "Madera", 80, "tablones", 5, "Proveedor C"),
    ]
}

pub fn obras() -> Vec<Obra> {
    vec![
        Obra {
            id: 1,
            name: "Edificio Miraflores".to_string(),
            location: "Miraflores, Lima".to_string(),
            responsible: "Ing. Quiroz".to_string(),
            status: ObraStatus::Active,
            budget: Decimal::from(1_200_000),
            spent: Decimal::from(350_000),
            start_date: date(2025, 5, 2),
            end_date: None,
        },
        Obra {
            id: 2,
            name: "Colegio San Pedro".to_string(),
            location: "Santiago de Surco".to_string(),
            responsible: "Arq. Salazar".to_string(),
            status: ObraStatus::Paused,
            budget: Decimal::from(800_000),
            spent: Decimal::from(420_000),
            start_date: date(2025, 3, 10),
            end_date: None,
        },
        Obra {
            id: 3,
            name: "Plaza de Huanchaco".to_string(),
            location: "Trujillo".to_string(),
            responsible: "Ing. Zamora".to_string(),
            status: ObraStatus::Finished,
            budget: Decimal::from(500_000),
            spent: Decimal::from(498_500),
            start_date: date(2024, 11, 15),
            end_date: Some(date(2025, 6, 30)),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn movement(
    id: u32,
    fecha: NaiveDate,
    kind: MovementKind,
    material: &str,
    quantity: i64,
    cost: i64,
    obra: &str,
    user: &str,
    note: &str,
) -> Movement {
    Movement {
        id,
        date: fecha,
        kind,
        material: material.to_string(),
        quantity: Decimal::from(quantity),
        cost: Decimal::from(cost),
        obra: Some(obra.to_string()),
        user: Some(user.to_string()),
        note: Some(note.to_string()),
    }
}

pub fn movements() -> Vec<Movement> {
    vec![
        movement(1, date(2025, 8, 20), MovementKind::Entry, "Cemento", 100, 10, "Edificio Miraflores", "renzo", "OC-1001"),
        movement(2, date(2025, 8, 21), MovementKind::Exit, "Cemento", -20, 10, "Edificio Miraflores", "renzo", "Consumo losa"),
        movement(3, date(2025, 8, 22), MovementKind::Adjustment, "Madera", -5, 5, "Colegio San Pedro", "admin", "Merma"),
        movement(4, date(2025, 8, 22), MovementKind::Entry, "Vigas de Acero", 50, 50, "Plaza de Huanchaco", "operador", "OC-1002"),
    ]
}
