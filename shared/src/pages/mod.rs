//! Page controllers: each one owns a list of records, its search query, the
//! add-form draft and the inline edit state.

mod dashboard;
mod materials;
mod movements;
mod obras;

pub use dashboard::*;
pub use materials::*;
pub use movements::*;
pub use obras::*;

use crate::error::ValidationError;
use crate::models::{Material, Movement, Obra};
use crate::types::{Confirm, EditState};

/// A record kept in a page list
pub trait Record {
    fn id(&self) -> u32;

    /// Question asked before deleting this record
    fn delete_prompt(&self) -> String;
}

impl Record for Material {
    fn id(&self) -> u32 {
        self.id
    }

    fn delete_prompt(&self) -> String {
        format!("¿Eliminar \"{}\"? Esta acción no se puede deshacer.", self.name)
    }
}

impl Record for Obra {
    fn id(&self) -> u32 {
        self.id
    }

    fn delete_prompt(&self) -> String {
        format!("¿Eliminar la obra \"{}\"?", self.name)
    }
}

impl Record for Movement {
    fn id(&self) -> u32 {
        self.id
    }

    fn delete_prompt(&self) -> String {
        format!(
            "¿Eliminar el movimiento #{} ({} - {})?",
            self.id, self.kind, self.material
        )
    }
}

/// Next identity for a list: one past the largest id, or 1 when empty
pub fn next_id<T: Record>(records: &[T]) -> Result<u32, ValidationError> {
    match records.iter().map(Record::id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(ValidationError::OutOfRange { field: "id" }),
    }
}

/// Lower-cased, trimmed search query; `None` when the query matches everything
pub(crate) fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

pub(crate) fn contains_query(field: &str, query: &str) -> bool {
    field.to_lowercase().contains(query)
}

pub(crate) fn position<T: Record>(records: &[T], id: u32) -> Result<usize, ValidationError> {
    records
        .iter()
        .position(|r| r.id() == id)
        .ok_or(ValidationError::NotFound { id })
}

/// Ask for confirmation and remove the record. The edit state is cleared only
/// when it pointed at the removed record.
pub(crate) fn delete_record<T: Record, B>(
    records: &mut Vec<T>,
    edit: &mut EditState<B>,
    id: u32,
    confirm: &impl Confirm,
) -> Result<bool, ValidationError> {
    let index = position(records, id)?;
    if !confirm.confirm(&records[index].delete_prompt()) {
        tracing::debug!(id, "Delete declined");
        return Ok(false);
    }

    records.remove(index);
    if edit.is_editing(id) {
        *edit = EditState::Viewing;
    }
    tracing::debug!(id, "Record deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id::<Material>(&[]), Ok(1));
        assert_eq!(next_id(&seed::materials()), Ok(4));
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut materials = seed::materials();
        materials[1].id = u32::MAX;
        assert_eq!(
            next_id(&materials),
            Err(ValidationError::OutOfRange { field: "id" })
        );
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  "), None);
        assert_eq!(normalize_query(" CeMento "), Some("cemento".to_string()));
    }

    #[test]
    fn test_delete_prompts() {
        let movements = seed::movements();
        assert_eq!(
            movements[1].delete_prompt(),
            "¿Eliminar el movimiento #2 (Salida - Cemento)?"
        );
    }
}
