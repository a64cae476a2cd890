//! Stock movements page

use super::{contains_query, delete_record, next_id, normalize_query, position};
use crate::error::ValidationError;
use crate::models::{seed, Movement, MovementEdit, MovementKind, NewMovement};
use crate::totals::MovementTotals;
use crate::types::{today, Confirm, DateRange, EditState};
use crate::validation::validate_non_negative;

/// Criteria of the movements list. All of them must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementFilter {
    /// Matched against material, work, user, type label and note
    pub query: String,
    pub kind: Option<MovementKind>,
    pub dates: DateRange,
}

impl MovementFilter {
    pub fn matches(&self, movement: &Movement) -> bool {
        let matches_query = match normalize_query(&self.query) {
            None => true,
            Some(q) => {
                let optional = |field: &Option<String>| {
                    field.as_deref().is_some_and(|value| contains_query(value, &q))
                };
                contains_query(&movement.material, &q)
                    || optional(&movement.obra)
                    || optional(&movement.user)
                    || contains_query(movement.kind.label(), &q)
                    || optional(&movement.note)
            }
        };

        matches_query
            && self.kind.map_or(true, |kind| movement.kind == kind)
            && self.dates.contains(movement.date)
    }
}

pub fn filter_movements<'a>(movements: &'a [Movement], filter: &MovementFilter) -> Vec<&'a Movement> {
    movements.iter().filter(|m| filter.matches(m)).collect()
}

/// Controller of the movements list
#[derive(Debug, Clone, Default)]
pub struct MovementsPage {
    movements: Vec<Movement>,
    filter: MovementFilter,
    edit: EditState<MovementEdit>,
    form: Option<NewMovement>,
}

impl MovementsPage {
    pub fn new(movements: Vec<Movement>) -> Self {
        Self {
            movements,
            ..Self::default()
        }
    }

    pub fn with_demo_data() -> Self {
        Self::new(seed::movements())
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn filter(&self) -> &MovementFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut MovementFilter {
        &mut self.filter
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_kind_filter(&mut self, kind: Option<MovementKind>) {
        self.filter.kind = kind;
    }

    pub fn set_date_range(&mut self, dates: DateRange) {
        self.filter.dates = dates;
    }

    pub fn filtered(&self) -> Vec<&Movement> {
        filter_movements(&self.movements, &self.filter)
    }

    /// Entry/exit totals of the filtered view
    pub fn totals(&self) -> Result<MovementTotals, ValidationError> {
        MovementTotals::compute(self.filtered())
    }

    // ===== add form =====

    pub fn is_add_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Open the add form dated today, or close it if it was open
    pub fn toggle_add_form(&mut self) {
        self.form = match self.form {
            Some(_) => None,
            None => Some(NewMovement::dated(today())),
        };
    }

    pub fn close_add_form(&mut self) {
        self.form = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut NewMovement> {
        self.form.as_mut()
    }

    pub fn submit_add_form(&mut self) -> Result<&Movement, ValidationError> {
        let draft = self.form.clone().ok_or(ValidationError::FormClosed)?;
        self.add(draft)
    }

    // ===== create / delete =====

    /// Validate, normalise the quantity sign and prepend a new movement
    pub fn add(&mut self, input: NewMovement) -> Result<&Movement, ValidationError> {
        let movement = next_id(&self.movements)
            .and_then(|id| Movement::create(id, input, today()))
            .map_err(|e| {
                tracing::debug!("Movement rejected: {}", e);
                e
            })?;

        tracing::debug!(
            id = movement.id,
            kind = %movement.kind,
            quantity = %movement.quantity,
            "Movement added"
        );
        self.movements.insert(0, movement);
        self.form = None;
        Ok(&self.movements[0])
    }

    pub fn delete(&mut self, id: u32, confirm: &impl Confirm) -> Result<bool, ValidationError> {
        delete_record(&mut self.movements, &mut self.edit, id, confirm)
    }

    // ===== inline edit (quantity and cost) =====

    pub fn edit_state(&self) -> &EditState<MovementEdit> {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<u32> {
        self.edit.editing_id()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut MovementEdit> {
        self.edit.buffer_mut()
    }

    pub fn begin_edit(&mut self, id: u32) -> Result<(), ValidationError> {
        let index = position(&self.movements, id)?;
        let movement = &self.movements[index];
        self.edit = EditState::Editing {
            id,
            buffer: MovementEdit {
                quantity: movement.quantity,
                cost: movement.cost,
            },
        };
        Ok(())
    }

    /// Apply buffered quantity and cost, re-applying the sign convention of the
    /// movement's kind. The page leaves edit mode whether or not it was accepted.
    pub fn commit_edit(&mut self) -> Result<&Movement, ValidationError> {
        let (id, buffer) = self.edit.take().ok_or(ValidationError::NotEditing)?;
        let index = position(&self.movements, id)?;

        let mut updated = self.movements[index].clone();
        updated.quantity = updated.kind.normalize(buffer.quantity);
        updated.cost = buffer.cost;
        validate_non_negative("cost", buffer.cost)
            .and_then(|()| updated.value())
            .map_err(|e| {
                tracing::debug!(id, "Movement edit rejected: {}", e);
                e
            })?;

        self.movements[index] = updated;
        Ok(&self.movements[index])
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }
}
