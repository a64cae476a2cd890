//! Works ("obras") page

use super::{contains_query, delete_record, next_id, normalize_query, position};
use crate::error::ValidationError;
use crate::models::{seed, NewObra, Obra, ObraEdit, ObraStatus};
use crate::totals::ObraTotals;
use crate::types::{today, Confirm, EditState};
use crate::validation::validate_budget;

/// Filter works by name, location, responsible or status label
pub fn filter_obras<'a>(obras: &'a [Obra], query: &str) -> Vec<&'a Obra> {
    match normalize_query(query) {
        None => obras.iter().collect(),
        Some(q) => obras
            .iter()
            .filter(|o| {
                contains_query(&o.name, &q)
                    || contains_query(&o.location, &q)
                    || contains_query(&o.responsible, &q)
                    || contains_query(o.status.label(), &q)
            })
            .collect(),
    }
}

/// Controller of the works list
#[derive(Debug, Clone, Default)]
pub struct ObrasPage {
    obras: Vec<Obra>,
    search: String,
    edit: EditState<ObraEdit>,
    form: Option<NewObra>,
}

impl ObrasPage {
    pub fn new(obras: Vec<Obra>) -> Self {
        Self {
            obras,
            ..Self::default()
        }
    }

    pub fn with_demo_data() -> Self {
        Self::new(seed::obras())
    }

    pub fn obras(&self) -> &[Obra] {
        &self.obras
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn filtered(&self) -> Vec<&Obra> {
        filter_obras(&self.obras, &self.search)
    }

    /// Budget, spent and balance of the filtered view
    pub fn totals(&self) -> Result<ObraTotals, ValidationError> {
        ObraTotals::compute(self.filtered())
    }

    // ---- add form ----

    pub fn is_add_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Open the add form (starting today) or close it if it was open
    pub fn toggle_add_form(&mut self) {
        self.form = match self.form {
            Some(_) => None,
            None => Some(NewObra::starting(today())),
        };
    }

    pub fn close_add_form(&mut self) {
        self.form = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut NewObra> {
        self.form.as_mut()
    }

    pub fn submit_add_form(&mut self) -> Result<&Obra, ValidationError> {
        let draft = self.form.clone().ok_or(ValidationError::FormClosed)?;
        self.add(draft)
    }

    // ---- create / delete ----

    pub fn add(&mut self, input: NewObra) -> Result<&Obra, ValidationError> {
        let obra = next_id(&self.obras)
            .and_then(|id| Obra::create(id, input))
            .map_err(|e| {
                tracing::debug!("Obra rejected: {}", e);
                e
            })?;

        tracing::debug!(id = obra.id, name = %obra.name, "Obra added");
        self.obras.insert(0, obra);
        self.form = None;
        Ok(&self.obras[0])
    }

    pub fn delete(&mut self, id: u32, confirm: &impl Confirm) -> Result<bool, ValidationError> {
        delete_record(&mut self.obras, &mut self.edit, id, confirm)
    }

    // ---- inline edit (budget) ----

    pub fn edit_state(&self) -> &EditState<ObraEdit> {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<u32> {
        self.edit.editing_id()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut ObraEdit> {
        self.edit.buffer_mut()
    }

    pub fn begin_edit(&mut self, id: u32) -> Result<(), ValidationError> {
        let index = position(&self.obras, id)?;
        self.edit = EditState::Editing {
            id,
            buffer: ObraEdit {
                budget: self.obras[index].budget,
            },
        };
        Ok(())
    }

    /// Apply the buffered budget. A budget below what was already spent is
    /// rejected; either way the page leaves edit mode. The status is not touched.
    pub fn commit_edit(&mut self) -> Result<&Obra, ValidationError> {
        let (id, buffer) = self.edit.take().ok_or(ValidationError::NotEditing)?;
        let index = position(&self.obras, id)?;

        validate_budget(buffer.budget, self.obras[index].spent).map_err(|e| {
            tracing::debug!(id, "Budget edit rejected: {}", e);
            e
        })?;
        self.obras[index].budget = buffer.budget;
        Ok(&self.obras[index])
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }

    /// Number of works currently marked active
    pub fn active_count(&self) -> usize {
        self.obras
            .iter()
            .filter(|o| o.status == ObraStatus::Active)
            .count()
    }
}
