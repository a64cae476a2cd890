//! Materials page

use rust_decimal::Decimal;

use super::{contains_query, delete_record, next_id, normalize_query, position};
use crate::error::ValidationError;
use crate::models::{seed, Material, MaterialEdit, NewMaterial};
use crate::totals::inventory_value;
use crate::types::{Confirm, EditState};
use crate::validation::whole_quantity;

/// Filter materials by name or supplier (case-insensitive substring)
pub fn filter_materials<'a>(materials: &'a [Material], query: &str) -> Vec<&'a Material> {
    match normalize_query(query) {
        None => materials.iter().collect(),
        Some(q) => materials
            .iter()
            .filter(|m| contains_query(&m.name, &q) || contains_query(&m.supplier, &q))
            .collect(),
    }
}

/// Controller of the materials list
#[derive(Debug, Clone, Default)]
pub struct MaterialsPage {
    materials: Vec<Material>,
    search: String,
    edit: EditState<MaterialEdit>,
    form: Option<NewMaterial>,
}

impl MaterialsPage {
    pub fn new(materials: Vec<Material>) -> Self {
        Self {
            materials,
            ..Self::default()
        }
    }

    /// Page preloaded with the demo materials
    pub fn with_demo_data() -> Self {
        Self::new(seed::materials())
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn filtered(&self) -> Vec<&Material> {
        filter_materials(&self.materials, &self.search)
    }

    /// Stock value of the filtered view
    pub fn inventory_value(&self) -> Result<Decimal, ValidationError> {
        inventory_value(self.filtered())
    }

    // ------ add form ------

    pub fn is_add_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Open the add form with an empty draft, or close it if it was open
    pub fn toggle_add_form(&mut self) {
        self.form = match self.form {
            Some(_) => None,
            None => Some(NewMaterial::default()),
        };
    }

    pub fn close_add_form(&mut self) {
        self.form = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut NewMaterial> {
        self.form.as_mut()
    }

    pub fn submit_add_form(&mut self) -> Result<&Material, ValidationError> {
        let draft = self.form.clone().ok_or(ValidationError::FormClosed)?;
        self.add(draft)
    }

    // ------ create / delete ------

    /// Validate and prepend a new material, closing the add form
    pub fn add(&mut self, input: NewMaterial) -> Result<&Material, ValidationError> {
        let material = next_id(&self.materials)
            .and_then(|id| Material::create(id, input))
            .map_err(|e| {
                tracing::debug!("Material rejected: {}", e);
                e
            })?;

        tracing::debug!(id = material.id, name = %material.name, "Material added");
        self.materials.insert(0, material);
        self.form = None;
        Ok(&self.materials[0])
    }

    pub fn delete(&mut self, id: u32, confirm: &impl Confirm) -> Result<bool, ValidationError> {
        delete_record(&mut self.materials, &mut self.edit, id, confirm)
    }

    // ------ inline edit (quantity) ------

    pub fn edit_state(&self) -> &EditState<MaterialEdit> {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<u32> {
        self.edit.editing_id()
    }

    pub fn buffer_mut(&mut self) -> Option<&mut MaterialEdit> {
        self.edit.buffer_mut()
    }

    pub fn begin_edit(&mut self, id: u32) -> Result<(), ValidationError> {
        let index = position(&self.materials, id)?;
        self.edit = EditState::Editing {
            id,
            buffer: MaterialEdit {
                quantity: Decimal::from(self.materials[index].quantity),
            },
        };
        Ok(())
    }

    /// Apply the buffered quantity and recompute the stock status. The page
    /// leaves edit mode whether or not the value was accepted.
    pub fn commit_edit(&mut self) -> Result<&Material, ValidationError> {
        let (id, buffer) = self.edit.take().ok_or(ValidationError::NotEditing)?;
        let index = position(&self.materials, id)?;

        let mut updated = self.materials[index].clone();
        whole_quantity("quantity", buffer.quantity)
            .and_then(|quantity| {
                updated.set_quantity(quantity);
                updated.value()
            })
            .map_err(|e| {
                tracing::debug!(id, "Quantity edit rejected: {}", e);
                e
            })?;
        self.materials[index] = updated;
        Ok(&self.materials[index])
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Viewing;
    }
}
