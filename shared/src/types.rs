//! Common types used across the pages

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inline edit state of a list: either nothing is being edited, or exactly one
/// record is, together with the buffered values typed so far.
#[derive(Debug, Clone, PartialEq)]
pub enum EditState<B> {
    Viewing,
    Editing { id: u32, buffer: B },
}

impl<B> Default for EditState<B> {
    fn default() -> Self {
        EditState::Viewing
    }
}

impl<B> EditState<B> {
    pub fn editing_id(&self) -> Option<u32> {
        match self {
            EditState::Viewing => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }

    pub fn is_editing(&self, record_id: u32) -> bool {
        self.editing_id() == Some(record_id)
    }

    pub fn buffer(&self) -> Option<&B> {
        match self {
            EditState::Viewing => None,
            EditState::Editing { buffer, .. } => Some(buffer),
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut B> {
        match self {
            EditState::Viewing => None,
            EditState::Editing { buffer, .. } => Some(buffer),
        }
    }

    /// Leave editing mode, handing back the id and buffer if there were any
    pub fn take(&mut self) -> Option<(u32, B)> {
        match std::mem::replace(self, EditState::Viewing) {
            EditState::Viewing => None,
            EditState::Editing { id, buffer } => Some((id, buffer)),
        }
    }
}

/// Blocking yes/no prompt asked before destructive operations
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Answers every prompt with a fixed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(answer = self.0, "Auto-confirming: {}", message);
        self.0
    }
}

/// Optional inclusive date range used by the movements filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Current local date, the default for new works and movements
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
