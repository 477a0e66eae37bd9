//! View logic behind the plan step card
//!
//! Everything here is plain data in, plain data out, so the card component
//! stays a thin layer of markup over it.

use std::collections::HashSet;
use std::sync::Arc;

use crate::types::{ParameterEntry, Plan, PlanStep};

/// Context variable names the planner injects into every step.
pub const DEFAULT_RESERVED_WORDS: &[&str] = &["server_url", "server-url"];

/// Input keys that are never shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords(Arc<HashSet<String>>);

impl ReservedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Arc::new(words.into_iter().map(Into::into).collect()))
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    /// Whether `key` names a reserved word, ignoring surrounding whitespace
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key.trim())
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_WORDS.iter().copied())
    }
}

/// Parameters worth showing: not reserved and carrying a value.
/// Order follows `step.parameters`.
pub fn visible_inputs(step: &PlanStep, reserved: &ReservedWords) -> Vec<ParameterEntry> {
    step.parameters
        .iter()
        .filter(|p| !reserved.contains(&p.key) && !p.value.trim().is_empty())
        .cloned()
        .collect()
}

/// Card title, e.g. `Step 1 • WriterSkill.Summarize`
pub fn step_header(step: &PlanStep) -> String {
    format!("Step {} • {}.{}", step.index + 1, step.skill_name, step.name)
}

pub fn step_description(step: &PlanStep) -> Option<&str> {
    step.description.as_deref().filter(|d| !d.is_empty())
}

/// Deleting a step is an edit, so both switches have to be on.
pub fn delete_control_visible(edits_enabled: bool, step_delete_enabled: bool) -> bool {
    edits_enabled && step_delete_enabled
}

/// A new value for one parameter of one step, applied by whoever owns the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterEdit {
    pub step_index: usize,
    pub key: String,
    pub value: String,
}

impl ParameterEdit {
    /// Edit of `input` (as shown by the card of step `step_index`) to `value`
    pub fn for_input(step_index: usize, input: &ParameterEntry, value: String) -> Self {
        Self {
            step_index,
            key: input.key.clone(),
            value,
        }
    }
}

/// Output badges with their position, which doubles as the render key
/// since output names are not guaranteed unique.
pub fn output_badges(step: &PlanStep) -> Vec<(usize, String)> {
    step.outputs.iter().cloned().enumerate().collect()
}

impl PlanStep {
    /// Replaces the value of the first parameter whose key is exactly `key`.
    /// Returns false, changing nothing, when there is no such parameter.
    pub fn apply_edit(&mut self, key: &str, value: String) -> bool {
        match self.parameters.iter_mut().find(|p| p.key == key) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => false,
        }
    }
}

impl Plan {
    pub fn apply_edit(&mut self, edit: &ParameterEdit) -> bool {
        self.steps
            .iter_mut()
            .find(|s| s.index == edit.step_index)
            .map(|s| s.apply_edit(&edit.key, edit.value.clone()))
            .unwrap_or(false)
    }

    /// Removes the step carrying `index` and renumbers the rest so that every
    /// step's index is its position again.
    pub fn remove_step(&mut self, index: usize) -> Option<PlanStep> {
        let position = self.steps.iter().position(|s| s.index == index)?;
        let removed = self.steps.remove(position);
        for (i, step) in self.steps.iter_mut().enumerate() {
            step.index = i;
        }
        Some(removed)
    }
}

/// Visibility of the delete confirmation dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Delete icon clicked
    Request,
    Cancel,
    Confirm,
}

impl DeleteDialog {
    pub fn is_open(self) -> bool {
        self == DeleteDialog::Open
    }

    /// Next state, and whether the step should now be deleted.
    pub fn on(self, action: DialogAction) -> (DeleteDialog, bool) {
        match (self, action) {
            (DeleteDialog::Closed, DialogAction::Request) => (DeleteDialog::Open, false),
            (DeleteDialog::Open, DialogAction::Cancel) => (DeleteDialog::Closed, false),
            (DeleteDialog::Open, DialogAction::Confirm) => (DeleteDialog::Closed, true),
            (state, _) => (state, false),
        }
    }
}

/// Runs `action` against `dialog` and calls `on_delete` with `step_index`
/// when it confirms a deletion. Returns the next dialog state.
pub fn dispatch_dialog(
    dialog: DeleteDialog,
    action: DialogAction,
    step_index: usize,
    on_delete: impl FnOnce(usize),
) -> DeleteDialog {
    let (next, delete) = dialog.on(action);
    if delete {
        on_delete(step_index);
    }
    next
}
