//! Diet form state: the draft plus which row has focus

use super::draft::{FieldName, FormDraft};
use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<FormField>;
}

/// Index of the submit button row
pub const SUBMIT_ROW: usize = 4;

/// The patient details form
#[derive(Debug, Clone, Default)]
pub struct DietForm {
    pub draft: FormDraft,
    /// 0-3 are the draft fields, 4 is the submit button
    pub active_field_index: usize,
}

impl DietForm {
    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Field descriptor of the focused row, `None` on the submit button
    pub fn active_form_field(&self) -> Option<FormField> {
        self.get_field(self.active_field_index)
    }

    /// Focus a specific draft field
    pub fn focus(&mut self, name: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == name) {
            self.active_field_index = index;
        }
    }

    /// Apply a raw value to a field of the draft
    pub fn update(&mut self, field: FieldName, raw: &str) {
        self.draft = self.draft.update(field, raw);
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        if let Some(raw) = field.push_char(self.draft.value(field.name), c) {
            self.update(field.name, &raw);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_form_field() else {
            return;
        };
        if let Some(raw) = field.pop_char(self.draft.value(field.name)) {
            self.update(field.name, &raw);
        }
    }

    /// Select the next diet option
    pub fn next_diet_type(&mut self) {
        let next = self.draft.diet_type.next();
        self.update(FieldName::DietType, next.as_str());
    }

    /// Select the previous diet option
    pub fn prev_diet_type(&mut self) {
        let prev = self.draft.diet_type.prev();
        self.update(FieldName::DietType, prev.as_str());
    }
}

impl Form for DietForm {
    fn field_count(&self) -> usize {
        5 // age, weight, history, diet type, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<FormField> {
        FieldName::ALL.get(index).copied().map(FormField::for_name)
    }
}
