//! Form field descriptors

use super::draft::{FieldName, FormDraft};

/// What kind of input a field takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Whole numbers only
    Integer,
    /// Digits with at most one decimal point
    Decimal,
    /// Free text
    Text,
    /// One of a fixed set of options
    Choice,
}

/// Represents a single form field with its configuration
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub is_multiline: bool,
    pub required: bool,
}

impl FormField {
    /// Descriptor for a draft field
    pub fn for_name(name: FieldName) -> Self {
        match name {
            FieldName::Age => Self {
                name,
                label: "Age",
                placeholder: "Enter your age",
                kind: InputKind::Integer,
                is_multiline: false,
                required: true,
            },
            FieldName::Weight => Self {
                name,
                label: "Weight (kg)",
                placeholder: "Enter your weight in kg",
                kind: InputKind::Decimal,
                is_multiline: false,
                required: true,
            },
            FieldName::History => Self {
                name,
                label: "Medical History",
                placeholder: "Enter any relevant medical conditions",
                kind: InputKind::Text,
                is_multiline: true,
                required: false,
            },
            FieldName::DietType => Self {
                name,
                label: "Diet Preference",
                placeholder: "",
                kind: InputKind::Choice,
                is_multiline: false,
                required: false,
            },
        }
    }

    /// Whether typing `c` after `current` is admitted by the input
    pub fn accepts(&self, current: &str, c: char) -> bool {
        match self.kind {
            InputKind::Integer => c.is_ascii_digit(),
            InputKind::Decimal => c.is_ascii_digit() || (c == '.' && !current.contains('.')),
            InputKind::Text => !c.is_control() || c == '\n',
            InputKind::Choice => false,
        }
    }

    /// Raw value after typing `c`, or `None` when the input rejects it
    pub fn push_char(&self, current: &str, c: char) -> Option<String> {
        if !self.accepts(current, c) {
            return None;
        }
        let mut value = current.to_string();
        value.push(c);
        Some(value)
    }

    /// Raw value after a backspace, or `None` for choice fields
    pub fn pop_char(&self, current: &str) -> Option<String> {
        if self.kind == InputKind::Choice {
            return None;
        }
        let mut value = current.to_string();
        value.pop();
        Some(value)
    }

    /// Get the display value for rendering
    pub fn display_value(&self, draft: &FormDraft) -> String {
        match self.name {
            FieldName::DietType => format!("◀ {} ▶", draft.diet_type.label()),
            other => draft.value(other).to_string(),
        }
    }

    /// Title shown on the field border
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}
