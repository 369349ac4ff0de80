//! Patient draft and the structural update that mirrors every input event

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names of the editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Age,
    Weight,
    History,
    DietType,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 4] = [
        FieldName::Age,
        FieldName::Weight,
        FieldName::History,
        FieldName::DietType,
    ];

    /// Wire name of the field in the outbound payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Weight => "weight",
            Self::History => "history",
            Self::DietType => "dietType",
        }
    }
}

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DietType {
    #[default]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 3] = [DietType::Veg, DietType::NonVeg, DietType::Vegan];

    /// Value sent to the plan service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "Veg",
            Self::NonVeg => "Non-Veg",
            Self::Vegan => "Vegan",
        }
    }

    /// Human readable option label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Veg => "Vegetarian",
            Self::NonVeg => "Non-Vegetarian",
            Self::Vegan => "Vegan",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Veg => Self::NonVeg,
            Self::NonVeg => Self::Vegan,
            Self::Vegan => Self::Veg,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Veg => Self::Vegan,
            Self::NonVeg => Self::Veg,
            Self::Vegan => Self::NonVeg,
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a diet type string outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diet type: {0}")]
pub struct UnknownDietType(pub String);

impl FromStr for DietType {
    type Err = UnknownDietType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietType::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDietType(s.to_string()))
    }
}

/// In-progress form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub age: String,
    pub weight: String,
    pub history: String,
    pub diet_type: DietType,
}

impl FormDraft {
    /// Return a copy of the draft with exactly `field` replaced by `raw`.
    ///
    /// Numeric fields take any string; nothing is validated here. A diet type
    /// outside the known set leaves the draft as it was.
    pub fn update(&self, field: FieldName, raw: &str) -> FormDraft {
        match field {
            FieldName::Age => FormDraft {
                age: raw.to_string(),
                ..self.clone()
            },
            FieldName::Weight => FormDraft {
                weight: raw.to_string(),
                ..self.clone()
            },
            FieldName::History => FormDraft {
                history: raw.to_string(),
                ..self.clone()
            },
            FieldName::DietType => match raw.parse::<DietType>() {
                Ok(diet_type) => FormDraft {
                    diet_type,
                    ..self.clone()
                },
                Err(e) => {
                    tracing::warn!("Ignoring diet type update: {e}");
                    self.clone()
                }
            },
        }
    }

    /// Current raw value of a field
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Age => &self.age,
            FieldName::Weight => &self.weight,
            FieldName::History => &self.history,
            FieldName::DietType => self.diet_type.as_str(),
        }
    }

    /// First required field that is still empty, in form order
    pub fn first_missing_required(&self) -> Option<FieldName> {
        [FieldName::Age, FieldName::Weight]
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_draft() -> FormDraft {
        FormDraft {
            age: "30".to_string(),
            weight: "70".to_string(),
            history: "Type 2 diabetes".to_string(),
            diet_type: DietType::NonVeg,
        }
    }

    mod diet_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_veg() {
            assert_eq!(DietType::default(), DietType::Veg);
        }

        #[test]
        fn test_parse_wire_values() {
            assert_eq!("Veg".parse::<DietType>(), Ok(DietType::Veg));
            assert_eq!("Non-Veg".parse::<DietType>(), Ok(DietType::NonVeg));
            assert_eq!("Vegan".parse::<DietType>(), Ok(DietType::Vegan));
        }

        #[test]
        fn test_parse_rejects_unknown() {
            assert!("Keto".parse::<DietType>().is_err());
            assert!("veg".parse::<DietType>().is_err());
            assert!("".parse::<DietType>().is_err());
        }

        #[test]
        fn test_next_and_prev_cycle() {
            let mut d = DietType::Veg;
            for _ in 0..3 {
                d = d.next();
            }
            assert_eq!(d, DietType::Veg);
            assert_eq!(DietType::Veg.prev(), DietType::Vegan);
            assert_eq!(DietType::Vegan.prev().next(), DietType::Vegan);
        }

        #[test]
        fn test_serializes_to_wire_value() {
            let json = serde_json::to_string(&DietType::NonVeg).unwrap();
            assert_eq!(json, "\"Non-Veg\"");
        }

        #[test]
        fn test_labels() {
            assert_eq!(DietType::Veg.label(), "Vegetarian");
            assert_eq!(DietType::NonVeg.label(), "Non-Vegetarian");
            assert_eq!(DietType::Vegan.label(), "Vegan");
        }
    }

    mod update {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_draft_has_defaults() {
            let draft = FormDraft::default();
            assert_eq!(draft.age, "");
            assert_eq!(draft.weight, "");
            assert_eq!(draft.history, "");
            assert_eq!(draft.diet_type, DietType::Veg);
        }

        #[test]
        fn test_update_changes_only_named_field() {
            let base = filled_draft();
            for field in FieldName::ALL {
                let raw = match field {
                    FieldName::DietType => "Vegan",
                    _ => "changed",
                };
                let updated = base.update(field, raw);
                assert_eq!(updated.value(field), raw);
                for other in FieldName::ALL.into_iter().filter(|f| *f != field) {
                    assert_eq!(updated.value(other), base.value(other), "{other:?} changed");
                }
            }
        }

        #[test]
        fn test_update_does_not_touch_original() {
            let base = filled_draft();
            let _ = base.update(FieldName::Age, "99");
            assert_eq!(base.age, "30");
        }

        #[test]
        fn test_numeric_fields_accept_any_string() {
            let draft = FormDraft::default()
                .update(FieldName::Age, "abc")
                .update(FieldName::Weight, "-1.5e3");
            assert_eq!(draft.age, "abc");
            assert_eq!(draft.weight, "-1.5e3");
        }

        #[test]
        fn test_unknown_diet_type_is_ignored() {
            let base = filled_draft();
            let updated = base.update(FieldName::DietType, "Carnivore");
            assert_eq!(updated, base);
        }

        #[test]
        fn test_diet_type_stays_in_set_over_sequences() {
            let inputs = ["Vegan", "bogus", "Non-Veg", "", "Veg", "VEGAN"];
            let mut draft = FormDraft::default();
            for raw in inputs {
                draft = draft.update(FieldName::DietType, raw);
                assert!(DietType::ALL.contains(&draft.diet_type));
            }
            assert_eq!(draft.diet_type, DietType::Veg);
        }

        #[test]
        fn test_history_keeps_newlines() {
            let draft = FormDraft::default().update(FieldName::History, "line one\nline two\n");
            assert_eq!(draft.history, "line one\nline two\n");
        }
    }

    mod required_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_draft_is_missing_age() {
            assert_eq!(FormDraft::default().first_missing_required(), Some(FieldName::Age));
        }

        #[test]
        fn test_missing_weight() {
            let draft = FormDraft::default().update(FieldName::Age, "42");
            assert_eq!(draft.first_missing_required(), Some(FieldName::Weight));
        }

        #[test]
        fn test_whitespace_counts_as_missing() {
            let draft = FormDraft::default()
                .update(FieldName::Age, "42")
                .update(FieldName::Weight, "  ");
            assert_eq!(draft.first_missing_required(), Some(FieldName::Weight));
        }

        #[test]
        fn test_history_is_optional() {
            let draft = FormDraft::default()
                .update(FieldName::Age, "42")
                .update(FieldName::Weight, "80");
            assert_eq!(draft.first_missing_required(), None);
        }
    }
}
