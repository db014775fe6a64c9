//! Form payloads and their field validation.
//!
//! A failed validation never reaches storage; the handler redisplays
//! the form with the entered values and the per-field messages.

use serde::Deserialize;

pub(crate) const NAME_MAX: usize = 250;
pub(crate) const TEXT_MAX: usize = 2000;

pub(crate) type FieldErrors = Vec<(&'static str, String)>;

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct RoomForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub purchased_on: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub notes: String,
}

/// Empty after trimming means the optional field was left blank.
pub(crate) fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

fn check_name(errors: &mut FieldErrors, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(("name", "this field is required".to_string()));
    } else if value.len() > NAME_MAX {
        errors.push(("name",
            format!("must be at most {NAME_MAX} characters")));
    }
}

fn check_text(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.len() > TEXT_MAX {
        errors.push((field,
            format!("must be at most {TEXT_MAX} characters")));
    }
}

impl RoomForm {
    /// The floor size, when supplied, must coerce to a number.
    pub(crate) fn size_value(&self) -> Result<Option<f64>, ()> {
        match optional(&self.size) {
            None => Ok(None),
            Some(value) => value.parse::<f64>().map(Some).map_err(|_| ()),
        }
    }

    pub(crate) fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, &self.name);
        check_text(&mut errors, "description", &self.description);
        if self.size_value().is_err() {
            errors.push(("size", "must be a number".to_string()));
        }
        errors
    }
}

impl ItemForm {
    pub(crate) fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_name(&mut errors, &self.name);
        check_text(&mut errors, "description", &self.description);
        check_text(&mut errors, "notes", &self.notes);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_form_validation() {
        let form = RoomForm {
            name: "  ".to_string(),
            size: "big".to_string(),
            ..Default::default()
        };
        let errors = form.validate();
        assert!(errors.iter().any(|(field, _)| *field == "name"));
        assert!(errors.iter().any(|(field, _)| *field == "size"));

        let form = RoomForm {
            name: "Den".to_string(),
            size: " 12.5 ".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.size_value(), Ok(Some(12.5)));
    }

    #[test]
    fn item_form_validation() {
        let form = ItemForm {
            name: "x".repeat(NAME_MAX + 1),
            ..Default::default()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "name");

        let form = ItemForm {
            name: "Lamp".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
    }
}
