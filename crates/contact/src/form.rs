use serde::{Deserialize, Serialize};
use strum::VariantArray;
use validator::{Validate, ValidationError};

use crate::Field;

/// The four-key text payload collected from the contact form.
///
/// Serializes as `{name, email, subject, message}`; absent keys deserialize to
/// empty strings.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FormFields {
    #[validate(custom(function = "non_blank"))]
    pub name: String,
    #[validate(custom(function = "non_blank"))]
    pub email: String,
    pub subject: String,
    #[validate(custom(function = "non_blank"))]
    pub message: String,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(std::borrow::Cow::from("This field is required"));
        return Err(error);
    }

    Ok(())
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Required fields that are empty after trimming, in form order.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::VARIANTS
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Ada".to_owned(),
            email: "ada@x.com".to_owned(),
            subject: String::new(),
            message: "Hello".to_owned(),
        }
    }

    #[test]
    fn subject_is_optional() {
        let fields = filled();

        assert!(fields.validate().is_ok());
        assert!(fields.missing_required().is_empty());
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut fields = filled();
        fields.set(Field::Name, "   ");
        fields.set(Field::Message, "\n");

        assert!(fields.validate().is_err());
        assert_eq!(
            fields.missing_required(),
            vec![Field::Name, Field::Message]
        );
    }

    #[test]
    fn no_email_shape_check() {
        let mut fields = filled();
        fields.set(Field::Email, "not-an-address");

        assert!(fields.validate().is_ok());
    }

    #[test]
    fn deserializes_with_absent_keys() {
        let fields: FormFields =
            serde_json::from_str(r#"{"name":"Ada","message":"Hi"}"#).unwrap();

        assert_eq!(fields.email, "");
        assert_eq!(fields.subject, "");
        assert_eq!(fields.missing_required(), vec![Field::Email]);
    }

    #[test]
    fn clear_resets_every_key() {
        let mut fields = filled();
        fields.set(Field::Subject, "Hi");
        fields.clear();

        assert_eq!(fields, FormFields::default());
    }
}
