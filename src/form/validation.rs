//! Per-field validation rules and the interview schema.
//!
//! Each field owns an ordered list of [`Rule`]s. Rules run in order and the
//! first failure becomes the field's error, so `Required` is always listed
//! first. Format rules accept the empty string; an empty field therefore only
//! ever reports its required message.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::field::Field;
use super::record::FormValues;

static BIRTH_DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("birth date pattern compiles"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Built-in validation predicates.
#[derive(Debug, Clone)]
pub enum Rule {
    Required { message: &'static str },
    Matches { pattern: Regex, message: &'static str },
    Email { message: &'static str },
}

impl Rule {
    pub fn required(message: &'static str) -> Self {
        Rule::Required { message }
    }

    pub fn matches(pattern: Regex, message: &'static str) -> Self {
        Rule::Matches { pattern, message }
    }

    pub fn email(message: &'static str) -> Self {
        Rule::Email { message }
    }

    fn check(&self, input: &str) -> Result<(), &'static str> {
        match self {
            Rule::Required { message } => {
                if input.is_empty() {
                    Err(*message)
                } else {
                    Ok(())
                }
            }
            Rule::Matches { pattern, message } => {
                if input.is_empty() || pattern.is_match(input) {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
            Rule::Email { message } => {
                if input.is_empty() || EMAIL_PATTERN.is_match(input) {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
        }
    }
}

/// Ordered rules attached to a single field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field: Field,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(field: Field, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    pub fn validate(&self, input: &str) -> Option<FieldValidationError> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(input).err())
            .map(|message| FieldValidationError::new(self.field, message))
    }
}

/// Validation rules for every field of the form.
#[derive(Debug, Clone)]
pub struct ValidationSchema {
    fields: Vec<FieldSchema>,
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::interview()
    }
}

impl ValidationSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    /// Rules of the interview form.
    ///
    /// The birth date check is a digit-shape match only; `31/13/9999` passes.
    pub fn interview() -> Self {
        Self::new(vec![
            FieldSchema::new(Field::Name, vec![Rule::required("Name is required")]),
            FieldSchema::new(Field::Surname, vec![Rule::required("Surname is required")]),
            FieldSchema::new(
                Field::BirthDate,
                vec![
                    Rule::required("Birth date is required"),
                    Rule::matches(BIRTH_DATE_PATTERN.clone(), "Format must be dd/mm/yyyy"),
                ],
            ),
            FieldSchema::new(
                Field::Email,
                vec![
                    Rule::required("Email is required"),
                    Rule::email("Invalid email format"),
                ],
            ),
            FieldSchema::new(
                Field::Phone,
                vec![Rule::required("Phone number is required")],
            ),
        ])
    }

    pub fn validate_field(&self, field: Field, input: &str) -> Option<FieldValidationError> {
        self.fields
            .iter()
            .filter(|schema| schema.field == field)
            .find_map(|schema| schema.validate(input))
    }

    /// Evaluates every field independently and collects all failures.
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for schema in &self.fields {
            if errors.get(schema.field).is_some() {
                continue;
            }
            if let Some(error) = schema.validate(values.get(schema.field)) {
                errors.insert(error);
            }
        }
        errors
    }
}

/// Per-field error messages from the latest validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, FieldValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValidationError> {
        self.entries.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.entries.values()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    pub(crate) fn insert(&mut self, error: FieldValidationError) {
        self.entries.insert(error.field, error);
    }

    pub(crate) fn remove(&mut self, field: Field) {
        self.entries.remove(&field);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldValidationError;
    type IntoIter = std::collections::btree_map::Values<'a, Field, FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ValidationSchema {
        ValidationSchema::interview()
    }

    #[test]
    fn required_wins_over_format_on_empty_input() {
        let error = schema().validate_field(Field::BirthDate, "").unwrap();
        assert_eq!(error.message, "Birth date is required");
        let error = schema().validate_field(Field::Email, "").unwrap();
        assert_eq!(error.message, "Email is required");
    }

    #[test]
    fn birth_date_checks_digit_shape_only() {
        let schema = schema();
        assert!(schema.validate_field(Field::BirthDate, "12/12/1990").is_none());
        assert!(schema.validate_field(Field::BirthDate, "31/13/9999").is_none());
        assert!(schema.validate_field(Field::BirthDate, "99/99/9999").is_none());
        for bad in ["1990-12-12", "1/12/1990", "12/12/90", " 12/12/1990", "12/12/1990\n"] {
            let error = schema.validate_field(Field::BirthDate, bad).unwrap();
            assert_eq!(error.message, "Format must be dd/mm/yyyy", "input {bad:?}");
        }
    }

    #[test]
    fn email_accepts_common_shapes() {
        let schema = schema();
        for good in [
            "ada@example.com",
            "first.last+tag@sub.example.co.uk",
            "x@localhost",
            "o'hara@example.org",
        ] {
            assert!(schema.validate_field(Field::Email, good).is_none(), "{good}");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        let schema = schema();
        for bad in [
            "not-an-email",
            "@example.com",
            "ada@",
            "ada@-example.com",
            "ada@example..com",
            "ada example@example.com",
            "ada@@example.com",
        ] {
            let error = schema.validate_field(Field::Email, bad).unwrap();
            assert_eq!(error.message, "Invalid email format", "input {bad:?}");
        }
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        assert!(schema().validate_field(Field::Name, " ").is_none());
    }

    #[test]
    fn validate_reports_every_invalid_field() {
        let errors = schema().validate(&FormValues::default());
        assert_eq!(errors.len(), 5);
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(errors.message(Field::Phone), Some("Phone number is required"));
    }

    #[test]
    fn custom_schema_uses_first_failing_rule() {
        let schema = ValidationSchema::new(vec![FieldSchema::new(
            Field::Phone,
            vec![
                Rule::required("Phone number is required"),
                Rule::matches(Regex::new(r"^\+").unwrap(), "Use international format"),
            ],
        )]);
        let error = schema.validate_field(Field::Phone, "555").unwrap();
        assert_eq!(error.message, "Use international format");
        assert!(schema.validate_field(Field::Name, "").is_none());
    }
}
