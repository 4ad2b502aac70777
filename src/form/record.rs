use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Live, unvalidated values of every field. Input is stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: [String; 5],
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Field/value pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .map(move |field| (*field, self.get(*field)))
    }
}

/// Snapshot of a form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub surname: String,
    pub birth_date: String,
    pub email: String,
    pub phone: String,
}

impl FormRecord {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            name: values.get(Field::Name).to_string(),
            surname: values.get(Field::Surname).to_string(),
            birth_date: values.get(Field::BirthDate).to_string(),
            email: values.get(Field::Email).to_string(),
            phone: values.get(Field::Phone).to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Surname => &self.surname,
            Field::BirthDate => &self.birth_date,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Notification text: the record as pretty-printed JSON.
    pub fn payload(&self) -> String {
        match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to plain record rendering");
                self.to_string()
            }
        }
    }
}

impl fmt::Display for FormRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, field) in Field::ALL.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field.key(), self.get(*field))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> FormRecord {
        let mut values = FormValues::default();
        values.set(Field::Name, "Ada");
        values.set(Field::Surname, "Lovelace");
        values.set(Field::BirthDate, "12/12/1990");
        values.set(Field::Email, "ada@example.com");
        values.set(Field::Phone, "555-1234");
        FormRecord::from_values(&values)
    }

    #[test]
    fn values_round_trip_verbatim() {
        let mut values = FormValues::default();
        values.set(Field::Name, "  Ada \t");
        assert_eq!(values.get(Field::Name), "  Ada \t");
        assert!(!values.is_blank());
        values.clear();
        assert!(values.is_blank());
    }

    #[test]
    fn payload_lists_fields_in_fixed_order() {
        let payload = ada().payload();
        assert_eq!(
            payload,
            "{\n  \"name\": \"Ada\",\n  \"surname\": \"Lovelace\",\n  \"birthDate\": \"12/12/1990\",\n  \"email\": \"ada@example.com\",\n  \"phone\": \"555-1234\"\n}"
        );
    }

    #[test]
    fn payload_escapes_quotes() {
        let mut record = ada();
        record.name = "A \"quoted\" name".into();
        let parsed: FormRecord = serde_json::from_str(&record.payload()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn display_renders_key_value_lines() {
        let text = ada().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "birthDate: 12/12/1990");
    }
}
