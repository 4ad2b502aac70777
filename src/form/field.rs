use std::fmt;
use std::str::FromStr;

use crate::errors::FormError;

/// The five inputs collected by the interview form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Surname,
    BirthDate,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Surname,
        Field::BirthDate,
        Field::Email,
        Field::Phone,
    ];

    /// Key used in serialized records and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::BirthDate => "birthDate",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Human-facing label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Surname => "Surname",
            Field::BirthDate => "Birth Date (dd/mm/yyyy)",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|field| field.key())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "name" => Ok(Field::Name),
            "surname" => Ok(Field::Surname),
            "birthdate" | "birth-date" | "birth_date" => Ok(Field::BirthDate),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}
