use std::fmt;
use std::str::FromStr;

use crate::parse::ParseError;

/// Semantic classification of a field, as reported by a
/// [`FieldResolver`](super::FieldResolver).
///
/// The type decides how a condition's literal is rendered and which
/// operators the condition may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FieldType {
    /// Text. Literals are double-quoted.
    String,
    /// `true` / `false`, never quoted.
    Boolean,
    /// Integer or decimal number, never quoted.
    Numeric,
    /// A money value. The amount accessor is appended to the field access.
    Monetary,
    /// A calendar date, optionally with a time of day.
    Date,
    /// A relationship to another entity. Compared against other fields only.
    FieldReference,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        FieldType::String,
        FieldType::Boolean,
        FieldType::Numeric,
        FieldType::Monetary,
        FieldType::Date,
        FieldType::FieldReference,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "STRING",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Numeric => "NUMERIC",
            FieldType::Monetary => "MONETARY",
            FieldType::Date => "DATE",
            FieldType::FieldReference => "FIELD_REFERENCE",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical names plus the metadata service's storage-level
/// aliases (`INTEGER`, `DECIMAL`, `MONEY`, ...).
impl FromStr for FieldType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STRING" => Ok(FieldType::String),
            "BOOLEAN" => Ok(FieldType::Boolean),
            "NUMERIC" | "INTEGER" | "LONG" | "DECIMAL" => Ok(FieldType::Numeric),
            "MONETARY" | "MONEY" => Ok(FieldType::Monetary),
            "DATE" => Ok(FieldType::Date),
            "FIELD_REFERENCE" | "ENTITY" => Ok(FieldType::FieldReference),
            other => Err(ParseError::unknown("field type", other)),
        }
    }
}
