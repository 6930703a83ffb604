use thiserror::Error;

use super::field_type::FieldType;
use super::node::Combinator;
use super::operator::Operator;

/// Reasons a rule tree cannot be translated. Translation never produces
/// partial output: any of these aborts the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("undefined field '{path}' on entity '{entity}'")]
    UnknownField { entity: String, path: String },

    #[error("empty {combinator} group; a group needs at least one child")]
    EmptyGroup { combinator: Combinator },

    #[error("operator {operator} is not supported for {field_type} field '{path}'")]
    UnsupportedOperatorForType {
        operator: Operator,
        field_type: FieldType,
        path: String,
    },

    #[error("malformed literal '{literal}' for field '{path}': expected {expected}")]
    MalformedLiteral {
        path: String,
        literal: String,
        expected: &'static str,
    },

    #[error("invalid field path '{path}'")]
    InvalidFieldPath { path: String },
}

/// Rejected [`TranslatorBuilder`](super::TranslatorBuilder) settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{setting} template '{template}' has no '{{}}' placeholder")]
    MissingPlaceholder {
        setting: &'static str,
        template: String,
    },
}
