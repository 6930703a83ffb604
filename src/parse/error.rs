/// A name or literal that does not match the expected syntax.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An operator, group operator or field type name outside the vocabulary.
    #[error("parse error: unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },

    /// A field path or literal rejected by the grammar.
    #[error("parse error: {0}")]
    Syntax(String),
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, name: &str) -> Self {
        Self::UnknownName {
            kind,
            name: name.to_owned(),
        }
    }
}
