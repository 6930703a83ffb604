use super::dialect::Dialect;
use super::error::{ConfigError, TranslateError};
use super::node::Node;
use super::resolver::FieldResolver;

/// Builder for a [`Translator`] with a customised [`Dialect`].
///
/// # Example
///
/// ```
/// use ruletree::{field, FieldCatalog, FieldType, Translator};
///
/// let translator = Translator::builder()
///     .case_fold("{}.toLowerCase()")
///     .build()
///     .unwrap();
///
/// let catalog = FieldCatalog::new().field("customer", "firstName", FieldType::String);
/// let expr = translator
///     .translate("customer", &field("firstName").iequals("Ann"), &catalog)
///     .unwrap();
/// assert_eq!(expr, r#"customer.firstName.toLowerCase()=="Ann".toLowerCase()"#);
/// ```
#[derive(Debug, Default)]
pub struct TranslatorBuilder {
    dialect: Dialect,
}

impl TranslatorBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete dialect instead of the MVEL default.
    #[must_use]
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Template wrapped around both operands of case-insensitive operators.
    /// Must contain a `{}` placeholder.
    #[must_use]
    pub fn case_fold(mut self, template: &str) -> Self {
        self.dialect.case_fold = template.to_owned();
        self
    }

    /// Suffix appended to monetary field accesses.
    #[must_use]
    pub fn amount_accessor(mut self, suffix: &str) -> Self {
        self.dialect.amount_accessor = suffix.to_owned();
        self
    }

    /// Template wrapped around quoted date literals. Must contain a `{}`
    /// placeholder.
    #[must_use]
    pub fn date_conversion(mut self, template: &str) -> Self {
        self.dialect.date_conversion = template.to_owned();
        self
    }

    #[must_use]
    pub fn null_literal(mut self, literal: &str) -> Self {
        self.dialect.null_literal = literal.to_owned();
        self
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if a template lacks its placeholder.
    pub fn build(self) -> Result<Translator, ConfigError> {
        self.dialect.validate()?;
        Ok(Translator {
            dialect: self.dialect,
        })
    }
}

/// Compiles rule trees into expression text. Immutable, `Send + Sync`, and
/// reusable across any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    dialect: Dialect,
}

impl Translator {
    /// A translator for the default MVEL dialect.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> TranslatorBuilder {
        TranslatorBuilder::new()
    }

    #[must_use]
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Translate one rule tree rooted at `root`, resolving field paths
    /// against `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] for unknown or malformed field paths, empty
    /// groups, operators the field type does not support, and literals that
    /// do not fit the field type.
    pub fn translate<R>(
        &self,
        entity: &str,
        root: &Node,
        resolver: &R,
    ) -> Result<String, TranslateError>
    where
        R: FieldResolver + ?Sized,
    {
        let result = crate::translate::translate_tree(&self.dialect, entity, root, resolver);
        log_outcome(entity, &result);
        result
    }

    /// Translate several independent root groups submitted together. They
    /// are conjunctive: the result is each root's translation joined by `&&`.
    ///
    /// # Errors
    ///
    /// As [`translate`](Self::translate); an empty slice is
    /// [`TranslateError::EmptyGroup`].
    pub fn translate_all<R>(
        &self,
        entity: &str,
        roots: &[Node],
        resolver: &R,
    ) -> Result<String, TranslateError>
    where
        R: FieldResolver + ?Sized,
    {
        let result = crate::translate::translate_roots(&self.dialect, entity, roots, resolver);
        log_outcome(entity, &result);
        result
    }
}

fn log_outcome(entity: &str, result: &Result<String, TranslateError>) {
    match result {
        Ok(expr) => tracing::debug!(entity, len = expr.len(), "translated rule tree"),
        Err(err) => tracing::debug!(entity, error = %err, "rule tree translation failed"),
    }
}
