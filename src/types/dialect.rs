use super::error::ConfigError;

/// Placeholder replaced by the operand in dialect templates.
pub const PLACEHOLDER: &str = "{}";

/// The target language's spelling of the few constructs that are not plain
/// operators: case folding, money amounts, date literals and null.
///
/// [`Dialect::mvel()`] (the default) produces expressions for MVEL:
///
/// | construct | template |
/// |---|---|
/// | case fold | `MVEL.eval("toUpperCase()",{})` |
/// | amount accessor | `.getAmount()` |
/// | date conversion | `MvelHelper.convertField("DATE",{})` |
/// | null | `null` |
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialect {
    pub(crate) case_fold: String,
    pub(crate) amount_accessor: String,
    pub(crate) date_conversion: String,
    pub(crate) null_literal: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::mvel()
    }
}

impl Dialect {
    #[must_use]
    pub fn mvel() -> Self {
        Self {
            case_fold: r#"MVEL.eval("toUpperCase()",{})"#.to_owned(),
            amount_accessor: ".getAmount()".to_owned(),
            date_conversion: r#"MvelHelper.convertField("DATE",{})"#.to_owned(),
            null_literal: "null".to_owned(),
        }
    }

    #[must_use]
    pub fn case_fold(&self) -> &str {
        &self.case_fold
    }

    #[must_use]
    pub fn amount_accessor(&self) -> &str {
        &self.amount_accessor
    }

    #[must_use]
    pub fn date_conversion(&self) -> &str {
        &self.date_conversion
    }

    #[must_use]
    pub fn null_literal(&self) -> &str {
        &self.null_literal
    }

    /// Check that every template can receive its operand.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (setting, template) in [
            ("case fold", &self.case_fold),
            ("date conversion", &self.date_conversion),
        ] {
            if !template.contains(PLACEHOLDER) {
                return Err(ConfigError::MissingPlaceholder {
                    setting,
                    template: template.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn fold(&self, operand: &str) -> String {
        self.case_fold.replacen(PLACEHOLDER, operand, 1)
    }

    pub(crate) fn date(&self, quoted: &str) -> String {
        self.date_conversion.replacen(PLACEHOLDER, quoted, 1)
    }
}
