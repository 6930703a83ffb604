//! Leaf rendering: one condition to one comparison expression.

use crate::types::{CompareOp, Condition, Dialect, FieldResolver, FieldType, Shape, TranslateError};

/// Resolution context shared by every leaf of one translation.
pub(crate) struct Scope<'a, R: ?Sized> {
    pub(crate) dialect: &'a Dialect,
    pub(crate) entity: &'a str,
    pub(crate) resolver: &'a R,
}

/// Which (operator shape, field type) pairs have a rendering.
///
/// Keep this free of wildcard arms: every new shape or field type must be
/// paired explicitly.
fn permits(shape: Shape, ty: FieldType) -> bool {
    use FieldType::{Boolean, Date, FieldReference, Monetary, Numeric, String};

    match (shape, ty) {
        (Shape::Compare(op), String | Boolean) => op.is_equality(),
        (Shape::Compare(_), Numeric | Monetary | Date) => true,
        (Shape::Compare(_), FieldReference) => false,

        (Shape::FoldedCompare(_) | Shape::Method { .. }, String) => true,
        (
            Shape::FoldedCompare(_) | Shape::Method { .. },
            Boolean | Numeric | Monetary | Date | FieldReference,
        ) => false,

        (Shape::Null { .. }, String | Boolean | Numeric | Monetary | Date | FieldReference) => {
            true
        }

        (Shape::FieldCompare(op), String | Boolean | FieldReference) => op.is_equality(),
        (Shape::FieldCompare(_), Numeric | Monetary | Date) => true,

        (Shape::Range { .. }, Numeric | Monetary | Date) => true,
        (Shape::Range { .. }, String | Boolean | FieldReference) => false,
    }
}

impl<R: FieldResolver + ?Sized> Scope<'_, R> {
    pub(crate) fn condition(&self, condition: &Condition) -> Result<String, TranslateError> {
        let shape = condition.operator.shape();
        let ty = self.resolve(&condition.field)?;
        self.check(condition, shape, ty)?;
        let lhs = self.access(&condition.field, ty);

        let rendered = match shape {
            Shape::Compare(op) => {
                let literal = self.literal(condition, ty, &condition.value)?;
                format!("{lhs}{op}{literal}")
            }
            Shape::FoldedCompare(op) => {
                let literal = quote(&condition.value);
                format!(
                    "{}{op}{}",
                    self.dialect.fold(&lhs),
                    self.dialect.fold(&literal)
                )
            }
            Shape::Method {
                method,
                negated,
                folded,
            } => {
                let literal = quote(&condition.value);
                let (receiver, argument) = if folded {
                    (self.dialect.fold(&lhs), self.dialect.fold(&literal))
                } else {
                    (lhs, literal)
                };
                let bang = if negated { "!" } else { "" };
                format!("{bang}{receiver}.{}({argument})", method.name())
            }
            Shape::Null { negated } => {
                let op = if negated { CompareOp::Neq } else { CompareOp::Eq };
                format!(
                    "{}{op}{}",
                    self.path(&condition.field),
                    self.dialect.null_literal()
                )
            }
            Shape::FieldCompare(op) => {
                let other = condition.value.trim();
                let other_ty = self.resolve(other)?;
                self.check(condition, shape, other_ty)?;
                if !comparable(ty, other_ty) {
                    return Err(TranslateError::UnsupportedOperatorForType {
                        operator: condition.operator,
                        field_type: other_ty,
                        path: other.to_owned(),
                    });
                }
                format!("{lhs}{op}{}", self.access(other, other_ty))
            }
            Shape::Range { inclusive } => {
                let (low, high) =
                    crate::parse::range(&condition.value).map_err(|_| TranslateError::MalformedLiteral {
                        path: condition.field.clone(),
                        literal: condition.value.clone(),
                        expected: "a range 'low,high'",
                    })?;
                let low = self.literal(condition, ty, low)?;
                let high = self.literal(condition, ty, high)?;
                let (lower, upper) = if inclusive {
                    (CompareOp::Gte, CompareOp::Lte)
                } else {
                    (CompareOp::Gt, CompareOp::Lt)
                };
                format!("{lhs}{lower}{low}&&{lhs}{upper}{high}")
            }
        };

        tracing::trace!(
            field = %condition.field,
            operator = %condition.operator,
            field_type = %ty,
            "rendered condition"
        );
        Ok(rendered)
    }

    fn resolve(&self, path: &str) -> Result<FieldType, TranslateError> {
        crate::parse::field_path(path).map_err(|_| TranslateError::InvalidFieldPath {
            path: path.to_owned(),
        })?;
        self.resolver
            .resolve(self.entity, path)
            .ok_or_else(|| TranslateError::UnknownField {
                entity: self.entity.to_owned(),
                path: path.to_owned(),
            })
    }

    fn check(&self, condition: &Condition, shape: Shape, ty: FieldType) -> Result<(), TranslateError> {
        if permits(shape, ty) {
            Ok(())
        } else {
            Err(unsupported(condition, ty))
        }
    }

    fn path(&self, path: &str) -> String {
        format!("{}.{path}", self.entity)
    }

    /// `entity.path`, plus the amount accessor for money.
    fn access(&self, path: &str, ty: FieldType) -> String {
        match ty {
            FieldType::Monetary => format!("{}{}", self.path(path), self.dialect.amount_accessor()),
            FieldType::String
            | FieldType::Boolean
            | FieldType::Numeric
            | FieldType::Date
            | FieldType::FieldReference => self.path(path),
        }
    }

    /// Right-hand literal rendered for a field of type `ty`.
    fn literal(&self, condition: &Condition, ty: FieldType, raw: &str) -> Result<String, TranslateError> {
        let malformed = |expected| TranslateError::MalformedLiteral {
            path: condition.field.clone(),
            literal: raw.to_owned(),
            expected,
        };
        match ty {
            FieldType::String => Ok(quote(raw)),
            FieldType::Boolean => crate::parse::boolean(raw.trim())
                .map(|b| b.to_string())
                .map_err(|_| malformed("'true' or 'false'")),
            FieldType::Numeric | FieldType::Monetary => crate::parse::number(raw.trim())
                .map(str::to_owned)
                .map_err(|_| malformed("a decimal number")),
            FieldType::Date => crate::parse::date(raw.trim())
                .map(|date| self.dialect.date(&quote(date)))
                .map_err(|_| malformed("a date 'YYYY-MM-DD[THH:MM[:SS]]'")),
            // Unreachable: permits() rejects every literal-taking shape here.
            FieldType::FieldReference => Err(unsupported(condition, ty)),
        }
    }
}

fn unsupported(condition: &Condition, ty: FieldType) -> TranslateError {
    TranslateError::UnsupportedOperatorForType {
        operator: condition.operator,
        field_type: ty,
        path: condition.field.clone(),
    }
}

/// Whether two fields' values can meet in one comparison. Money compares
/// through its amount, so it pairs with plain numbers.
fn comparable(left: FieldType, right: FieldType) -> bool {
    use FieldType::{Monetary, Numeric};

    left == right || matches!((left, right), (Numeric, Monetary) | (Monetary, Numeric))
}

/// Double-quote a string literal, escaping what would end or corrupt it.
pub(crate) fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
