use std::fmt;
use std::str::FromStr;

use crate::parse::ParseError;

/// Comparison tokens emitted into the generated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    pub(crate) fn is_equality(self) -> bool {
        matches!(self, CompareOp::Eq | CompareOp::Neq)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::Neq => write!(f, "!="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Gte => write!(f, ">="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Lte => write!(f, "<="),
        }
    }
}

/// String methods invoked on the field access expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringMethod {
    Contains,
    StartsWith,
    EndsWith,
}

impl StringMethod {
    pub(crate) fn name(self) -> &'static str {
        match self {
            StringMethod::Contains => "contains",
            StringMethod::StartsWith => "startsWith",
            StringMethod::EndsWith => "endsWith",
        }
    }
}

/// How an operator is rendered, independent of the field type it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// `field OP literal`
    Compare(CompareOp),
    /// `fold(field) OP fold("literal")`
    FoldedCompare(CompareOp),
    /// `[!]field.method("literal")`, optionally with both sides folded.
    Method {
        method: StringMethod,
        negated: bool,
        folded: bool,
    },
    /// `field==null` / `field!=null`; the literal is ignored.
    Null { negated: bool },
    /// `field OP other.field`; the literal is a field path.
    FieldCompare(CompareOp),
    /// `field>lo&&field<hi`, or with `>=`/`<=` when inclusive.
    Range { inclusive: bool },
}

/// Operators a condition can apply to its field.
///
/// Names follow the rule builder's wire vocabulary (`EQUALS`, `IEQUALS`,
/// `NOT_EQUAL_FIELD`, ...) and round-trip through [`FromStr`] and
/// [`Display`](fmt::Display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Operator {
    Equals,
    NotEqual,
    #[cfg_attr(feature = "serde", serde(rename = "IEQUALS"))]
    IEquals,
    #[cfg_attr(feature = "serde", serde(rename = "INOT_EQUAL"))]
    INotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Contains,
    NotContains,
    #[cfg_attr(feature = "serde", serde(rename = "ICONTAINS"))]
    IContains,
    #[cfg_attr(feature = "serde", serde(rename = "INOT_CONTAINS"))]
    INotContains,
    StartsWith,
    NotStartsWith,
    #[cfg_attr(feature = "serde", serde(rename = "ISTARTS_WITH"))]
    IStartsWith,
    #[cfg_attr(feature = "serde", serde(rename = "INOT_STARTS_WITH"))]
    INotStartsWith,
    EndsWith,
    NotEndsWith,
    #[cfg_attr(feature = "serde", serde(rename = "IENDS_WITH"))]
    IEndsWith,
    #[cfg_attr(feature = "serde", serde(rename = "INOT_ENDS_WITH"))]
    INotEndsWith,
    IsNull,
    IsNotNull,
    EqualsField,
    NotEqualField,
    GreaterThanField,
    GreaterOrEqualField,
    LessThanField,
    LessOrEqualField,
    Between,
    BetweenInclusive,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 30] = [
        Operator::Equals,
        Operator::NotEqual,
        Operator::IEquals,
        Operator::INotEqual,
        Operator::GreaterThan,
        Operator::GreaterOrEqual,
        Operator::LessThan,
        Operator::LessOrEqual,
        Operator::Contains,
        Operator::NotContains,
        Operator::IContains,
        Operator::INotContains,
        Operator::StartsWith,
        Operator::NotStartsWith,
        Operator::IStartsWith,
        Operator::INotStartsWith,
        Operator::EndsWith,
        Operator::NotEndsWith,
        Operator::IEndsWith,
        Operator::INotEndsWith,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::EqualsField,
        Operator::NotEqualField,
        Operator::GreaterThanField,
        Operator::GreaterOrEqualField,
        Operator::LessThanField,
        Operator::LessOrEqualField,
        Operator::Between,
        Operator::BetweenInclusive,
    ];

    /// The rule builder's name for this operator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "EQUALS",
            Operator::NotEqual => "NOT_EQUAL",
            Operator::IEquals => "IEQUALS",
            Operator::INotEqual => "INOT_EQUAL",
            Operator::GreaterThan => "GREATER_THAN",
            Operator::GreaterOrEqual => "GREATER_OR_EQUAL",
            Operator::LessThan => "LESS_THAN",
            Operator::LessOrEqual => "LESS_OR_EQUAL",
            Operator::Contains => "CONTAINS",
            Operator::NotContains => "NOT_CONTAINS",
            Operator::IContains => "ICONTAINS",
            Operator::INotContains => "INOT_CONTAINS",
            Operator::StartsWith => "STARTS_WITH",
            Operator::NotStartsWith => "NOT_STARTS_WITH",
            Operator::IStartsWith => "ISTARTS_WITH",
            Operator::INotStartsWith => "INOT_STARTS_WITH",
            Operator::EndsWith => "ENDS_WITH",
            Operator::NotEndsWith => "NOT_ENDS_WITH",
            Operator::IEndsWith => "IENDS_WITH",
            Operator::INotEndsWith => "INOT_ENDS_WITH",
            Operator::IsNull => "IS_NULL",
            Operator::IsNotNull => "IS_NOT_NULL",
            Operator::EqualsField => "EQUALS_FIELD",
            Operator::NotEqualField => "NOT_EQUAL_FIELD",
            Operator::GreaterThanField => "GREATER_THAN_FIELD",
            Operator::GreaterOrEqualField => "GREATER_OR_EQUAL_FIELD",
            Operator::LessThanField => "LESS_THAN_FIELD",
            Operator::LessOrEqualField => "LESS_OR_EQUAL_FIELD",
            Operator::Between => "BETWEEN",
            Operator::BetweenInclusive => "BETWEEN_INCLUSIVE",
        }
    }

    /// Whether the condition's value names another field rather than a literal.
    #[must_use]
    pub fn compares_fields(self) -> bool {
        matches!(self.shape(), Shape::FieldCompare(_))
    }

    pub(crate) fn shape(self) -> Shape {
        use StringMethod::{Contains, EndsWith, StartsWith};

        let method = |method, negated, folded| Shape::Method {
            method,
            negated,
            folded,
        };
        match self {
            Operator::Equals => Shape::Compare(CompareOp::Eq),
            Operator::NotEqual => Shape::Compare(CompareOp::Neq),
            Operator::IEquals => Shape::FoldedCompare(CompareOp::Eq),
            Operator::INotEqual => Shape::FoldedCompare(CompareOp::Neq),
            Operator::GreaterThan => Shape::Compare(CompareOp::Gt),
            Operator::GreaterOrEqual => Shape::Compare(CompareOp::Gte),
            Operator::LessThan => Shape::Compare(CompareOp::Lt),
            Operator::LessOrEqual => Shape::Compare(CompareOp::Lte),
            Operator::Contains => method(Contains, false, false),
            Operator::NotContains => method(Contains, true, false),
            Operator::IContains => method(Contains, false, true),
            Operator::INotContains => method(Contains, true, true),
            Operator::StartsWith => method(StartsWith, false, false),
            Operator::NotStartsWith => method(StartsWith, true, false),
            Operator::IStartsWith => method(StartsWith, false, true),
            Operator::INotStartsWith => method(StartsWith, true, true),
            Operator::EndsWith => method(EndsWith, false, false),
            Operator::NotEndsWith => method(EndsWith, true, false),
            Operator::IEndsWith => method(EndsWith, false, true),
            Operator::INotEndsWith => method(EndsWith, true, true),
            Operator::IsNull => Shape::Null { negated: false },
            Operator::IsNotNull => Shape::Null { negated: true },
            Operator::EqualsField => Shape::FieldCompare(CompareOp::Eq),
            Operator::NotEqualField => Shape::FieldCompare(CompareOp::Neq),
            Operator::GreaterThanField => Shape::FieldCompare(CompareOp::Gt),
            Operator::GreaterOrEqualField => Shape::FieldCompare(CompareOp::Gte),
            Operator::LessThanField => Shape::FieldCompare(CompareOp::Lt),
            Operator::LessOrEqualField => Shape::FieldCompare(CompareOp::Lte),
            Operator::Between => Shape::Range { inclusive: false },
            Operator::BetweenInclusive => Shape::Range { inclusive: true },
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseError::unknown("operator", s))
    }
}
