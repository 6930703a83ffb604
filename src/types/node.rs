use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use super::operator::Operator;
use crate::parse::ParseError;

/// Boolean joining semantics of a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Combinator {
    And,
    Or,
    /// Children are AND-ed, then the whole conjunction is negated.
    Not,
    /// No explicit connective. A single child passes through unchanged;
    /// several children are AND-ed.
    #[default]
    None,
}

impl Combinator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
            Combinator::Not => "NOT",
            Combinator::None => "NONE",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule builder sends a missing group operator as an empty string or as
/// the literal text `null`; both mean [`Combinator::None`].
impl FromStr for Combinator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(Combinator::And),
            "OR" => Ok(Combinator::Or),
            "NOT" => Ok(Combinator::Not),
            "NONE" | "null" | "" => Ok(Combinator::None),
            other => Err(ParseError::unknown("group operator", other)),
        }
    }
}

/// A node of a rule tree: either a group of child nodes or a single
/// field comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Node {
    Group(Group),
    Condition(Condition),
}

/// A combinator over an ordered list of children.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub combinator: Combinator,
    /// "At least N matching items". Carried for the caller; translation
    /// ignores it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub quantity: Option<u32>,
    pub children: Vec<Node>,
}

/// A single comparison of a field against a literal, another field, or null.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    /// Dot-separated path relative to the base entity, e.g. `category.name`.
    pub field: String,
    pub operator: Operator,
    /// Right-hand operand exactly as authored.
    pub value: String,
}

impl Group {
    #[must_use]
    pub fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            quantity: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }
}

impl Condition {
    #[must_use]
    pub fn new(field: &str, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            operator,
            value: value.into(),
        }
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}

/// `!node` wraps the node in a single-child `NOT` group.
impl Not for Node {
    type Output = Node;

    fn not(self) -> Node {
        not([self])
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Group(group) => write!(f, "{group}"),
            Node::Condition(condition) => write!(f, "{condition}"),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joiner = match self.combinator {
            Combinator::Or => " OR ",
            Combinator::And | Combinator::Not | Combinator::None => " AND ",
        };
        if self.combinator == Combinator::Not {
            f.write_str("(NOT ")?;
        }
        f.write_str("(")?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(joiner)?;
            }
            write!(f, "{child}")?;
        }
        f.write_str(")")?;
        if self.combinator == Combinator::Not {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.field, self.operator, self.value)
    }
}

/// Intermediate builder for conditions. Created by [`field()`].
#[derive(Debug, Clone)]
pub struct FieldExpr {
    path: String,
}

impl FieldExpr {
    /// Condition with an arbitrary operator.
    #[must_use]
    pub fn op(self, operator: Operator, value: impl Into<String>) -> Node {
        Node::Condition(Condition {
            field: self.path,
            operator,
            value: value.into(),
        })
    }

    #[must_use]
    pub fn eq(self, value: impl Into<String>) -> Node {
        self.op(Operator::Equals, value)
    }

    #[must_use]
    pub fn neq(self, value: impl Into<String>) -> Node {
        self.op(Operator::NotEqual, value)
    }

    #[must_use]
    pub fn iequals(self, value: impl Into<String>) -> Node {
        self.op(Operator::IEquals, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<String>) -> Node {
        self.op(Operator::GreaterThan, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<String>) -> Node {
        self.op(Operator::GreaterOrEqual, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<String>) -> Node {
        self.op(Operator::LessThan, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<String>) -> Node {
        self.op(Operator::LessOrEqual, value)
    }

    #[must_use]
    pub fn contains(self, value: impl Into<String>) -> Node {
        self.op(Operator::Contains, value)
    }

    #[must_use]
    pub fn is_null(self) -> Node {
        self.op(Operator::IsNull, "")
    }

    #[must_use]
    pub fn eq_field(self, other: &str) -> Node {
        self.op(Operator::EqualsField, other)
    }

    #[must_use]
    pub fn neq_field(self, other: &str) -> Node {
        self.op(Operator::NotEqualField, other)
    }

    /// Exclusive range; both bounds are literals of the field's type.
    #[must_use]
    pub fn between(self, low: &str, high: &str) -> Node {
        self.op(Operator::Between, format!("{low},{high}"))
    }
}

#[must_use]
pub fn field(path: &str) -> FieldExpr {
    FieldExpr {
        path: path.to_owned(),
    }
}

fn group(combinator: Combinator, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Group(Group {
        combinator,
        quantity: None,
        children: children.into_iter().collect(),
    })
}

#[must_use]
pub fn and(children: impl IntoIterator<Item = Node>) -> Node {
    group(Combinator::And, children)
}

#[must_use]
pub fn or(children: impl IntoIterator<Item = Node>) -> Node {
    group(Combinator::Or, children)
}

#[must_use]
pub fn not(children: impl IntoIterator<Item = Node>) -> Node {
    group(Combinator::Not, children)
}

/// Group without an explicit connective.
#[must_use]
pub fn pass(children: impl IntoIterator<Item = Node>) -> Node {
    group(Combinator::None, children)
}
