use crate::render::Scope;
use crate::types::{Combinator, Dialect, FieldResolver, Node, TranslateError};
use crate::Translator;

/// Where a node's rendering lands relative to the surrounding operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Nothing binds tighter around it: the root, or the sole content of `!( … )`.
    Standalone,
    /// An operand of an enclosing `&&` or `||`.
    Operand,
}

pub(crate) fn translate_tree<R: FieldResolver + ?Sized>(
    dialect: &Dialect,
    entity: &str,
    root: &Node,
    resolver: &R,
) -> Result<String, TranslateError> {
    let scope = scope(dialect, entity, resolver)?;
    emit(&scope, root, Position::Standalone)
}

pub(crate) fn translate_roots<R: FieldResolver + ?Sized>(
    dialect: &Dialect,
    entity: &str,
    roots: &[Node],
    resolver: &R,
) -> Result<String, TranslateError> {
    let scope = scope(dialect, entity, resolver)?;
    combine(&scope, Combinator::None, roots, Position::Standalone)
}

/// Translate with the default MVEL dialect.
///
/// ```
/// use ruletree::{and, field, or, translate, FieldCatalog, FieldType};
///
/// let order = FieldCatalog::new()
///     .field("order", "subTotal", FieldType::Monetary)
///     .field("order", "currency.defaultFlag", FieldType::Boolean)
///     .field("order", "locale.localeCode", FieldType::String);
///
/// let rule = and([
///     field("subTotal").gte("100"),
///     or([
///         field("currency.defaultFlag").eq("true"),
///         field("locale.localeCode").eq("my"),
///     ]),
/// ]);
///
/// assert_eq!(
///     translate("order", &rule, &order).unwrap(),
///     r#"order.subTotal.getAmount()>=100&&(order.currency.defaultFlag==true||order.locale.localeCode=="my")"#
/// );
/// ```
///
/// # Errors
///
/// See [`Translator::translate`].
pub fn translate<R: FieldResolver + ?Sized>(
    entity: &str,
    root: &Node,
    resolver: &R,
) -> Result<String, TranslateError> {
    Translator::new().translate(entity, root, resolver)
}

fn scope<'a, R: FieldResolver + ?Sized>(
    dialect: &'a Dialect,
    entity: &'a str,
    resolver: &'a R,
) -> Result<Scope<'a, R>, TranslateError> {
    crate::parse::field_path(entity).map_err(|_| TranslateError::InvalidFieldPath {
        path: entity.to_owned(),
    })?;
    Ok(Scope {
        dialect,
        entity,
        resolver,
    })
}

fn emit<R: FieldResolver + ?Sized>(
    scope: &Scope<'_, R>,
    node: &Node,
    position: Position,
) -> Result<String, TranslateError> {
    match node {
        Node::Condition(condition) => scope.condition(condition),
        Node::Group(group) => combine(scope, group.combinator, &group.children, position),
    }
}

fn combine<R: FieldResolver + ?Sized>(
    scope: &Scope<'_, R>,
    combinator: Combinator,
    children: &[Node],
    position: Position,
) -> Result<String, TranslateError> {
    match (combinator, children) {
        (_, []) => Err(TranslateError::EmptyGroup { combinator }),
        (Combinator::None, [only]) => emit(scope, only, position),
        (Combinator::And | Combinator::None, _) => join(scope, children, "&&"),
        (Combinator::Or, _) => {
            let joined = join(scope, children, "||")?;
            Ok(match position {
                Position::Standalone => joined,
                Position::Operand => format!("({joined})"),
            })
        }
        (Combinator::Not, [only]) => Ok(format!("!({})", emit(scope, only, Position::Standalone)?)),
        (Combinator::Not, _) => Ok(format!("!({})", join(scope, children, "&&")?)),
    }
}

fn join<R: FieldResolver + ?Sized>(
    scope: &Scope<'_, R>,
    children: &[Node],
    separator: &str,
) -> Result<String, TranslateError> {
    let rendered = children
        .iter()
        .map(|child| emit(scope, child, Position::Operand))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(separator))
}
