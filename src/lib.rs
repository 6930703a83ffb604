//! Compiles rule-builder trees into MVEL expression text.
//!
//! A rule tree is a nest of [`Group`]s (AND / OR / NOT / pass-through) over
//! [`Condition`] leaves. [`translate`] walks it once, asks a
//! [`FieldResolver`] for each field's [`FieldType`], and renders every leaf
//! according to its operator and type: quoted strings, bare numbers and
//! booleans, money amounts through `.getAmount()`, case-insensitive
//! comparisons through a normalization call on both operands.
//!
//! ```
//! use ruletree::{field, not, translate, FieldCatalog, FieldType};
//!
//! let items = FieldCatalog::new()
//!     .field("discreteOrderItem", "product.manufacturer", FieldType::String)
//!     .field("discreteOrderItem", "product.model", FieldType::String);
//!
//! let rule = not([
//!     field("product.manufacturer").eq("test manufacturer"),
//!     field("product.model").eq("test model"),
//! ]);
//!
//! assert_eq!(
//!     translate("discreteOrderItem", &rule, &items).unwrap(),
//!     r#"!(discreteOrderItem.product.manufacturer=="test manufacturer"&&discreteOrderItem.product.model=="test model")"#
//! );
//! ```

mod parse;
mod render;
mod translate;
mod types;

pub use parse::ParseError;
pub use translate::translate;
pub use types::{
    and, field, not, or, pass, CachedResolver, Combinator, Condition, ConfigError, Dialect,
    FieldCatalog, FieldExpr, FieldResolver, FieldType, Group, Node, Operator, TranslateError,
    Translator, TranslatorBuilder, DEFAULT_CACHE_CAPACITY, PLACEHOLDER,
};
