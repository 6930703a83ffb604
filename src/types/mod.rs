mod dialect;
mod error;
mod field_catalog;
mod field_type;
mod node;
mod operator;
mod resolver;
mod translator;

pub use dialect::{Dialect, PLACEHOLDER};
pub use error::{ConfigError, TranslateError};
pub use field_catalog::FieldCatalog;
pub use field_type::FieldType;
pub use node::{and, field, not, or, pass, Combinator, Condition, FieldExpr, Group, Node};
pub use operator::Operator;
pub(crate) use operator::{CompareOp, Shape};
pub use resolver::{CachedResolver, FieldResolver, DEFAULT_CACHE_CAPACITY};
pub use translator::{Translator, TranslatorBuilder};
