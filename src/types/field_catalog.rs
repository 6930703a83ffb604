use std::collections::HashMap;

use super::field_type::FieldType;
use super::resolver::FieldResolver;

/// In-memory [`FieldResolver`]: a fixed table of field types per entity.
///
/// Stands in for a metadata service when the set of rule-builder fields is
/// known up front, and for tests.
///
/// ```
/// use ruletree::{FieldCatalog, FieldResolver, FieldType};
///
/// let catalog = FieldCatalog::new()
///     .field("order", "subTotal", FieldType::Monetary)
///     .field("order", "locale.localeCode", FieldType::String);
///
/// assert_eq!(catalog.resolve("order", "subTotal"), Some(FieldType::Monetary));
/// assert_eq!(catalog.resolve("customer", "subTotal"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    entities: HashMap<String, HashMap<String, FieldType>>,
}

impl FieldCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any earlier type for the same path.
    #[must_use]
    pub fn field(mut self, entity: &str, path: &str, field_type: FieldType) -> Self {
        self.insert(entity, path, field_type);
        self
    }

    /// Mutable-reference version of [`field`](Self::field).
    pub fn insert(&mut self, entity: &str, path: &str, field_type: FieldType) {
        self.entities
            .entry(entity.to_owned())
            .or_default()
            .insert(path.to_owned(), field_type);
    }

    #[must_use]
    pub fn get(&self, entity: &str, path: &str) -> Option<FieldType> {
        self.entities.get(entity)?.get(path).copied()
    }

    /// Total number of fields across all entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the (path, type) pairs registered for one entity.
    pub fn fields_of<'a>(&'a self, entity: &str) -> impl Iterator<Item = (&'a str, FieldType)> + 'a {
        self.entities
            .get(entity)
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(path, ty)| (path.as_str(), *ty)))
    }
}

impl FieldResolver for FieldCatalog {
    fn resolve(&self, entity: &str, path: &str) -> Option<FieldType> {
        self.get(entity, path)
    }
}
