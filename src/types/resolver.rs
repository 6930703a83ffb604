use std::fmt;
use std::sync::Arc;

use moka::sync::Cache;

use super::field_type::FieldType;

/// Field metadata lookup consulted once per condition.
///
/// Given a base entity name (`order`, `customer`, `discreteOrderItem`) and a
/// dot-separated field path relative to it, returns the field's semantic
/// type, or `None` when the path does not exist on that entity.
///
/// Implementations must be side-effect free: translation may call
/// `resolve` any number of times, in any order.
pub trait FieldResolver {
    fn resolve(&self, entity: &str, path: &str) -> Option<FieldType>;
}

impl<R: FieldResolver + ?Sized> FieldResolver for &R {
    fn resolve(&self, entity: &str, path: &str) -> Option<FieldType> {
        (**self).resolve(entity, path)
    }
}

impl<R: FieldResolver + ?Sized> FieldResolver for Box<R> {
    fn resolve(&self, entity: &str, path: &str) -> Option<FieldType> {
        (**self).resolve(entity, path)
    }
}

impl<R: FieldResolver + ?Sized> FieldResolver for Arc<R> {
    fn resolve(&self, entity: &str, path: &str) -> Option<FieldType> {
        (**self).resolve(entity, path)
    }
}

/// Default number of (entity, path) answers a [`CachedResolver`] keeps.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Memoizes another resolver's answers per (entity, path), including misses.
///
/// Meant for resolvers backed by slow metadata lookups. Bounded: once
/// `max_capacity` answers are held, less used ones are evicted. Safe to
/// share across threads.
pub struct CachedResolver<R> {
    inner: R,
    cache: Cache<(String, String), Option<FieldType>>,
}

impl<R: FieldResolver> CachedResolver<R> {
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(inner: R, max_capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Number of lookups currently remembered.
    #[must_use]
    pub fn cached_len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: fmt::Debug> fmt::Debug for CachedResolver<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedResolver")
            .field("inner", &self.inner)
            .field("max_capacity", &self.cache.policy().max_capacity())
            .finish_non_exhaustive()
    }
}

impl<R: FieldResolver> FieldResolver for CachedResolver<R> {
    fn resolve(&self, entity: &str, path: &str) -> Option<FieldType> {
        self.cache
            .get_with((entity.to_owned(), path.to_owned()), || {
                self.inner.resolve(entity, path)
            })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Counting {
        calls: Cell<usize>,
    }

    impl FieldResolver for Counting {
        fn resolve(&self, _entity: &str, path: &str) -> Option<FieldType> {
            self.calls.set(self.calls.get() + 1);
            (path == "subTotal").then_some(FieldType::Monetary)
        }
    }

    #[test]
    fn cache_answers_repeat_lookups() {
        let cached = CachedResolver::new(Counting {
            calls: Cell::new(0),
        });
        assert_eq!(cached.resolve("order", "subTotal"), Some(FieldType::Monetary));
        assert_eq!(cached.resolve("order", "subTotal"), Some(FieldType::Monetary));
        assert_eq!(cached.cached_len(), 1);
        assert_eq!(cached.into_inner().calls.get(), 1);
    }

    #[test]
    fn cache_remembers_misses() {
        let cached = CachedResolver::new(Counting {
            calls: Cell::new(0),
        });
        assert_eq!(cached.resolve("order", "nope"), None);
        assert_eq!(cached.resolve("order", "nope"), None);
        assert_eq!(cached.into_inner().calls.get(), 1);
    }

    #[test]
    fn cache_keys_include_entity() {
        let cached = CachedResolver::new(Counting {
            calls: Cell::new(0),
        });
        cached.resolve("order", "subTotal");
        cached.resolve("customer", "subTotal");
        assert_eq!(cached.cached_len(), 2);
    }

    #[test]
    fn cache_is_bounded() {
        let cached = CachedResolver::with_capacity(
            Counting {
                calls: Cell::new(0),
            },
            100,
        );
        for i in 0..10_000 {
            assert_eq!(cached.resolve("order", &format!("bogus{i}")), None);
        }
        assert!(cached.cached_len() <= 100, "kept {}", cached.cached_len());
    }

    #[test]
    fn smart_pointers_delegate() {
        let boxed: Box<dyn FieldResolver> = Box::new(Counting {
            calls: Cell::new(0),
        });
        assert_eq!(boxed.resolve("order", "subTotal"), Some(FieldType::Monetary));
        let by_ref = &boxed;
        assert_eq!(by_ref.resolve("order", "total"), None);
    }
}
