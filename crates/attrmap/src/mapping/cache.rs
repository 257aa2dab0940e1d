use super::Entity;
use crate::Result;

use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// Process-lifetime store of built entities, keyed by table identifier.
///
/// Reads take the shared lock only. A miss builds the entity with no lock
/// held, because building a parent re-enters the cache for its nested
/// entities, then inserts under the exclusive lock unless another caller got
/// there first. Concurrent misses on the same key may each build; only the
/// first insertion is kept and every caller receives that value.
#[derive(Debug, Default)]
pub(super) struct EntityCache {
    entities: RwLock<HashMap<String, Arc<Entity>>>,
}

impl EntityCache {
    pub(super) fn get(&self, table_id: &str) -> Option<Arc<Entity>> {
        self.entities.read().get(table_id).cloned()
    }

    pub(super) fn get_or_build(
        &self,
        table_id: &str,
        build: impl FnOnce() -> Result<Entity>,
    ) -> Result<Arc<Entity>> {
        if let Some(entity) = self.get(table_id) {
            tracing::trace!(table_id, "entity cache hit");
            return Ok(entity);
        }

        tracing::debug!(table_id, "entity cache miss; building");

        // A failed build leaves the key vacant so a later call starts over.
        let built = Arc::new(build()?);

        let mut entities = self.entities.write();
        if let Some(existing) = entities.get(table_id) {
            tracing::debug!(table_id, "entity inserted concurrently; discarding build");
            return Ok(existing.clone());
        }

        entities.insert(table_id.to_string(), built.clone());
        Ok(built)
    }

    pub(super) fn len(&self) -> usize {
        self.entities.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mapping::MappingId, TypeId};

    use indexmap::IndexMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn entity(table_id: &str) -> Entity {
        Entity {
            mapping: MappingId(0),
            table_id: table_id.to_string(),
            element_ty: TypeId(0),
            entity_ty: TypeId(0),
            tables: vec![],
            members: IndexMap::new(),
        }
    }

    #[test]
    fn builds_once_per_key() {
        let cache = EntityCache::default();
        let builds = AtomicUsize::new(0);
        let build = || {
            builds.fetch_add(1, Ordering::SeqCst);
            Ok(entity("Customers"))
        };

        let first = cache.get_or_build("Customers", build).unwrap();
        let second = cache.get_or_build("Customers", build).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_build_is_not_cached() {
        let cache = EntityCache::default();

        let err = cache
            .get_or_build("Customers", || Err(crate::err!("boom")))
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(cache.get("Customers").is_none());

        let entity = cache
            .get_or_build("Customers", || Ok(entity("Customers")))
            .unwrap();
        assert_eq!(entity.table_id(), "Customers");
    }

    #[test]
    fn first_insertion_wins() {
        let cache = EntityCache::default();

        // A build that races with another caller: by the time it returns,
        // the key has been filled in.
        let raced = cache
            .get_or_build("Customers", || {
                let winner = cache.get_or_build("Customers", || Ok(entity("winner")))?;
                assert_eq!(winner.table_id(), "winner");
                Ok(entity("loser"))
            })
            .unwrap();

        assert_eq!(raced.table_id(), "winner");
        assert_eq!(cache.get("Customers").unwrap().table_id(), "winner");
    }
}
