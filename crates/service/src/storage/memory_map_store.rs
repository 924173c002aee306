use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

struct Entries<K, V> {
    order: Vec<K>,
    map: HashMap<K, V>,
}

/// Generic in-memory key-value map that remembers insertion order.
///
/// All access goes through one `RwLock`: readers share it, every mutation
/// holds the write guard for its whole read-modify-write.
pub struct MemoryMapStore<K, V> {
    inner: RwLock<Entries<K, V>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: RwLock::new(Entries { order: Vec::new(), map: HashMap::new() }) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// List all entries as `(key, value)` pairs in insertion order.
    pub async fn list(&self) -> Vec<(K, V)> {
        let entries = self.inner.read().await;
        entries
            .order
            .iter()
            .filter_map(|k| entries.map.get(k).map(|v| (k.clone(), v.clone())))
            .collect()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.inner.read().await;
        entries.map.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Insert a value. New keys are appended; existing keys keep their position.
    /// Returns the previous value if the key was present.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut entries = self.inner.write().await;
        let previous = entries.map.insert(key.clone(), value);
        if previous.is_none() {
            entries.order.push(key);
        }
        previous
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, key: &K) -> bool {
        let mut entries = self.inner.write().await;
        if entries.map.remove(key).is_none() {
            return false;
        }
        entries.order.retain(|k| k != key);
        true
    }

    /// Mutate the value stored under `key` in place under the write lock.
    /// Returns `None` when the key is absent.
    pub async fn update<F, R>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&mut V) -> R,
    {
        let mut entries = self.inner.write().await;
        entries.map.get_mut(key).map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_map_store_crud_keeps_order() {
        let store = MemoryMapStore::<String, String>::new();

        // initially empty
        assert!(store.is_empty().await);
        assert_eq!(store.list().await.len(), 0);

        assert_eq!(store.insert("b".into(), "1".into()).await, None);
        assert_eq!(store.insert("a".into(), "2".into()).await, None);
        assert_eq!(store.insert("c".into(), "3".into()).await, None);
        let keys: Vec<String> = store.list().await.into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);

        // overwrite keeps position
        assert_eq!(store.insert("b".into(), "10".into()).await, Some("1".into()));
        let first = store.list().await.into_iter().next().unwrap();
        assert_eq!(first, ("b".to_string(), "10".to_string()));

        // update in place
        let len = store.update(&"a".into(), |v| { v.push('!'); v.len() }).await;
        assert_eq!(len, Some(2));
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("2!"));
        assert_eq!(store.update(&"zzz".into(), |v| v.clear()).await, None);

        // remove
        assert!(store.remove(&"a".into()).await);
        assert!(!store.remove(&"a".into()).await);
        let keys: Vec<String> = store.list().await.into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "c"]);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn concurrent_inserts_all_land() {
        let store = MemoryMapStore::<u32, u32>::new();
        let mut handles = Vec::new();
        for i in 0..32u32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move { store.insert(i, i * 2).await }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(store.len().await, 32);
        assert_eq!(store.get(&7).await, Some(14));
    }
}
