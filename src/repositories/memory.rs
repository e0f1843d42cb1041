//! Colección en memoria compartida por todos los repositorios
//!
//! Un `Vec` protegido por `RwLock` por colección. Cada operación toma el lock
//! una sola vez, así que las mutaciones de un registro son atómicas.

use tokio::sync::RwLock;

pub struct MemoryCollection<T> {
    name: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T: Clone + Send + Sync> MemoryCollection<T> {
    pub fn with_records(name: &'static str, records: Vec<T>) -> Self {
        Self {
            name,
            records: RwLock::new(records),
        }
    }

    pub async fn push(&self, record: T) -> T {
        let mut records = self.records.write().await;
        records.push(record.clone());
        log::debug!("💾 {}: {} registros", self.name, records.len());
        record
    }

    pub async fn all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.read().await.iter().find(|r| predicate(r)).cloned()
    }

    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Aplica `apply` al primer registro que cumpla `predicate`, bajo el lock de escritura
    pub async fn update_first<P, F>(&self, predicate: P, apply: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| predicate(r))?;
        apply(record);
        Some(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_push_find_and_filter_keep_insertion_order() {
        let collection = MemoryCollection::with_records("numbers", Vec::new());
        for n in [3, 1, 2] {
            collection.push(n).await;
        }
        assert_eq!(collection.all().await, vec![3, 1, 2]);
        assert_eq!(collection.find(|n| *n < 3).await, Some(1));
        assert_eq!(collection.filter(|n| *n != 1).await, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_update_first_returns_none_when_missing() {
        let collection = MemoryCollection::with_records("numbers", vec![1, 2]);
        assert_eq!(collection.update_first(|n| *n == 9, |n| *n += 1).await, None);
        assert_eq!(collection.update_first(|n| *n == 2, |n| *n += 10).await, Some(12));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_are_not_lost() {
        let collection = Arc::new(MemoryCollection::with_records("counter", vec![0u32]));
        let mut handles = Vec::new();
        for _ in 0..50 {
            let collection = collection.clone();
            handles.push(tokio::spawn(async move {
                collection.update_first(|_| true, |n| *n += 1).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(collection.all().await, vec![50]);
    }
}
