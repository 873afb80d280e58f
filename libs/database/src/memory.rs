use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{RepositoryError, RepositoryResult},
    model::{Model, timestamp},
    search::{SearchParams, SearchResult, Searchable, SortKey, SortSpec},
};

/// Ordered in-memory store with filter/sort/paginate search.
///
/// Each method holds the lock for its own duration only. Sequences of calls
/// (check a natural key, then insert) are not atomic and can interleave with
/// concurrent writers.
pub struct InMemoryRepository<M> {
    items: Arc<RwLock<Vec<M>>>,
}

impl<M> Clone for InMemoryRepository<M> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<M: Model + Searchable> Default for InMemoryRepository<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model + Searchable> InMemoryRepository<M> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<M>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Append `entity` and return the stored copy.
    pub async fn insert(&self, entity: M) -> M {
        self.items.write().await.push(entity.clone());
        tracing::debug!(id = %entity.id(), "Inserted in-memory entity");
        entity
    }

    pub async fn find_by_id(&self, id: Uuid) -> RepositoryResult<M> {
        self.find_first(|item| item.id() == id)
            .await
            .ok_or(RepositoryError::NotFound(id))
    }

    pub async fn find_first(&self, predicate: impl Fn(&M) -> bool) -> Option<M> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| predicate(item))
            .cloned()
    }

    /// Snapshot of every stored entity in insertion order.
    pub async fn all(&self) -> Vec<M> {
        self.items.read().await.clone()
    }

    /// Replace the stored entity with the same id, keeping its `created_at`.
    pub async fn update(&self, mut entity: M) -> RepositoryResult<M> {
        let mut items = self.items.write().await;
        let stored = items
            .iter_mut()
            .find(|item| item.id() == entity.id())
            .ok_or(RepositoryError::NotFound(entity.id()))?;

        entity.set_timestamps(stored.created_at(), timestamp());
        *stored = entity.clone();
        Ok(entity)
    }

    pub async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(RepositoryError::NotFound(id))?;
        items.remove(index);
        Ok(())
    }

    pub async fn search(&self, params: &SearchParams) -> SearchResult<M> {
        let sort = params.resolve_sort(M::SORTABLE_FIELDS);

        let mut matched = self.filtered(params.filter()).await;
        sort_items(&mut matched, &sort);

        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(usize::try_from(params.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(params.per_page()).unwrap_or(usize::MAX))
            .collect();

        SearchResult::new(items, total, params, sort)
    }

    async fn filtered(&self, filter: Option<&str>) -> Vec<M> {
        let items = self.items.read().await;
        match filter {
            Some(filter) => items
                .iter()
                .filter(|item| item.matches_filter(filter))
                .cloned()
                .collect(),
            None => items.clone(),
        }
    }
}

/// Stable sort, so equal keys keep insertion order.
fn sort_items<M: Model + Searchable>(items: &mut [M], sort: &SortSpec) {
    items.sort_by(|a, b| {
        let ordering = match (a.sort_key(&sort.field), b.sort_key(&sort.field)) {
            (Some(left), Some(right)) => left.compare(&right),
            _ => SortKey::Timestamp(a.created_at()).compare(&SortKey::Timestamp(b.created_at())),
        };
        sort.direction.apply(ordering)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    impl Item {
        fn new(name: &str, created_at: DateTime<Utc>) -> Self {
            Self {
                id: Uuid::now_v7(),
                name: name.to_string(),
                created_at,
                updated_at: created_at,
            }
        }
    }

    impl Model for Item {
        fn id(&self) -> Uuid {
            self.id
        }

        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn updated_at(&self) -> DateTime<Utc> {
            self.updated_at
        }

        fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
            self.created_at = created_at;
            self.updated_at = updated_at;
        }
    }

    impl Searchable for Item {
        const SORTABLE_FIELDS: &'static [&'static str] = &["name", "created_at"];

        fn filter_text(&self) -> &str {
            &self.name
        }

        fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
            match field {
                "name" => Some(SortKey::Text(&self.name)),
                "created_at" => Some(SortKey::Timestamp(self.created_at)),
                _ => None,
            }
        }
    }

    async fn seeded(names: &[&str]) -> InMemoryRepository<Item> {
        let repo = InMemoryRepository::new();
        let base = timestamp();
        for (offset, name) in names.iter().enumerate() {
            repo.insert(Item::new(name, base + Duration::seconds(offset as i64)))
                .await;
        }
        repo
    }

    fn names(result: &SearchResult<Item>) -> Vec<&str> {
        result.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let repo = InMemoryRepository::new();
        let item = repo.insert(Item::new("first", timestamp())).await;

        let found = repo.find_by_id(item.id).await.unwrap();
        assert_eq!(found, item);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo: InMemoryRepository<Item> = InMemoryRepository::new();
        let id = Uuid::now_v7();

        let err = repo.find_by_id(id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(missing) if missing == id));
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[tokio::test]
    async fn test_update_preserves_created_at() {
        let repo = InMemoryRepository::new();
        let created = timestamp() - Duration::hours(1);
        let item = repo.insert(Item::new("before", created)).await;

        let mut changed = item.clone();
        changed.name = "after".to_string();
        changed.created_at = timestamp() + Duration::days(1);

        let updated = repo.update(changed).await.unwrap();
        assert_eq!(updated.name, "after");
        assert_eq!(updated.created_at, created);
        assert!(updated.updated_at > item.updated_at);
        assert_eq!(repo.find_by_id(item.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryRepository::new();
        let item = Item::new("ghost", timestamp());
        let err = repo.update(item.clone()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(id) if id == item.id));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = seeded(&["a", "b"]).await;
        let first = repo.all().await[0].clone();

        repo.delete(first.id).await.unwrap();
        assert!(repo.find_by_id(first.id).await.is_err());
        assert_eq!(repo.all().await.len(), 1);

        let err = repo.delete(first.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_search_without_filter_returns_all_newest_first() {
        let repo = seeded(&["first", "second", "third"]).await;

        let result = repo.search(&SearchParams::new()).await;
        assert_eq!(names(&result), vec!["third", "second", "first"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.per_page, 15);
        assert_eq!(result.last_page, 1);
        assert_eq!(result.sort, "created_at");
        assert_eq!(result.filter, None);
    }

    #[tokio::test]
    async fn test_search_filter_is_case_insensitive() {
        let repo = seeded(&["test", "a", "TEST", "TeSt"]).await;

        let result = repo.search(&SearchParams::new().with_filter("TEST")).await;
        assert_eq!(names(&result), vec!["TeSt", "TEST", "test"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.filter.as_deref(), Some("TEST"));
    }

    #[tokio::test]
    async fn test_search_unknown_sort_falls_back_to_default() {
        let repo = seeded(&["b", "a", "c"]).await;

        let params = SearchParams::new().with_sort("fake", "asc");
        let result = repo.search(&params).await;
        assert_eq!(names(&result), vec!["c", "a", "b"]);
        assert_eq!(result.sort, "created_at");
        assert_eq!(result.sort_dir, crate::SortDirection::Desc);
    }

    #[tokio::test]
    async fn test_search_sort_filter_and_paginate() {
        let repo = seeded(&["a", "AA", "Aa", "b", "c"]).await;

        let params = SearchParams::new()
            .with_page(1, 2)
            .with_sort("name", "asc")
            .with_filter("a");
        let result = repo.search(&params).await;
        assert_eq!(names(&result), vec!["AA", "Aa"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.last_page, 2);

        let params = SearchParams::new()
            .with_page(2, 2)
            .with_sort("name", "asc")
            .with_filter("a");
        assert_eq!(names(&repo.search(&params).await), vec!["a"]);

        let params = SearchParams::new()
            .with_page(1, 2)
            .with_sort("name", "desc")
            .with_filter("a");
        assert_eq!(names(&repo.search(&params).await), vec!["a", "Aa"]);
    }

    #[tokio::test]
    async fn test_search_page_beyond_last_is_empty() {
        let repo = seeded(&["a", "b", "c"]).await;

        let result = repo.search(&SearchParams::new().with_page(5, 2)).await;
        assert!(result.items.is_empty());
        assert_eq!(result.total, 3);
        assert_eq!(result.last_page, 2);
        assert_eq!(result.current_page, 5);
    }

    #[tokio::test]
    async fn test_search_sort_is_stable_for_equal_keys() {
        let repo = InMemoryRepository::new();
        let at = timestamp();
        let first = repo.insert(Item::new("same", at)).await;
        let second = repo.insert(Item::new("same", at)).await;

        for dir in ["asc", "desc"] {
            let result = repo
                .search(&SearchParams::new().with_sort("name", dir))
                .await;
            let ids: Vec<Uuid> = result.items.iter().map(|i| i.id).collect();
            assert_eq!(ids, vec![first.id, second.id]);
        }
    }
}
