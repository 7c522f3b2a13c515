//! Thread-safe recipe storage shared by all request handlers.
//!
//! The main components are:
//! - `RecipeStore`: a `DashMap` from `RecipeId` to `Recipe`, paired with an atomic
//!   counter that hands out ids. It is wrapped in `web::Data` (an `Arc`) in `main.rs`,
//!   so every Actix worker sees the same instance.
//! - `StoreError`: the failures a store operation can report.
//!
//! Each operation locks at most one shard of the map for its own duration. No lock is
//! ever held across two operations and none is exposed to callers.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use recipes_common::model::recipe::{Recipe, RecipeId};
use recipes_common::requests::CreateOrUpdateRecipeDto;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Failures reported by `RecipeStore`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The id is already mapped. Ids come from `generate_id`, so this only happens if
    /// a caller inserts with an id of its own choosing.
    #[error("recipe {0} already exists")]
    Conflict(RecipeId),
    #[error("recipe {0} not found")]
    NotFound(RecipeId),
    /// Every id up to `u64::MAX` has been handed out.
    #[error("recipe ids exhausted")]
    IdsExhausted,
}

/// Process-wide container for all recipes.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: DashMap<RecipeId, Recipe>,
    /// Last id handed out. Starts at 0, so the first generated id is 1.
    next_id: AtomicU64,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id. Concurrent callers never receive the same value and ids
    /// freed by `remove` are never handed out again.
    pub fn generate_id(&self) -> Result<RecipeId, StoreError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| StoreError::IdsExhausted)
    }

    /// Adds `recipe` under `id` unless the key is already taken.
    pub fn insert(&self, id: RecipeId, recipe: Recipe) -> Result<(), StoreError> {
        match self.recipes.entry(id) {
            Entry::Occupied(_) => Err(StoreError::Conflict(id)),
            Entry::Vacant(slot) => {
                slot.insert(recipe);
                Ok(())
            }
        }
    }

    /// Assigns a new id to `dto`, stores it and returns the stored record.
    pub fn create(&self, dto: CreateOrUpdateRecipeDto) -> Result<Recipe, StoreError> {
        let id = self.generate_id()?;
        let recipe = Recipe::from_request(id, dto);
        self.insert(id, recipe.clone())?;
        Ok(recipe)
    }

    /// Snapshot of every stored recipe, ordered by id.
    pub fn get_all(&self) -> Vec<Recipe> {
        self.filter(|_| true)
    }

    pub fn get(&self, id: RecipeId) -> Option<Recipe> {
        self.recipes.get(&id).map(|entry| entry.value().clone())
    }

    /// Returns `true` if a recipe was stored under `id` and has been removed.
    pub fn remove(&self, id: RecipeId) -> bool {
        self.recipes.remove(&id).is_some()
    }

    /// Replaces all mutable fields of the recipe stored under `id`.
    ///
    /// The record is rewritten while the shard's write guard is held, so a concurrent
    /// `get` sees either the old or the new values, never a mix of both.
    pub fn update(&self, id: RecipeId, dto: CreateOrUpdateRecipeDto) -> Option<Recipe> {
        let mut entry = self.recipes.get_mut(&id)?;
        entry.value_mut().apply(dto);
        Some(entry.value().clone())
    }

    /// Recipes whose title contains `query`, ignoring case.
    pub fn filter_by_title(&self, query: &str) -> Vec<Recipe> {
        self.filter(|recipe| recipe.title_contains(query))
    }

    /// Recipes with at least one ingredient whose name contains `query`, ignoring case.
    pub fn filter_by_ingredient(&self, query: &str) -> Vec<Recipe> {
        self.filter(|recipe| recipe.has_ingredient_like(query))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn filter<P>(&self, predicate: P) -> Vec<Recipe>
    where
        P: Fn(&Recipe) -> bool,
    {
        let mut matches: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by_key(|recipe| recipe.id);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use recipes_common::model::recipe::Ingredient;
    use std::collections::HashSet;
    use std::thread;

    fn dto(title: &str, ingredients: &[&str]) -> CreateOrUpdateRecipeDto {
        CreateOrUpdateRecipeDto {
            title: title.to_string(),
            ingredients: Some(
                ingredients
                    .iter()
                    .map(|name| Ingredient {
                        name: name.to_string(),
                        measure_unit: "g".to_string(),
                        quantity: 100,
                    })
                    .collect(),
            ),
            description: format!("How to make {title}"),
            image_link: None,
        }
    }

    fn titles(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_generate_id_starts_at_one() {
        let store = RecipeStore::new();
        assert_eq!(store.generate_id(), Ok(1));
        assert_eq!(store.generate_id(), Ok(2));
    }

    #[test]
    fn test_generate_id_reports_exhaustion() {
        let store = RecipeStore {
            next_id: AtomicU64::new(u64::MAX - 1),
            ..RecipeStore::new()
        };
        assert_eq!(store.generate_id(), Ok(u64::MAX));
        assert_eq!(store.generate_id(), Err(StoreError::IdsExhausted));
        assert_eq!(
            store.create(dto("Too late", &[])),
            Err(StoreError::IdsExhausted)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_generate_id_is_unique_across_threads() {
        let store = RecipeStore::new();
        let ids: HashSet<RecipeId> = (0..1000)
            .into_par_iter()
            .map(|_| store.generate_id().unwrap())
            .collect();
        assert_eq!(ids.len(), 1000);
        assert_eq!(ids, (1..=1000).collect());
    }

    #[test]
    fn test_concurrent_creates_have_no_gaps() {
        let store = RecipeStore::new();
        thread::scope(|scope| {
            for worker in 0..8 {
                let store = &store;
                scope.spawn(move || {
                    for n in 0..250 {
                        store.create(dto(&format!("r-{worker}-{n}"), &[])).unwrap();
                    }
                });
            }
        });

        let ids: Vec<RecipeId> = store.get_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=2000).collect::<Vec<_>>());
    }

    #[test]
    fn test_create_then_get_returns_same_fields() {
        let store = RecipeStore::new();
        let sent = dto("Pancakes", &["Flour", "Milk"]);
        let created = store.create(sent.clone()).unwrap();

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.id, 1);
        assert_eq!(fetched.title, sent.title);
        assert_eq!(fetched.ingredients, sent.ingredients);
        assert_eq!(fetched.description, sent.description);
        assert_eq!(fetched.image_link, sent.image_link);
    }

    #[test]
    fn test_insert_conflict() {
        let store = RecipeStore::new();
        let recipe = Recipe::from_request(5, dto("Soup", &[]));
        assert_eq!(store.insert(5, recipe.clone()), Ok(()));
        assert_eq!(store.insert(5, recipe), Err(StoreError::Conflict(5)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_twice() {
        let store = RecipeStore::new();
        let id = store.create(dto("Salad", &[])).unwrap().id;
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let store = RecipeStore::new();
        let first = store.create(dto("One", &[])).unwrap().id;
        store.remove(first);
        let second = store.create(dto("Two", &[])).unwrap().id;
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_update_missing_does_not_create() {
        let store = RecipeStore::new();
        assert_eq!(store.update(42, dto("Ghost", &[])), None);
        assert!(store.get(42).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let store = RecipeStore::new();
        let id = store.create(dto("Old", &["Salt"])).unwrap().id;

        let replacement = CreateOrUpdateRecipeDto {
            title: "New".to_string(),
            ingredients: None,
            description: "rewritten".to_string(),
            image_link: Some("https://img.example/new.png".to_string()),
        };
        let updated = store.update(id, replacement.clone()).unwrap();
        assert_eq!(updated, Recipe::from_request(id, replacement));
        assert_eq!(store.get(id), Some(updated));
    }

    #[test]
    fn test_filter_by_title() {
        let store = RecipeStore::new();
        store.create(dto("Chocolate Cake", &[])).unwrap();
        store.create(dto("Vanilla Cake", &[])).unwrap();
        store.create(dto("Hot Chocolate", &[])).unwrap();

        assert_eq!(
            titles(&store.filter_by_title("choc")),
            vec!["Chocolate Cake", "Hot Chocolate"]
        );
        assert!(store.filter_by_title("pizza").is_empty());
    }

    #[test]
    fn test_filter_by_ingredient() {
        let store = RecipeStore::new();
        store.create(dto("Bread", &["Water", "All-Purpose Flour"])).unwrap();
        store.create(dto("Omelette", &["Egg"])).unwrap();
        store
            .create(CreateOrUpdateRecipeDto {
                ingredients: None,
                ..dto("Nothing", &[])
            })
            .unwrap();

        assert_eq!(titles(&store.filter_by_ingredient("flour")), vec!["Bread"]);
        assert!(store.filter_by_ingredient("butter").is_empty());
    }

    #[test]
    fn test_get_all_is_ordered_snapshot() {
        let store = RecipeStore::new();
        for title in ["a", "b", "c"] {
            store.create(dto(title, &[])).unwrap();
        }
        store.remove(2);
        let ids: Vec<RecipeId> = store.get_all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
