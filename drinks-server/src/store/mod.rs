use crate::models::{Drink, DrinkPatch, NewDrink};
use thiserror::Error;

pub mod sqlite;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Drink {0} not found")]
    NotFound(i64),
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("Stored recipe is not valid JSON: {0}")]
    Recipe(#[from] serde_json::Error),
}

/// Persistence interface for drinks.
///
/// Handlers only talk to this trait, so the concrete engine can be swapped
/// (and faked in tests) without touching the HTTP layer.
#[async_trait::async_trait]
pub trait DrinkStore: Send + Sync {
    /// All drinks in storage order
    async fn list_all(&self) -> Result<Vec<Drink>, StoreError>;

    /// Drink `id`, or [`StoreError::NotFound`]
    async fn get(&self, id: i64) -> Result<Drink, StoreError>;

    /// Persist a new drink and return it with its generated id
    async fn insert(&self, drink: NewDrink) -> Result<Drink, StoreError>;

    /// Apply the fields present in `patch` to drink `id`
    async fn update(&self, id: i64, patch: DrinkPatch) -> Result<Drink, StoreError>;

    /// Remove drink `id`
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Drop and recreate the underlying schema
    async fn reset(&self) -> Result<(), StoreError>;

    /// Performs a round trip to the backend
    async fn health_check(&self) -> Result<(), StoreError>;
}
