use super::{DrinkStore, StoreError};
use crate::config::DatabaseConfig;
use crate::models::{Drink, DrinkPatch, NewDrink, Recipe};
use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

const DROP_TABLE: &str = "DROP TABLE IF EXISTS drinks";

const CREATE_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS drinks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    recipe TEXT NOT NULL
)"#;

/// SQLite-backed drink store
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database described by `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        debug!(
            "Connected to {} with up to {} connections",
            config.url, config.max_connections
        );
        Ok(Self { pool })
    }

    fn drink_from_row(row: &SqliteRow) -> Result<Drink, StoreError> {
        let recipe: String = row.try_get("recipe")?;
        Ok(Drink {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            recipe: serde_json::from_str(&recipe)?,
        })
    }

    fn recipe_text(recipe: &Recipe) -> Result<String, StoreError> {
        Ok(serde_json::to_string(recipe)?)
    }
}

#[async_trait]
impl DrinkStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Drink>, StoreError> {
        let rows = sqlx::query("SELECT id, title, recipe FROM drinks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(Self::drink_from_row).collect()
    }

    async fn get(&self, id: i64) -> Result<Drink, StoreError> {
        let row = sqlx::query("SELECT id, title, recipe FROM drinks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;
        Self::drink_from_row(&row)
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, StoreError> {
        let recipe = Self::recipe_text(&drink.recipe)?;
        let row = sqlx::query("INSERT INTO drinks (title, recipe) VALUES (?, ?) RETURNING id")
            .bind(&drink.title)
            .bind(recipe)
            .fetch_one(&self.pool)
            .await?;
        Ok(Drink {
            id: row.try_get("id")?,
            title: drink.title,
            recipe: drink.recipe,
        })
    }

    async fn update(&self, id: i64, patch: DrinkPatch) -> Result<Drink, StoreError> {
        let recipe = patch.recipe.as_ref().map(Self::recipe_text).transpose()?;
        let row = sqlx::query(
            "UPDATE drinks SET title = COALESCE(?, title), recipe = COALESCE(?, recipe) \
             WHERE id = ? RETURNING id, title, recipe",
        )
        .bind(patch.title)
        .bind(recipe)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;
        Self::drink_from_row(&row)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        sqlx::query(DROP_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        info!("Drinks table recreated");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
