//! # Plant Repository
//!
//! Owns the `plants` table and exposes create/read/update/delete over it.
//!
//! Each call checks a connection out of the pool and returns it before the
//! call completes. Create and update run inside one transaction each; a
//! failed write is rolled back before the error is returned.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, error, warn};

use super::config::DatabaseConfig;
use super::errors::{StoreError, StoreResult};
use super::model::{NewPlant, Plant, PlantPatch};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS plants (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    image TEXT,
    price REAL,
    is_in_stock BOOLEAN
)";

const SELECT_ALL: &str = "SELECT id, name, image, price, is_in_stock FROM plants ORDER BY id";

const SELECT_ONE: &str = "SELECT id, name, image, price, is_in_stock FROM plants WHERE id = ?";

const INSERT: &str = "INSERT INTO plants (name, image, price, is_in_stock) VALUES (?, ?, ?, ?)
    RETURNING id, name, image, price, is_in_stock";

const UPDATE: &str =
    "UPDATE plants SET name = ?, image = ?, price = ?, is_in_stock = ? WHERE id = ?";

const DELETE: &str = "DELETE FROM plants WHERE id = ?";

/// Repository over the `plants` table
#[derive(Debug, Clone)]
pub struct PlantRepository {
    pool: SqlitePool,
}

impl PlantRepository {
    /// Open the configured database and make sure the table exists
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = if config.is_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")?
        } else {
            SqliteConnectOptions::new()
                .filename(&config.path)
                .create_if_missing(true)
        };

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.pool_size());
        if config.is_memory() {
            // Closing the only connection would drop the database.
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        let repo = Self::from_pool(pool);
        repo.init_schema().await?;

        debug!(path = %config.path.display(), "plant store opened");
        Ok(repo)
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `plants` table if it is missing
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Every stored plant, in insertion order
    pub async fn list_all(&self) -> StoreResult<Vec<Plant>> {
        let plants = sqlx::query_as::<_, Plant>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(plants)
    }

    /// Insert a new plant and return it with its assigned id
    pub async fn create(&self, new_plant: NewPlant) -> StoreResult<Plant> {
        let in_stock = new_plant.in_stock();
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, Plant>(INSERT)
            .bind(new_plant.name)
            .bind(new_plant.image)
            .bind(new_plant.price)
            .bind(in_stock)
            .fetch_one(&mut *tx)
            .await;

        match inserted {
            Ok(plant) => {
                tx.commit().await.map_err(StoreError::classify)?;
                debug!(id = plant.id, "plant created");
                Ok(plant)
            }
            Err(err) => {
                let err = StoreError::classify(err);
                if let Err(rollback_err) = tx.rollback().await {
                    error!(
                        error = %rollback_err,
                        insert_error = %err,
                        "rollback after failed insert failed"
                    );
                    return Err(err);
                }
                if err.is_constraint() {
                    warn!(error = %err, "plant insert rejected, transaction rolled back");
                }
                Err(err)
            }
        }
    }

    /// Look up one plant
    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Plant>> {
        let plant = sqlx::query_as::<_, Plant>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(plant)
    }

    /// Apply a partial update.
    ///
    /// Returns `None` when no plant has this id.
    pub async fn update(&self, id: i64, patch: PlantPatch) -> StoreResult<Option<Plant>> {
        let mut tx = self.pool.begin().await?;

        let Some(mut plant) = sqlx::query_as::<_, Plant>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        patch.apply(&mut plant);

        sqlx::query(UPDATE)
            .bind(plant.name.as_deref())
            .bind(plant.image.as_deref())
            .bind(plant.price)
            .bind(plant.is_in_stock)
            .bind(plant.id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::classify)?;
        tx.commit().await.map_err(StoreError::classify)?;

        debug!(id, "plant updated");
        Ok(Some(plant))
    }

    /// Remove a plant. Returns whether a row was deleted.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            debug!(id, "plant deleted");
        }
        Ok(deleted)
    }

    /// Close the pool, waiting for checked-out connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
