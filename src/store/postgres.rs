//! PostgreSQL item store
//!
//! `price` is `NUMERIC` in the table. It is bound as `float8` (PostgreSQL
//! applies the assignment cast on write) and selected as `price::float8` so
//! rows decode straight into `f64`.

use sqlx::postgres::{PgPool, PgPoolOptions};

use super::config::DatabaseConfig;
use super::errors::StoreResult;
use super::item::{Item, ItemId, ItemPayload};
use super::ItemStore;

const INSERT_ITEM: &str =
    "INSERT INTO items (name, description, price) VALUES ($1, $2, $3) RETURNING id";
const SELECT_ITEMS: &str =
    "SELECT id, name, description, price::float8 AS price FROM items ORDER BY id";
const SELECT_ITEM: &str =
    "SELECT id, name, description, price::float8 AS price FROM items WHERE id = $1";
const UPDATE_ITEM: &str =
    "UPDATE items SET name = $1, description = $2, price = $3 WHERE id = $4";
const DELETE_ITEM: &str = "DELETE FROM items WHERE id = $1";

/// Item store backed by a `sqlx::PgPool`.
///
/// Each operation checks a connection out of the pool for a single statement;
/// the pool guard returns it on every exit path.
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and verify the database answers.
    ///
    /// Fails if no connection can be established, so callers can refuse to
    /// serve traffic.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = config.connect_options()?;
        let (host, port) = (options.get_host().to_string(), options.get_port());
        let dbname = options.get_database().unwrap_or_default().to_string();

        let pool = PgPoolOptions::new()
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.ping().await?;

        tracing::info!(%host, port, %dbname, "connected to database");

        Ok(store)
    }

    /// The underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl ItemStore for PgItemStore {
    #[tracing::instrument(skip(self, payload), fields(db.statement = INSERT_ITEM))]
    async fn create(&self, payload: &ItemPayload) -> StoreResult<Item> {
        let id: ItemId = sqlx::query_scalar(INSERT_ITEM)
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(payload.price)
            .fetch_one(&self.pool)
            .await?;

        Ok(Item::from_payload(id, payload.clone()))
    }

    #[tracing::instrument(skip(self), fields(db.statement = SELECT_ITEMS))]
    async fn list(&self) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(SELECT_ITEMS)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    #[tracing::instrument(skip(self), fields(db.statement = SELECT_ITEM))]
    async fn get(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(SELECT_ITEM)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    #[tracing::instrument(skip(self, payload), fields(db.statement = UPDATE_ITEM))]
    async fn update(&self, id: ItemId, payload: &ItemPayload) -> StoreResult<u64> {
        let rows = sqlx::query(UPDATE_ITEM)
            .bind(&payload.name)
            .bind(&payload.description)
            .bind(payload.price)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(rows, "updated item");
        Ok(rows)
    }

    #[tracing::instrument(skip(self), fields(db.statement = DELETE_ITEM))]
    async fn delete(&self, id: ItemId) -> StoreResult<u64> {
        let rows = sqlx::query(DELETE_ITEM)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(rows, "deleted item");
        Ok(rows)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
