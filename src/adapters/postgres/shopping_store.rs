//! PostgreSQL implementation of the storage ports.
//!
//! Reads go straight to the pool. Writes are staged per [`PostgresSession`]
//! and executed inside one transaction when that session's `save_changes`
//! runs.

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgConnection, PgPool, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::pending::{ChangeSet, PendingChange};
use crate::config::DatabaseConfig;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::shopping::{RegisteredItem, ShoppingItem, ShoppingList};
use crate::ports::{
    ProductRepository, RepositoryError, ShoppingRepository, StorageScope, UnitOfWork,
    UnitOfWorkFactory,
};

/// Opens staging sessions over a PostgreSQL pool.
#[derive(Clone)]
pub struct PostgresShoppingStore {
    pool: PgPool,
}

impl PostgresShoppingStore {
    /// Creates a new PostgresShoppingStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool sized from configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, RepositoryError> {
        PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
            .connect(&config.url)
            .await
            .map_err(|e| RepositoryError::unavailable(format!("Failed to connect: {}", e)))
    }

    /// Applies the bundled schema migrations.
    pub async fn migrate(pool: &PgPool) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| RepositoryError::database(format!("Migration failed: {}", e)))
    }

    /// Opens a session with nothing staged.
    pub fn session(&self) -> PostgresSession {
        PostgresSession {
            pool: self.pool.clone(),
            changes: ChangeSet::new(),
        }
    }
}

impl UnitOfWorkFactory for PostgresShoppingStore {
    fn begin(&self) -> StorageScope {
        let session = Arc::new(self.session());
        StorageScope {
            products: session.clone(),
            shopping: session.clone(),
            unit_of_work: session,
        }
    }
}

/// One staging scope: the product, shopping and unit-of-work ports sharing
/// a private change set. Dropping it discards whatever it staged.
pub struct PostgresSession {
    pool: PgPool,
    changes: ChangeSet,
}

#[async_trait]
impl ProductRepository for PostgresSession {
    async fn get_registered_items(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<RegisteredItem>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT name, quantity, last_price
            FROM registered_items
            WHERE user_id = $1
            ORDER BY created_at, normalized_name
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            RepositoryError::database(format!("Failed to fetch registered items: {}", e))
        })?;

        rows.iter().map(row_to_registered_item).collect()
    }

    async fn update_items(
        &self,
        user_id: &UserId,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError> {
        self.changes.stage(PendingChange::UpdateItems {
            user_id: user_id.clone(),
            items: items.to_vec(),
        });
        Ok(())
    }

    async fn register_items(
        &self,
        user_id: &UserId,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError> {
        self.changes.stage(PendingChange::RegisterItems {
            user_id: user_id.clone(),
            items: items.to_vec(),
        });
        Ok(())
    }
}

#[async_trait]
impl ShoppingRepository for PostgresSession {
    async fn get_current_shopping_list(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        let header = sqlx::query("SELECT name FROM current_shopping_lists WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::database(format!("Failed to fetch current list: {}", e))
            })?;

        let Some(header) = header else {
            return Ok(None);
        };
        let name: Option<String> = header
            .try_get("name")
            .map_err(|e| RepositoryError::CorruptRecord(e.to_string()))?;

        let rows = sqlx::query(
            r#"
            SELECT name, quantity, price, is_checked
            FROM current_shopping_list_items
            WHERE user_id = $1
            ORDER BY position
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            RepositoryError::database(format!("Failed to fetch current list items: {}", e))
        })?;

        let items = rows
            .iter()
            .map(row_to_shopping_item)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(ShoppingList::new(name, items)))
    }

    async fn record_shopping_list(
        &self,
        user_id: &UserId,
        shopping_list: &ShoppingList,
    ) -> Result<(), RepositoryError> {
        self.changes.stage(PendingChange::RecordShoppingList {
            user_id: user_id.clone(),
            shopping_list: shopping_list.clone(),
            recorded_at: Timestamp::now(),
        });
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for PostgresSession {
    async fn save_changes(&self) -> Result<u64, RepositoryError> {
        let changes = self.changes.take();
        if changes.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to begin transaction: {}", e)))?;

        let mut affected = 0;
        for change in &changes {
            affected += apply_change(&mut *tx, change).await?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to commit: {}", e)))?;

        tracing::debug!(changes = changes.len(), affected, "PostgreSQL changes committed");
        Ok(affected)
    }
}

async fn apply_change(conn: &mut PgConnection, change: &PendingChange) -> Result<u64, RepositoryError> {
    let mut affected = 0;
    match change {
        PendingChange::UpdateItems { user_id, items } => {
            for item in items {
                let result = sqlx::query(
                    r#"
                    UPDATE registered_items SET
                        quantity = COALESCE($3, quantity),
                        last_price = COALESCE($4, last_price),
                        updated_at = now()
                    WHERE user_id = $1 AND normalized_name = $2
                    "#,
                )
                .bind(user_id.as_str())
                .bind(item.normalized_name())
                .bind(item.quantity())
                .bind(item.price())
                .execute(&mut *conn)
                .await
                .map_err(|e| RepositoryError::database(format!("Failed to update item: {}", e)))?;
                affected += result.rows_affected();
            }
        }
        PendingChange::RegisterItems { user_id, items } => {
            for item in items {
                let result = sqlx::query(
                    r#"
                    INSERT INTO registered_items (user_id, normalized_name, name, quantity, last_price)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (user_id, normalized_name) DO UPDATE SET
                        quantity = COALESCE(EXCLUDED.quantity, registered_items.quantity),
                        last_price = COALESCE(EXCLUDED.last_price, registered_items.last_price),
                        updated_at = now()
                    "#,
                )
                .bind(user_id.as_str())
                .bind(item.normalized_name())
                .bind(item.name())
                .bind(item.quantity())
                .bind(item.price())
                .execute(&mut *conn)
                .await
                .map_err(|e| RepositoryError::database(format!("Failed to register item: {}", e)))?;
                affected += result.rows_affected();
            }
        }
        PendingChange::RecordShoppingList {
            user_id,
            shopping_list,
            recorded_at,
        } => {
            let list_id = Uuid::new_v4();
            sqlx::query(
                r#"
                INSERT INTO shopping_lists (id, user_id, name, recorded_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(list_id)
            .bind(user_id.as_str())
            .bind(shopping_list.name().unwrap_or_default())
            .bind(*recorded_at.as_datetime())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to record list: {}", e)))?;
            affected += 1;

            for (position, item) in shopping_list.iter().enumerate() {
                sqlx::query(
                    r#"
                    INSERT INTO shopping_list_items (list_id, position, name, quantity, price, is_checked)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(list_id)
                .bind(position as i32)
                .bind(item.name())
                .bind(item.quantity())
                .bind(item.price())
                .bind(item.is_checked())
                .execute(&mut *conn)
                .await
                .map_err(|e| {
                    RepositoryError::database(format!("Failed to record list item: {}", e))
                })?;
                affected += 1;
            }
        }
    }
    Ok(affected)
}

fn row_to_registered_item(row: &PgRow) -> Result<RegisteredItem, RepositoryError> {
    let corrupt = |e: sqlx::Error| RepositoryError::CorruptRecord(e.to_string());
    Ok(RegisteredItem::new(
        row.try_get::<String, _>("name").map_err(corrupt)?,
        row.try_get::<Option<String>, _>("quantity").map_err(corrupt)?,
        row.try_get::<Option<f32>, _>("last_price").map_err(corrupt)?,
    ))
}

fn row_to_shopping_item(row: &PgRow) -> Result<ShoppingItem, RepositoryError> {
    let corrupt = |e: sqlx::Error| RepositoryError::CorruptRecord(e.to_string());
    Ok(ShoppingItem::new(
        row.try_get::<String, _>("name").map_err(corrupt)?,
        row.try_get::<Option<String>, _>("quantity").map_err(corrupt)?,
        row.try_get::<Option<f32>, _>("price").map_err(corrupt)?,
        row.try_get::<bool, _>("is_checked").map_err(corrupt)?,
    ))
}
