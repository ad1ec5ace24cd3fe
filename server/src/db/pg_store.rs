// server/src/db/pg_store.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use shopsmart::{NewProductRecord, Product, ProductChanges, ProductId, ProductStore, StoreError, StoreResult};

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  name: String,
  description: Option<String>,
  price: f64,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      description: row.description,
      price: row.price,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}

// RowNotFound is the only driver error that means "no matching row".
fn map_sqlx_error(operation: &'static str, e: sqlx::Error) -> StoreError {
  match e {
    sqlx::Error::RowNotFound => StoreError::RecordNotFound,
    other => {
      error!(operation, "Database error: {}", other);
      StoreError::fault(other)
    }
  }
}

/// `ProductStore` over a `products` table in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  fn backend_tag(&self) -> &'static str {
    "postgres"
  }

  async fn find_all(&self) -> StoreResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(
      "SELECT id, name, description, price, created_at, updated_at FROM products ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(&self.pool)
    .await
    .map_err(|e| map_sqlx_error("find_all", e))?;

    Ok(rows.into_iter().map(Product::from).collect())
  }

  async fn find_by_id(&self, id: ProductId) -> StoreResult<Product> {
    let row: ProductRow = sqlx::query_as(
      "SELECT id, name, description, price, created_at, updated_at FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| map_sqlx_error("find_by_id", e))?;

    Ok(row.into())
  }

  async fn insert(&self, record: NewProductRecord) -> StoreResult<Product> {
    let row: ProductRow = sqlx::query_as(
      "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) \
       RETURNING id, name, description, price, created_at, updated_at",
    )
    .bind(record.name)
    .bind(record.description)
    .bind(record.price)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| map_sqlx_error("insert", e))?;

    debug!(product_id = row.id, "Inserted product row.");
    Ok(row.into())
  }

  async fn update(&self, id: ProductId, changes: ProductChanges) -> StoreResult<Product> {
    // One statement: absent columns keep their value, updated_at always moves.
    let set_description = changes.description.is_some();
    let row: ProductRow = sqlx::query_as(
      "UPDATE products SET \
         name = COALESCE($2, name), \
         description = CASE WHEN $3 THEN $4 ELSE description END, \
         price = COALESCE($5, price), \
         updated_at = NOW() \
       WHERE id = $1 \
       RETURNING id, name, description, price, created_at, updated_at",
    )
    .bind(id)
    .bind(changes.name)
    .bind(set_description)
    .bind(changes.description.flatten())
    .bind(changes.price)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| map_sqlx_error("update", e))?;

    debug!(product_id = row.id, "Updated product row.");
    Ok(row.into())
  }

  async fn delete(&self, id: ProductId) -> StoreResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| map_sqlx_error("delete", e))?;

    if result.rows_affected() == 0 {
      return Err(StoreError::RecordNotFound);
    }
    debug!(product_id = id, "Deleted product row.");
    Ok(())
  }
}
