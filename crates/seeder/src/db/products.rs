//! `PostgreSQL` store for catalog products.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use shop_seed_core::ProductId;

use super::{ProductStore, RepositoryError};
use crate::models::{NewProduct, Product};

/// Internal row type for the insert's `RETURNING` clause.
#[derive(Debug, sqlx::FromRow)]
struct InsertedRow {
    id: i32,
    created_at: DateTime<Utc>,
}

/// Product store backed by the `product` table.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Create a new store over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Column-major copy of a batch, one array per `UNNEST` argument.
#[derive(Default)]
struct Columns {
    names: Vec<String>,
    descriptions: Vec<String>,
    stocks: Vec<i32>,
    prices: Vec<Decimal>,
    categories: Vec<String>,
    images: Vec<String>,
    ratings: Vec<Decimal>,
}

impl Columns {
    fn from_rows(products: &[NewProduct]) -> Self {
        let mut columns = Self::default();
        for p in products {
            columns.names.push(p.name.clone());
            columns.descriptions.push(p.description.clone());
            columns.stocks.push(p.stock);
            columns.prices.push(p.price);
            columns.categories.push(p.category.as_str().to_owned());
            columns.images.push(p.image.clone());
            columns.ratings.push(p.rating);
        }
        columns
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    /// Insert the whole batch in a single statement.
    ///
    /// `WITH ORDINALITY` keeps the returned IDs in input order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a row violates a `CHECK`.
    /// Returns `RepositoryError::DataCorruption` if fewer rows come back than were sent.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn save_all(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, RepositoryError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let columns = Columns::from_rows(&products);

        let rows: Vec<InsertedRow> = sqlx::query_as(
            r"
            WITH input AS (
                SELECT *
                FROM UNNEST(
                    $1::text[], $2::text[], $3::int4[], $4::numeric[],
                    $5::text[], $6::text[], $7::numeric[]
                ) WITH ORDINALITY
                    AS t(name, description, stock, price, category, image, rating, ord)
            ),
            inserted AS (
                INSERT INTO product (name, description, stock, price, category, image, rating)
                SELECT name, description, stock, price, category, image, rating
                FROM input
                ORDER BY ord
                RETURNING id, created_at
            )
            SELECT id, created_at FROM inserted ORDER BY id
            ",
        )
        .bind(columns.names)
        .bind(columns.descriptions)
        .bind(columns.stocks)
        .bind(columns.prices)
        .bind(columns.categories)
        .bind(columns.images)
        .bind(columns.ratings)
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from_insert)?;

        if rows.len() != products.len() {
            return Err(RepositoryError::DataCorruption(format!(
                "inserted {} products but {} rows were returned",
                products.len(),
                rows.len()
            )));
        }

        debug!(inserted = rows.len(), "Product batch inserted");

        Ok(rows
            .into_iter()
            .zip(products)
            .map(|(row, product)| Product::from_new(ProductId::new(row.id), row.created_at, product))
            .collect())
    }
}
