use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductWithProvider;
use crate::domain::product::ports::ProductRepository;
use crate::domain::provider::models::Provider;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    price: Option<f64>,
    quantity: Option<i32>,
    category: String,
    provider_id: Uuid,
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
            quantity: row.quantity,
            category: row.category,
            provider_id: row.provider_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Product columns joined with the (nullable) owning provider's columns.
#[derive(FromRow)]
struct ProductWithProviderRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    price: Option<f64>,
    quantity: Option<i32>,
    category: String,
    provider_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    joined_provider_id: Option<Uuid>,
    joined_provider_name: Option<String>,
    joined_provider_country_code: Option<String>,
    joined_provider_created_at: Option<DateTime<Utc>>,
    joined_provider_updated_at: Option<DateTime<Utc>>,
}

impl From<ProductWithProviderRow> for ProductWithProvider {
    fn from(row: ProductWithProviderRow) -> Self {
        let provider = match (
            row.joined_provider_id,
            row.joined_provider_name,
            row.joined_provider_country_code,
            row.joined_provider_created_at,
            row.joined_provider_updated_at,
        ) {
            (Some(id), Some(name), Some(country_code), Some(created_at), Some(updated_at)) => {
                Some(Provider {
                    id,
                    name,
                    country_code,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        ProductWithProvider {
            product: Product {
                id: row.id,
                name: row.name,
                description: row.description,
                price: row.price,
                quantity: row.quantity,
                category: row.category,
                provider_id: row.provider_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            provider,
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        sqlx::query(
            r#"
            INSERT INTO products
                (id, name, description, price, quantity, category, provider_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.category)
        .bind(product.provider_id)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        Ok(product)
    }

    async fn find_with_provider(&self) -> Result<Vec<ProductWithProvider>, ProductError> {
        let rows: Vec<ProductWithProviderRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.name, p.description, p.price, p.quantity, p.category,
                   p.provider_id, p.created_at, p.updated_at,
                   pr.id AS joined_provider_id,
                   pr.name AS joined_provider_name,
                   pr.country_code AS joined_provider_country_code,
                   pr.created_at AS joined_provider_created_at,
                   pr.updated_at AS joined_provider_updated_at
            FROM products p
            LEFT JOIN providers pr ON pr.id = p.provider_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(ProductWithProvider::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, quantity, category, provider_id,
                   created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        Ok(row.map(Product::from))
    }

    async fn count(&self) -> Result<i64, ProductError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ProductError::Database(e.to_string()))
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, quantity = $5,
                category = $6, provider_id = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .bind(&product.category)
        .bind(product.provider_id)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
