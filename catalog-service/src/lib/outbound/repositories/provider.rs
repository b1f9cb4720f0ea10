use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::models::Provider;
use crate::domain::provider::models::ProviderFilter;
use crate::domain::provider::ports::ProviderRepository;

pub struct PostgresProviderRepository {
    pool: PgPool,
}

impl PostgresProviderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProviderRow {
    id: Uuid,
    name: String,
    country_code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProviderRow> for Provider {
    fn from(row: ProviderRow) -> Self {
        Provider {
            id: row.id,
            name: row.name,
            country_code: row.country_code,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProviderRepository for PostgresProviderRepository {
    async fn create(&self, provider: Provider) -> Result<Provider, ProviderError> {
        sqlx::query(
            r#"
            INSERT INTO providers (id, name, country_code, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(provider.id)
        .bind(&provider.name)
        .bind(&provider.country_code)
        .bind(provider.created_at)
        .bind(provider.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProviderError::Database(e.to_string()))?;

        Ok(provider)
    }

    async fn find(&self, filter: ProviderFilter) -> Result<Vec<Provider>, ProviderError> {
        let name_pattern = filter.name_contains.map(|name| format!("%{}%", name));

        let rows: Vec<ProviderRow> = sqlx::query_as(
            r#"
            SELECT id, name, country_code, created_at, updated_at
            FROM providers
            WHERE ($1::text IS NULL OR name LIKE $1)
              AND ($2::text IS NULL OR country_code = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(name_pattern)
        .bind(filter.country_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProviderError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Provider::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Provider>, ProviderError> {
        let row: Option<ProviderRow> = sqlx::query_as(
            r#"
            SELECT id, name, country_code, created_at, updated_at
            FROM providers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProviderError::Database(e.to_string()))?;

        Ok(row.map(Provider::from))
    }

    async fn update(&self, provider: Provider) -> Result<Provider, ProviderError> {
        let result = sqlx::query(
            r#"
            UPDATE providers
            SET name = $2, country_code = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(provider.id)
        .bind(&provider.name)
        .bind(&provider.country_code)
        .bind(provider.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProviderError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProviderError::NotFound(provider.id.to_string()));
        }

        Ok(provider)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProviderError> {
        let result = sqlx::query("DELETE FROM providers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| ProviderError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProviderError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
