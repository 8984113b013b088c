// ============================================================================
// Menu Infrastructure - PostgreSQL Category Repository
// File: crates/menu-infrastructure/src/database/postgres/category_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use menu_core::domain::{Category, NewCategory};
use menu_core::error::DomainError;
use menu_core::repositories::CategoryRepository;
use menu_shared::EntityId;

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    pub id: i32,
    pub slug: String,
    pub title: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            slug: row.slug,
            title: row.title,
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, DomainError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, slug, title FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error listing categories: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, slug, title FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error finding category by id: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DomainError> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, slug, title FROM categories WHERE slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error finding category by slug: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, DomainError> {
        info!("Creating category: {}", category.slug);

        let row: CategoryRow = sqlx::query_as(
            r#"
            INSERT INTO categories (slug, title)
            VALUES ($1, $2)
            RETURNING id, slug, title
            "#
        )
        .bind(&category.slug)
        .bind(&category.title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating category: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::CategorySlugAlreadyExists(category.slug.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        info!("Category created successfully: {}", row.id);
        Ok(row.into())
    }
}
