// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use menu_core::domain::{Category, MenuItem, NewMenuItem};
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;
use menu_core::validation::{FieldError, ValidationReport};
use menu_shared::EntityId;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping, category joined in
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i32,
    pub title: String,
    pub price: Decimal,
    pub inventory: i32,
    pub category_id: i32,
    pub category_slug: String,
    pub category_title: String,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            title: row.title,
            price: row.price,
            inventory: row.inventory,
            category: Category {
                id: row.category_id,
                slug: row.category_slug,
                title: row.category_title,
            },
        }
    }
}

fn map_write_error(e: sqlx::Error, item: &NewMenuItem) -> DomainError {
    error!("Database error writing menu item: {}", e);
    let msg = e.to_string();
    if msg.contains("foreign key") {
        DomainError::Validation(ValidationReport::single(FieldError::new(
            "category_id",
            "does_not_exist",
            format!("Invalid pk \"{}\" - object does not exist.", item.category_id),
        )))
    } else {
        DomainError::DatabaseError(msg)
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find_all(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                m.id, m.title, m.price, m.inventory,
                c.id AS category_id, c.slug AS category_slug, c.title AS category_title
            FROM menu_items m
            JOIN categories c ON c.id = m.category_id
            ORDER BY m.id
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menu items: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                m.id, m.title, m.price, m.inventory,
                c.id AS category_id, c.slug AS category_slug, c.title AS category_title
            FROM menu_items m
            JOIN categories c ON c.id = m.category_id
            WHERE m.id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu item by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, DomainError> {
        info!("Creating menu item: {}", item.title);

        let row: MenuItemRow = sqlx::query_as(
            r#"
            WITH inserted AS (
                INSERT INTO menu_items (title, price, inventory, category_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title, price, inventory, category_id
            )
            SELECT
                i.id, i.title, i.price, i.inventory,
                c.id AS category_id, c.slug AS category_slug, c.title AS category_title
            FROM inserted i
            JOIN categories c ON c.id = i.category_id
            "#
        )
        .bind(&item.title)
        .bind(item.price)
        .bind(item.inventory)
        .bind(item.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, item))?;

        info!("Menu item created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, id: EntityId, item: &NewMenuItem) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            WITH updated AS (
                UPDATE menu_items
                SET
                    title = $2,
                    price = $3,
                    inventory = $4,
                    category_id = $5
                WHERE id = $1
                RETURNING id, title, price, inventory, category_id
            )
            SELECT
                u.id, u.title, u.price, u.inventory,
                c.id AS category_id, c.slug AS category_slug, c.title AS category_title
            FROM updated u
            JOIN categories c ON c.id = u.category_id
            "#
        )
        .bind(id)
        .bind(&item.title)
        .bind(item.price)
        .bind(item.inventory)
        .bind(item.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, item))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error deleting menu item: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
