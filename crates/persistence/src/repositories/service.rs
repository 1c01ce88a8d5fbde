//! Service repository for database operations.

use domain::models::{Service, ServicePayload};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ServiceEntity;
use crate::metrics::QueryTimer;

const SERVICE_COLUMNS: &str = "id, title, description, icon, display_order, created_at";

/// Repository for service database operations.
#[derive(Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    /// Creates a new ServiceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all services in display order.
    pub async fn list(&self) -> Result<Vec<Service>, sqlx::Error> {
        let timer = QueryTimer::new("list_services");
        let result = sqlx::query_as::<_, ServiceEntity>(&format!(
            "SELECT {} FROM services ORDER BY display_order ASC, title ASC",
            SERVICE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(to_model).collect())
    }

    /// Insert a new service from a validated payload.
    pub async fn create(&self, payload: &ServicePayload) -> Result<Service, sqlx::Error> {
        let timer = QueryTimer::new("create_service");
        let result = sqlx::query_as::<_, ServiceEntity>(&format!(
            r#"
            INSERT INTO services (title, description, icon, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.icon)
        .bind(payload.display_order)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        result.map(to_model)
    }

    /// Update the service with the given id. Returns None if it no longer
    /// exists.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &ServicePayload,
    ) -> Result<Option<Service>, sqlx::Error> {
        let timer = QueryTimer::new("update_service");
        let result = sqlx::query_as::<_, ServiceEntity>(&format!(
            r#"
            UPDATE services
            SET title = $2, description = $3, icon = $4, display_order = $5
            WHERE id = $1
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        ))
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.icon)
        .bind(payload.display_order)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result?.map(to_model))
    }

    /// Delete the service with the given id.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_service");
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        Ok(result?.rows_affected() > 0)
    }
}

fn to_model(e: ServiceEntity) -> Service {
    Service {
        id: e.id,
        title: e.title,
        description: e.description,
        icon: e.icon,
        display_order: e.display_order,
        created_at: e.created_at,
    }
}
