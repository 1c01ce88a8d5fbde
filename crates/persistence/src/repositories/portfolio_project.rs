//! Portfolio project repository for database operations.

use domain::models::{PortfolioProject, ProjectCategory, ProjectPayload};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ProjectEntity;
use crate::metrics::QueryTimer;

const PROJECT_COLUMNS: &str = "id, title, description, category, technologies, image_url, \
                               live_url, process_description, process_highlights, created_at";

/// Repository for portfolio project database operations.
#[derive(Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Creates a new ProjectRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all projects, newest first.
    pub async fn list(&self) -> Result<Vec<PortfolioProject>, sqlx::Error> {
        let timer = QueryTimer::new("list_projects");
        let result = sqlx::query_as::<_, ProjectEntity>(&format!(
            "SELECT {} FROM portfolio_projects ORDER BY created_at DESC",
            PROJECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(to_model).collect())
    }

    /// Find a project by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let timer = QueryTimer::new("find_project_by_id");
        let result = sqlx::query_as::<_, ProjectEntity>(&format!(
            "SELECT {} FROM portfolio_projects WHERE id = $1",
            PROJECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result?.map(to_model))
    }

    /// Insert a new project from a validated payload.
    pub async fn create(&self, payload: &ProjectPayload) -> Result<PortfolioProject, sqlx::Error> {
        let timer = QueryTimer::new("create_project");
        let result = sqlx::query_as::<_, ProjectEntity>(&format!(
            r#"
            INSERT INTO portfolio_projects
                (title, description, category, technologies, image_url, live_url,
                 process_description, process_highlights)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.category.as_str())
        .bind(payload.technologies_list())
        .bind(none_if_blank(payload.image_url.as_deref()))
        .bind(none_if_blank(payload.live_url.as_deref()))
        .bind(none_if_blank(payload.process_description.as_deref()))
        .bind(payload.process_highlights_list())
        .fetch_one(&self.pool)
        .await;
        timer.record();

        result.map(to_model)
    }

    /// Update the project with the given id. Returns None if it no longer
    /// exists.
    pub async fn update(
        &self,
        id: Uuid,
        payload: &ProjectPayload,
    ) -> Result<Option<PortfolioProject>, sqlx::Error> {
        let timer = QueryTimer::new("update_project");
        let result = sqlx::query_as::<_, ProjectEntity>(&format!(
            r#"
            UPDATE portfolio_projects
            SET title = $2, description = $3, category = $4, technologies = $5,
                image_url = $6, live_url = $7, process_description = $8,
                process_highlights = $9
            WHERE id = $1
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(payload.category.as_str())
        .bind(payload.technologies_list())
        .bind(none_if_blank(payload.image_url.as_deref()))
        .bind(none_if_blank(payload.live_url.as_deref()))
        .bind(none_if_blank(payload.process_description.as_deref()))
        .bind(payload.process_highlights_list())
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result?.map(to_model))
    }

    /// Delete the project with the given id. Returns false if nothing was
    /// deleted.
    pub async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_project");
        let result = sqlx::query("DELETE FROM portfolio_projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();

        Ok(result?.rows_affected() > 0)
    }
}

fn to_model(e: ProjectEntity) -> PortfolioProject {
    let category = match e.category.as_str() {
        "Software" => ProjectCategory::Software,
        "Mobile Apps" => ProjectCategory::MobileApps,
        "Branding" => ProjectCategory::Branding,
        _ => ProjectCategory::Websites,
    };

    PortfolioProject {
        id: e.id,
        title: e.title,
        description: e.description,
        category,
        technologies: e.technologies,
        image_url: e.image_url,
        live_url: e.live_url,
        process_description: e.process_description,
        process_highlights: e.process_highlights,
        created_at: e.created_at,
    }
}

/// Optional URL-ish fields are stored as NULL when the form left them blank.
fn none_if_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
