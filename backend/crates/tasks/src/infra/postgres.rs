//! PostgreSQL Repository Implementations
//!
//! `tasks.id` carries no unique constraint. The surrogate `seq` column
//! defines insertion order, and keyed queries pick the lowest `seq`.

use crate::domain::entities::{Task, TaskChanges};
use crate::domain::repository::TaskRepository;
use crate::error::TaskResult;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// PostgreSQL-backed task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TaskRepository for PgTaskRepository {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, due_date, status
            FROM tasks
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn find_by_id(&self, id: &str) -> TaskResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, due_date, status
            FROM tasks
            WHERE id = $1
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }

    async fn create(&self, task: &Task) -> TaskResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks (
                id,
                title,
                description,
                due_date,
                status
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.due_date)
        .bind(&task.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, id: &str, changes: &TaskChanges) -> TaskResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2,
                description = $3,
                status = $4
            WHERE seq = (
                SELECT seq FROM tasks WHERE id = $1 ORDER BY seq LIMIT 1
            )
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.status)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> TaskResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM tasks
            WHERE seq = (
                SELECT seq FROM tasks WHERE id = $1 ORDER BY seq LIMIT 1
            )
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    title: String,
    description: String,
    due_date: Option<DateTime<Utc>>,
    status: String,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        }
    }
}
