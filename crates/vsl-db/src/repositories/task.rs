use sqlx::{Executor, Sqlite};

use crate::models::{NewTask, ProjectTask};

pub async fn list_for_project<'e, E>(
    executor: E,
    project_id: &str,
) -> Result<Vec<ProjectTask>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, project_id, title, assigned_to, deadline, status
            FROM project_tasks
            WHERE project_id = ?
            ORDER BY id
        "#,
    )
    .bind(project_id)
    .fetch_all(executor)
    .await
}

/// New tasks always start as `Pending`.
pub async fn create<'e, E>(
    executor: E,
    project_id: &str,
    task: &NewTask,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO project_tasks (project_id, title, assigned_to, deadline, status)
            VALUES (?, ?, ?, ?, 'Pending')
        "#,
    )
    .bind(project_id)
    .bind(&task.title)
    .bind(task.assigned_to)
    .bind(&task.deadline)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_status<'e, E>(
    executor: E,
    task_id: i64,
    status: Option<&str>,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE project_tasks SET status = ? WHERE id = ?
        "#,
    )
    .bind(status)
    .bind(task_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
