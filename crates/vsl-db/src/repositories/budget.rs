use sqlx::{Executor, Sqlite};

use crate::models::{BudgetRequest, NewBudgetRequest};

pub async fn list_for_project<'e, E>(
    executor: E,
    project_id: &str,
) -> Result<Vec<BudgetRequest>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, project_id, title, amount, reason, status, professor_note, created_at
            FROM budget_requests
            WHERE project_id = ?
            ORDER BY id
        "#,
    )
    .bind(project_id)
    .fetch_all(executor)
    .await
}

/// New requests always start as `Pending`.
pub async fn create<'e, E>(
    executor: E,
    project_id: &str,
    request: &NewBudgetRequest,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO budget_requests (project_id, title, amount, reason, status)
            VALUES (?, ?, ?, ?, 'Pending')
        "#,
    )
    .bind(project_id)
    .bind(&request.title)
    .bind(request.amount)
    .bind(&request.reason)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_status<'e, E>(
    executor: E,
    budget_id: i64,
    status: &str,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE budget_requests SET status = ? WHERE id = ?
        "#,
    )
    .bind(status)
    .bind(budget_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn update_professor_note<'e, E>(
    executor: E,
    budget_id: i64,
    note: Option<&str>,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE budget_requests SET professor_note = ? WHERE id = ?
        "#,
    )
    .bind(note)
    .bind(budget_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
