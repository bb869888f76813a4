use sqlx::{Executor, Sqlite};

use crate::models::ProjectMember;

/// Role and status given to a project's creator.
pub const LEADER_ROLE: &str = "Team Leader";
/// Role given to users who ask to join.
pub const MEMBER_ROLE: &str = "Member";

pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_PENDING: &str = "pending";

pub async fn list_for_project<'e, E>(
    executor: E,
    project_id: &str,
) -> Result<Vec<ProjectMember>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT pm.id, pm.project_id, pm.user_id, pm.role, pm.status, u.name, u.grade
            FROM project_members pm
            JOIN users u ON pm.user_id = u.id
            WHERE pm.project_id = ?
            ORDER BY pm.id
        "#,
    )
    .bind(project_id)
    .fetch_all(executor)
    .await
}

/// Whether any membership row, whatever its status, links the user to the project.
pub async fn membership_exists<'e, E>(
    executor: E,
    project_id: &str,
    user_id: Option<i64>,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let exists: bool = sqlx::query_scalar(
        // language=SQLite
        r#"
            SELECT EXISTS(
                SELECT 1 FROM project_members
                WHERE project_id = ? AND user_id = ?
            )
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_one(executor)
    .await?;
    Ok(exists)
}

pub async fn create<'e, E>(
    executor: E,
    project_id: Option<&str>,
    user_id: Option<i64>,
    role: &str,
    status: &str,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO project_members (project_id, user_id, role, status)
            VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .bind(role)
    .bind(status)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_status<'e, E>(
    executor: E,
    member_id: i64,
    status: &str,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE project_members SET status = ? WHERE id = ?
        "#,
    )
    .bind(status)
    .bind(member_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn update_role<'e, E>(executor: E, member_id: i64, role: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE project_members SET role = ? WHERE id = ?
        "#,
    )
    .bind(role)
    .bind(member_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
