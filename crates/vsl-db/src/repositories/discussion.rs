use sqlx::{Executor, Sqlite};

use crate::models::{DiscussionPost, NewDiscussionPost};

/// Posts of a project, oldest first. Posts sharing a timestamp keep insertion order.
pub async fn list_for_project<'e, E>(
    executor: E,
    project_id: &str,
) -> Result<Vec<DiscussionPost>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT dp.id, dp.project_id, dp.user_id, dp.message, dp.created_at, u.name
            FROM discussion_posts dp
            JOIN users u ON dp.user_id = u.id
            WHERE dp.project_id = ?
            ORDER BY dp.created_at ASC, dp.id ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e, E>(
    executor: E,
    project_id: &str,
    post: &NewDiscussionPost,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO discussion_posts (project_id, user_id, message)
            VALUES (?, ?, ?)
        "#,
    )
    .bind(project_id)
    .bind(post.user_id)
    .bind(&post.message)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}
