use sqlx::{Executor, Sqlite};

use crate::models::Subject;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Subject>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, name, icon, color, totalChapters, progress
            FROM subjects
        "#,
    )
    .fetch_all(executor)
    .await
}
