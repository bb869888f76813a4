use sqlx::{Executor, Sqlite};

use crate::models::TimetableEntry;

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<TimetableEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, title, day, time, type
            FROM timetable
        "#,
    )
    .fetch_all(executor)
    .await
}
