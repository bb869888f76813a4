use sqlx::{Executor, Sqlite};

use crate::models::ProgressStats;

/// The progress snapshot is a single row in practice; the first one wins.
pub async fn find_first<'e, E>(executor: E) -> Result<Option<ProgressStats>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, totalHours, lessonsCompleted, quizzesTaken, averageScore, streakDays
            FROM progress_stats
            ORDER BY id
            LIMIT 1
        "#,
    )
    .fetch_optional(executor)
    .await
}
