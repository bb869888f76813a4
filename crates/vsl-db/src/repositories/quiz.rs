use sqlx::{Executor, Sqlite};

use crate::models::QuizRow;

/// List quizzes with their question lists still encoded.
pub async fn list_all<'e, E>(executor: E) -> Result<Vec<QuizRow>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, subjectId, title, level, questions
            FROM quizzes
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Insert a quiz. `questions` must already be encoded; `None` is rejected by the store.
pub async fn create<'e, E>(
    executor: E,
    id: Option<&str>,
    subject_id: Option<&str>,
    title: Option<&str>,
    level: Option<&str>,
    questions: Option<&str>,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO quizzes (id, subjectId, title, level, questions)
            VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(subject_id)
    .bind(title)
    .bind(level)
    .bind(questions)
    .execute(executor)
    .await?;
    Ok(())
}
