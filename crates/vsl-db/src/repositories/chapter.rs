use sqlx::{Executor, Sqlite};

use crate::models::{Chapter, NewChapter};

/// List chapters, optionally restricted to one subject.
pub async fn list<'e, E>(executor: E, subject_id: Option<&str>) -> Result<Vec<Chapter>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, subjectId, title, description, thumbnail, isCompleted, notes, videoUrl
            FROM chapters
            WHERE ?1 IS NULL OR subjectId = ?1
        "#,
    )
    .bind(subject_id)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<Chapter>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, subjectId, title, description, thumbnail, isCompleted, notes, videoUrl
            FROM chapters
            WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e, E>(executor: E, chapter: &NewChapter) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO chapters (id, subjectId, title, description, videoUrl, thumbnail, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&chapter.id)
    .bind(&chapter.subject_id)
    .bind(&chapter.title)
    .bind(&chapter.description)
    .bind(&chapter.video_url)
    .bind(&chapter.thumbnail)
    .bind(&chapter.notes)
    .execute(executor)
    .await?;
    Ok(())
}
