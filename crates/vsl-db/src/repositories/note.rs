use sqlx::{Executor, Sqlite};

use crate::models::{NewNote, Note};

/// Notes newest first. Notes sharing a timestamp come back latest insert first.
pub async fn list_all<'e, E>(executor: E) -> Result<Vec<Note>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, title, content, created_at
            FROM notes
            ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn create<'e, E>(executor: E, note: &NewNote) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO notes (title, content)
            VALUES (?, ?)
        "#,
    )
    .bind(&note.title)
    .bind(&note.content)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Overwrite both title and content.
pub async fn update<'e, E>(executor: E, id: i64, note: &NewNote) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE notes SET title = ?, content = ? WHERE id = ?
        "#,
    )
    .bind(&note.title)
    .bind(&note.content)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            DELETE FROM notes WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
