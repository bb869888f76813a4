use sqlx::{Executor, QueryBuilder, Sqlite};

use crate::models::{NewProject, Project, ProjectFilter, ProjectSummary};

/// List projects newest first, with creator name and approved member count.
///
/// Projects whose creator has no user row are left out.
pub async fn list<'e, E>(
    executor: E,
    filter: Option<ProjectFilter>,
) -> Result<Vec<ProjectSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut qb = QueryBuilder::<Sqlite>::new(
        // language=SQLite
        r#"
            SELECT
                p.id,
                p.title,
                p.description,
                p.goal,
                p.status,
                p.budget_needed,
                p.professor_id,
                p.creator_id,
                p.created_at,
                u.name AS creatorName,
                (
                    SELECT COUNT(*) FROM project_members pm
                    WHERE pm.project_id = p.id AND pm.status = 'approved'
                ) AS memberCount
            FROM projects p
            JOIN users u ON p.creator_id = u.id
        "#,
    );

    match filter {
        Some(ProjectFilter::Open) => {
            qb.push(" WHERE p.status = 'Open'");
        }
        Some(ProjectFilter::Completed) => {
            qb.push(" WHERE p.status = 'Closed'");
        }
        Some(ProjectFilter::UnderProfessor) => {
            qb.push(" WHERE p.professor_id IS NOT NULL");
        }
        Some(ProjectFilter::Mine(user_id)) => {
            // Creator, or any membership row regardless of its status
            qb.push(" WHERE (p.creator_id = ");
            qb.push_bind(user_id.clone());
            qb.push(
                " OR EXISTS (SELECT 1 FROM project_members pm WHERE pm.project_id = p.id AND pm.user_id = ",
            );
            qb.push_bind(user_id);
            qb.push("))");
        }
        None => {}
    }

    qb.push(" ORDER BY p.created_at DESC, p.rowid DESC");

    qb.build_query_as().fetch_all(executor).await
}

pub async fn find_by_id<'e, E>(executor: E, id: &str) -> Result<Option<Project>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT
                p.id,
                p.title,
                p.description,
                p.goal,
                p.status,
                p.budget_needed,
                p.professor_id,
                p.creator_id,
                p.created_at,
                u.name AS creatorName
            FROM projects p
            JOIN users u ON p.creator_id = u.id
            WHERE p.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Insert the project row only. The creator's membership is a separate write.
pub async fn create<'e, E>(executor: E, project: &NewProject) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO projects (id, title, description, goal, status, budget_needed, professor_id, creator_id)
            VALUES (?, ?, ?, ?, 'Open', ?, ?, ?)
        "#,
    )
    .bind(&project.id)
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.goal)
    .bind(project.budget_needed)
    .bind(project.professor_id)
    .bind(project.creator_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn update_status<'e, E>(executor: E, id: &str, status: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE projects SET status = ? WHERE id = ?
        "#,
    )
    .bind(status)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Assign or clear (`None`) the supervising professor.
pub async fn update_professor<'e, E>(
    executor: E,
    id: &str,
    professor_id: Option<i64>,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE projects SET professor_id = ? WHERE id = ?
        "#,
    )
    .bind(professor_id)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
