use anyhow::Context;
use vsl_api::{config::ApiConfig, tracing::init_tracing};

/// Reset the store at `DATABASE_URL` to the demo dataset.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.env);

    let pool = vsl_db::create_pool(&config.database_url, 1).await?;
    vsl_db::ensure_schema(&pool).await?;

    let summary = vsl_db::seed::seed(&pool).await?;
    tracing::info!(
        subjects = summary.subjects,
        chapters = summary.chapters,
        quizzes = summary.quizzes,
        timetable = summary.timetable,
        users = summary.users,
        projects = summary.projects,
        "Database seeded successfully"
    );

    pool.close().await;
    Ok(())
}
