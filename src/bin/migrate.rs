use anyhow::Context;
use coursescout::config::ENV_DATABASE_URL;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let db_url = std::env::var(ENV_DATABASE_URL)
        .with_context(|| format!("{ENV_DATABASE_URL} environment variable not set"))?;

    let pool: Pool<Postgres> = PgPoolOptions::new()
        .max_connections(1)
        .connect(&db_url)
        .await?;

    // creates saved_courses; no-op if up-to-date
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(())
}
