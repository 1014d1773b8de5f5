use anyhow::Result;
use coursescout::{
    api,
    app_state::AppState,
    catalog::SourceRegistry,
    config::Config,
    init_tracing,
    repositories::{InMemorySavedCourseRepository, PgSavedCourseRepository, SavedCourseRepository},
    search::Aggregator,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format());

    let saved_courses: Arc<dyn SavedCourseRepository> = match config.database_url() {
        Some(database_url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            Arc::new(PgSavedCourseRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, saved courses are kept in memory");
            Arc::new(InMemorySavedCourseRepository::new())
        }
    };

    let registry = Arc::new(SourceRegistry::builtin());
    info!(sources = registry.len(), "source catalog loaded");
    let aggregator = Aggregator::new(registry, config.fetch().clone())?;

    let app = api::router(AppState::new(aggregator, saved_courses));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
