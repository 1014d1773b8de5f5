use crate::entities::{SaveOutcome, SavedCourse};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::{info, warn};

/// Storage for users' personal course lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SavedCourseRepository: Send + Sync {
    /// Adds a course to a user's list. Saving a url the user already has is
    /// not an error.
    async fn save(&self, user_id: i64, title: &str, url: &str) -> Result<SaveOutcome>;

    /// The user's courses in the order they were saved.
    async fn list(&self, user_id: i64) -> Result<Vec<SavedCourse>>;

    async fn health(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct PgSavedCourseRepository {
    pool: Pool<Postgres>,
}

impl PgSavedCourseRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SavedCourseRepository for PgSavedCourseRepository {
    async fn save(&self, user_id: i64, title: &str, url: &str) -> Result<SaveOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO saved_courses (user_id, title, url)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, url) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            warn!(user_id, url, "course already saved");
            Ok(SaveOutcome::AlreadySaved)
        } else {
            info!(user_id, title, "course saved");
            Ok(SaveOutcome::Saved)
        }
    }

    async fn list(&self, user_id: i64) -> Result<Vec<SavedCourse>> {
        let courses = sqlx::query_as::<_, SavedCourse>(
            r#"
            SELECT user_id, title, url, saved_at
            FROM saved_courses
            WHERE user_id = $1
            ORDER BY saved_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    async fn health(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;

    async fn setup_test_db() -> Option<PgPool> {
        // Skip tests if TEST_DATABASE_URL is not set
        let database_url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("Skipping database tests: TEST_DATABASE_URL not set");
                return None;
            }
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(pool)
    }

    fn unique_user_id() -> i64 {
        // Keeps reruns against the same database independent.
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_save_then_list() {
        let Some(pool) = setup_test_db().await else {
            return;
        };
        let repo = PgSavedCourseRepository::new(pool);
        let user_id = unique_user_id();

        let outcome = repo
            .save(user_id, "Python Basics", "https://a.example/c/python-basics")
            .await
            .expect("Failed to save course");
        assert_eq!(outcome, SaveOutcome::Saved);

        repo.save(user_id, "Rust in Action", "https://a.example/c/rust")
            .await
            .expect("Failed to save course");

        let courses = repo.list(user_id).await.expect("Failed to list courses");
        let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Python Basics", "Rust in Action"]);
    }

    #[tokio::test]
    async fn test_duplicate_url_is_already_saved() {
        let Some(pool) = setup_test_db().await else {
            return;
        };
        let repo = PgSavedCourseRepository::new(pool);
        let user_id = unique_user_id();
        let url = "https://a.example/c/python-basics";

        repo.save(user_id, "Python Basics", url).await.unwrap();
        let outcome = repo.save(user_id, "Other title", url).await.unwrap();

        assert_eq!(outcome, SaveOutcome::AlreadySaved);
        assert_eq!(repo.list(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_health() {
        let Some(pool) = setup_test_db().await else {
            return;
        };
        let repo = PgSavedCourseRepository::new(pool);
        assert!(repo.health().await.is_ok());
    }
}
