use crate::entities::{SaveOutcome, SavedCourse};
use crate::repositories::SavedCourseRepository;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

/// Process-local store, used when no database is configured and in tests.
/// Contents are lost on restart.
#[derive(Clone, Default)]
pub struct InMemorySavedCourseRepository {
    store: Arc<DashMap<i64, Vec<SavedCourse>>>,
}

impl InMemorySavedCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedCourseRepository for InMemorySavedCourseRepository {
    async fn save(&self, user_id: i64, title: &str, url: &str) -> Result<SaveOutcome> {
        // The entry guard holds the shard lock, so check-then-push is atomic.
        let mut courses = self.store.entry(user_id).or_default();
        if courses.iter().any(|course| course.url == url) {
            return Ok(SaveOutcome::AlreadySaved);
        }
        courses.push(SavedCourse {
            user_id,
            title: title.to_string(),
            url: url.to_string(),
            saved_at: Utc::now(),
        });
        Ok(SaveOutcome::Saved)
    }

    async fn list(&self, user_id: i64) -> Result<Vec<SavedCourse>> {
        Ok(self
            .store
            .get(&user_id)
            .map(|courses| courses.clone())
            .unwrap_or_default())
    }

    async fn health(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_list_in_order() {
        let repo = InMemorySavedCourseRepository::new();
        repo.save(1, "Python Basics", "https://a/python").await.unwrap();
        repo.save(1, "Rust in Action", "https://a/rust").await.unwrap();

        let courses = repo.list(1).await.unwrap();
        let urls: Vec<&str> = courses.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a/python", "https://a/rust"]);
    }

    #[tokio::test]
    async fn test_uniqueness_is_per_user_and_url() {
        let repo = InMemorySavedCourseRepository::new();

        assert_eq!(
            repo.save(1, "Python Basics", "https://a/python").await.unwrap(),
            SaveOutcome::Saved
        );
        assert_eq!(
            repo.save(1, "Renamed", "https://a/python").await.unwrap(),
            SaveOutcome::AlreadySaved
        );
        assert_eq!(
            repo.save(2, "Python Basics", "https://a/python").await.unwrap(),
            SaveOutcome::Saved
        );

        let first = repo.list(1).await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].title, "Python Basics");
        assert_eq!(repo.list(2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_user_has_empty_list() {
        let repo = InMemorySavedCourseRepository::new();
        assert!(repo.list(42).await.unwrap().is_empty());
    }
}
