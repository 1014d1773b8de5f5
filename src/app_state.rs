use crate::repositories::SavedCourseRepository;
use crate::search::Aggregator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub saved_courses: Arc<dyn SavedCourseRepository>,
}

impl AppState {
    pub fn new(aggregator: Aggregator, saved_courses: Arc<dyn SavedCourseRepository>) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            saved_courses,
        }
    }
}
