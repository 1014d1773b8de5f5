pub mod memory;
pub mod saved_courses;

pub use memory::InMemorySavedCourseRepository;
#[cfg(test)]
pub use saved_courses::MockSavedCourseRepository;
pub use saved_courses::{PgSavedCourseRepository, SavedCourseRepository};
