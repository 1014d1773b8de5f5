pub mod links;
pub mod model;
pub mod title;

#[cfg(test)]
mod tests;

pub use links::extract;
pub use model::CourseListing;
