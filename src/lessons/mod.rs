//! Lesson content: the reference lines learners are scored against.
//!
//! The catalog is loaded once at startup and shared read-only between
//! requests.  Authoring lessons and tracking progress happen elsewhere.

pub mod catalog;

pub use catalog::{Dialogue, Lesson, LessonCatalog, LessonError, LessonSummary};
