//! Read-only lesson catalog.
//!
//! A catalog is a JSON array of [`Lesson`]s.  Each lesson holds the dialogue
//! turns the learner practises; the `student_line` of a turn is the
//! reference utterance their recording is scored against.
//!
//! ```json
//! [
//!   {
//!     "id": "lesson-1",
//!     "title": "At the market",
//!     "teacher_character": "Ms. Kim",
//!     "dialogues": [
//!       { "id": "d1", "teacher_line": "What do you like?", "student_line": "I like apples." }
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// LessonError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("lesson not found: {0}")]
    LessonNotFound(String),

    #[error("dialogue {dialogue_id} not found in lesson {lesson_id}")]
    DialogueNotFound {
        lesson_id: String,
        dialogue_id: String,
    },

    #[error("cannot read lesson catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid lesson catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(String),
}

// ---------------------------------------------------------------------------
// Lesson types
// ---------------------------------------------------------------------------

/// One teacher/student exchange inside a lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dialogue {
    pub id: String,
    /// What the animated teacher says (synthesised elsewhere).
    pub teacher_line: String,
    /// What the learner is expected to answer.
    pub student_line: String,
}

fn default_difficulty() -> u8 {
    1
}

fn default_active() -> bool {
    true
}

/// A lesson with its full dialogue script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty_level: u8,
    pub teacher_character: String,
    /// Inactive lessons are hidden from every query.
    #[serde(default = "default_active", skip_serializing)]
    pub is_active: bool,
    #[serde(default)]
    pub dialogues: Vec<Dialogue>,
}

impl Lesson {
    pub fn dialogue(&self, dialogue_id: &str) -> Option<&Dialogue> {
        self.dialogues.iter().find(|d| d.id == dialogue_id)
    }
}

/// Listing view of a lesson, without dialogues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub difficulty_level: u8,
    pub teacher_character: String,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            difficulty_level: lesson.difficulty_level,
            teacher_character: lesson.teacher_character.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// LessonCatalog
// ---------------------------------------------------------------------------

/// Immutable, in-memory set of lessons keyed by id.
///
/// Catalog order is preserved for listings.
#[derive(Debug, Clone, Default)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
    index: HashMap<String, usize>,
}

impl LessonCatalog {
    /// Build a catalog, rejecting duplicate lesson ids.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, LessonError> {
        let mut index = HashMap::with_capacity(lessons.len());
        for (i, lesson) in lessons.iter().enumerate() {
            if index.insert(lesson.id.clone(), i).is_some() {
                return Err(LessonError::DuplicateLesson(lesson.id.clone()));
            }
        }
        Ok(Self { lessons, index })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LessonError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Load a catalog file.  A missing file yields an empty catalog.
    pub fn load_from(path: &Path) -> Result<Self, LessonError> {
        if !path.exists() {
            log::warn!("lessons: {} not found; starting with an empty catalog", path.display());
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&data)?;
        log::info!("lessons: loaded {} lessons from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Summaries of all active lessons, in catalog order.
    pub fn list_active(&self) -> Vec<LessonSummary> {
        self.lessons
            .iter()
            .filter(|l| l.is_active)
            .map(LessonSummary::from)
            .collect()
    }

    /// An active lesson by id.
    pub fn get(&self, lesson_id: &str) -> Result<&Lesson, LessonError> {
        self.index
            .get(lesson_id)
            .map(|&i| &self.lessons[i])
            .filter(|l| l.is_active)
            .ok_or_else(|| LessonError::LessonNotFound(lesson_id.to_string()))
    }

    /// The line the learner must say for `dialogue_id` in `lesson_id`.
    ///
    /// Inactive lessons still resolve, so a learner part-way through a lesson
    /// that was just retired can finish it.
    pub fn expected_line(&self, lesson_id: &str, dialogue_id: &str) -> Result<&str, LessonError> {
        let lesson = self
            .index
            .get(lesson_id)
            .map(|&i| &self.lessons[i])
            .ok_or_else(|| LessonError::LessonNotFound(lesson_id.to_string()))?;
        lesson
            .dialogue(dialogue_id)
            .map(|d| d.student_line.as_str())
            .ok_or_else(|| LessonError::DialogueNotFound {
                lesson_id: lesson_id.to_string(),
                dialogue_id: dialogue_id.to_string(),
            })
    }

    /// Total number of lessons, active or not.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
