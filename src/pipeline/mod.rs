//! Speech evaluation pipeline.
//!
//! # Architecture
//!
//! ```text
//! audio bytes + expected line
//!        │
//!        ▼
//! SpeechEvaluator::run()
//!        │
//!        ├─ Transcribing ── Arc<dyn SpeechToText>
//!        │       └─ failure ──▶ TranscriptionFailed (all-zero result)
//!        │
//!        └─ Scoring ── scoring::score_transcript ──▶ Completed
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use speech_tutor::config::AppConfig;
//! use speech_tutor::pipeline::SpeechEvaluator;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let evaluator = SpeechEvaluator::new(speech_tutor::stt::from_config(&config.stt));
//!     let result = evaluator.evaluate_file("attempt.wav", "I like apples").await;
//!     println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! }
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{EvaluationOutcome, SpeechEvaluator};
pub use state::EvaluationState;
