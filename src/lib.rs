//! Pronunciation practice backend for young English learners.
//!
//! A learner records a reply to the animated teacher; the recording is
//! transcribed, compared with the expected line and scored for accuracy,
//! pronunciation and fluency, with short encouraging feedback.
//!
//! * [`config`]: TOML settings and platform paths.
//! * [`stt`]: speech-to-text providers behind the [`stt::SpeechToText`] trait.
//! * [`scoring`]: the pure scorers and feedback generator.
//! * [`pipeline`]: [`pipeline::SpeechEvaluator`], the STT → scoring orchestrator.
//! * [`lessons`]: read-only lesson catalog supplying expected lines.
//! * [`server`]: axum HTTP API.

pub mod config;
pub mod lessons;
pub mod pipeline;
pub mod scoring;
pub mod server;
pub mod stt;
