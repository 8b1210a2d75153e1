//! Request handlers.

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::lessons::{Lesson, LessonSummary};
use crate::scoring::SpeechEvaluationResult;

use super::error::ApiError;
use super::AppState;

pub(super) async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub(super) async fn list_lessons(State(state): State<AppState>) -> Json<Vec<LessonSummary>> {
    Json(state.catalog.list_active())
}

pub(super) async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
) -> Result<Json<Lesson>, ApiError> {
    Ok(Json(state.catalog.get(&lesson_id)?.clone()))
}

/// `POST /api/lessons/{lesson_id}/evaluate`
///
/// Multipart fields: `audio` (the recording) and `dialogue_id`.  The
/// dialogue is resolved before the recording is sent anywhere, so unknown
/// ids fail fast with 404.
pub(super) async fn evaluate(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<SpeechEvaluationResult>, ApiError> {
    let mut audio: Option<Bytes> = None;
    let mut dialogue_id: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("audio") => audio = Some(field.bytes().await?),
            Some("dialogue_id") => dialogue_id = Some(field.text().await?.trim().to_string()),
            _ => {}
        }
    }

    let dialogue_id = dialogue_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingField("dialogue_id"))?;
    let audio = audio.ok_or(ApiError::MissingField("audio"))?;

    let expected = state.catalog.expected_line(&lesson_id, &dialogue_id)?;
    log::info!(
        "evaluate: lesson={lesson_id} dialogue={dialogue_id} audio={} bytes",
        audio.len()
    );

    let result = state.evaluator.evaluate(&audio, expected).await;
    Ok(Json(result))
}
