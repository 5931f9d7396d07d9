//! JSON handlers behind the web UI
//!
//! Request and response shapes use camelCase keys; user-facing errors are in Portuguese.

use super::{SharedState, unix_millis};
use crate::core::{Feedback, Word, evaluate};
use crate::dictionary::DictionarySnapshot;
use crate::game::{GameStatus, GuessError, MAX_GUESSES};
use crate::validation::WordValidator;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{error, warn};

const STATS_EXAMPLES: usize = 20;

#[derive(Debug)]
pub(super) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn unavailable() -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "Dicionário ainda não carregado".to_string(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.message });
        (self.status, Json(payload)).into_response()
    }
}

fn snapshot(state: &SharedState) -> Result<Arc<DictionarySnapshot>, ApiError> {
    state.cache.current().ok_or_else(ApiError::unavailable)
}

/// Run blocking work (selection, lookups) off the async workers
async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        error!(error = %e, "Blocking task failed");
        ApiError::internal("Erro interno do servidor")
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyWord {
    pub word: String,
    pub source: String,
    pub timestamp: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuessRequest {
    pub guess: Option<String>,
    pub solution: Option<String>,
    /// 1-based number of this guess, when the client tracks it
    pub attempt: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_status: Option<GameStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

impl GuessResponse {
    fn rejected(error: &GuessError) -> Self {
        Self {
            is_valid: false,
            error: Some(error.to_string()),
            result: None,
            game_status: None,
            is_correct: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WordRequest {
    pub word: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordResponse {
    pub word: String,
    pub is_valid: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub(super) async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    let snapshot = state.cache.current();
    Json(json!({
        "status": "OK",
        "timestamp": unix_millis(SystemTime::now()),
        "wordCount": snapshot.as_ref().map_or(0, |s| s.len()),
        "lastUpdate": state.cache.last_refresh().map(unix_millis),
    }))
}

pub(super) async fn daily_word(
    State(state): State<SharedState>,
) -> Result<Json<DailyWord>, ApiError> {
    let snapshot = snapshot(&state)?;
    let picked = blocking(move || {
        state
            .selector
            .pick_solution(&snapshot, &FxHashSet::default())
    })
    .await?;

    let solution = picked.map_err(|e| {
        error!(error = %e, "Daily word selection failed");
        ApiError::internal("Erro ao obter palavra do dia")
    })?;

    Ok(Json(DailyWord {
        word: solution.word.text().to_string(),
        source: solution.source,
        timestamp: unix_millis(SystemTime::now()),
    }))
}

pub(super) async fn validate_guess(
    State(state): State<SharedState>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
    let (Some(guess), Some(solution)) = (
        request.guess.filter(|g| !g.trim().is_empty()),
        request.solution.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(ApiError::bad_request("Palavra e solução são obrigatórias"));
    };

    let solution = Word::new(&solution)
        .map_err(|e| ApiError::bad_request(format!("Solução inválida: {e}")))?;
    let snapshot = snapshot(&state)?;

    let guess = match Word::new(&guess) {
        Ok(word) => word,
        Err(e) => return Ok(Json(GuessResponse::rejected(&GuessError::from(e)))),
    };
    if !guess.matches(&solution) && !snapshot.contains_unaccented(guess.text()) {
        let error = GuessError::NotInDictionary {
            guess: guess.text().to_string(),
        };
        return Ok(Json(GuessResponse::rejected(&error)));
    }

    let feedback = evaluate(&guess, &solution);
    let is_correct = feedback.is_solved();
    let game_status = if is_correct {
        GameStatus::Won
    } else if request.attempt.is_some_and(|n| n >= MAX_GUESSES) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    };

    Ok(Json(GuessResponse {
        is_valid: true,
        error: None,
        result: Some(feedback),
        game_status: Some(game_status),
        is_correct: Some(is_correct),
    }))
}

pub(super) async fn validate_word(
    State(state): State<SharedState>,
    Json(request): Json<WordRequest>,
) -> Result<Json<WordResponse>, ApiError> {
    let Some(raw) = request.word.filter(|w| !w.trim().is_empty()) else {
        return Err(ApiError::bad_request("Palavra não fornecida"));
    };

    let word = match Word::new(&raw) {
        Ok(word) => word,
        Err(e) => {
            return Ok(Json(WordResponse {
                url: state.lookup.lookup_url(raw.trim()),
                word: raw,
                is_valid: false,
                error: Some(e.to_string()),
            }));
        }
    };

    let url = state.lookup.lookup_url(word.text());
    let lookup = Arc::clone(&state.lookup);
    let checked = {
        let word = word.clone();
        blocking(move || lookup.validate(&word)).await?
    };

    let (is_valid, error) = match checked {
        Ok(valid) => (valid, None),
        Err(e) => {
            warn!(error = %e, "Word lookup failed");
            (false, Some(e.to_string()))
        }
    };

    Ok(Json(WordResponse {
        word: word.text().to_string(),
        is_valid,
        url,
        error,
    }))
}

pub(super) async fn dictionary_stats(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = snapshot(&state)?;
    let failed: Vec<&str> = snapshot
        .sources()
        .iter()
        .filter(|s| s.error.is_some())
        .map(|s| s.url.as_str())
        .collect();

    Ok(Json(json!({
        "totalWords": snapshot.len(),
        "unaccentedWords": snapshot.unaccented_len(),
        "lastUpdate": unix_millis(snapshot.built_at()),
        "sources": state.cache.builder().sources().len(),
        "failedSources": failed,
        "examples": snapshot.examples(STATS_EXAMPLES),
    })))
}
