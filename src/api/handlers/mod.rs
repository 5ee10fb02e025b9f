use axum::{
    extract::{FromRequest, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::models::*;
use crate::store::{SharedStore, StoreError};

// ============================================================
// Responses and Error Handling
// ============================================================

/// Body of every non-record response: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ApiError = (StatusCode, Json<MessageResponse>);

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Log a store failure and return a sanitized response to the client.
/// The full error (including the document path) stays in the server log.
fn internal_error(e: StoreError) -> ApiError {
    tracing::error!("Store error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new("Internal server error")),
    )
}

fn bad_request(message: &str) -> ApiError {
    tracing::warn!("Validation error: {}", message);
    (StatusCode::BAD_REQUEST, Json(MessageResponse::new(message)))
}

fn question_not_found(question_id: &str) -> ApiError {
    let message = format!("Question with id '{}' doesn't exist", question_id);
    tracing::warn!("{}", message);
    (StatusCode::NOT_FOUND, Json(MessageResponse::new(message)))
}

fn answer_not_found(answer_id: &str) -> ApiError {
    let message = format!("Answer with id '{}' doesn't exist", answer_id);
    tracing::warn!("{}", message);
    (StatusCode::NOT_FOUND, Json(MessageResponse::new(message)))
}

// ============================================================
// Request Bodies
// ============================================================

/// Author and summary as submitted by a client, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionBody {
    pub author: Option<String>,
    pub summary: Option<String>,
}

impl SubmissionBody {
    /// Both fields, if both are present and non-empty.
    fn fields(self) -> Option<(String, String)> {
        let author = self.author.filter(|s| !s.is_empty())?;
        let summary = self.summary.filter(|s| !s.is_empty())?;
        Some((author, summary))
    }
}

/// Extracts a [`SubmissionBody`] from either a JSON or a urlencoded form body.
///
/// Never rejects: an unparseable body yields empty fields so the handler
/// answers with its own validation message.
pub struct Submission(pub SubmissionBody);

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let body = if is_form {
            Form::<SubmissionBody>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Json::<SubmissionBody>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        };

        Ok(Self(body.unwrap_or_else(|e| {
            tracing::debug!("Unreadable submission body: {}", e);
            SubmissionBody::default()
        })))
    }
}

// ============================================================
// Welcome
// ============================================================

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to responder!"))
}

// ============================================================
// Questions
// ============================================================

pub async fn list_questions(State(store): State<SharedStore>) -> ApiResult<Vec<Question>> {
    store.list().map(Json).map_err(internal_error)
}

pub async fn get_question(
    State(store): State<SharedStore>,
    Path(question_id): Path<String>,
) -> ApiResult<Question> {
    store
        .get_by_id(&question_id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| question_not_found(&question_id))
}

pub async fn create_question(
    State(store): State<SharedStore>,
    Submission(body): Submission,
) -> ApiResult<MessageResponse> {
    let Some((author, summary)) = body.fields() else {
        return Err(bad_request("Author and summary are required to add a question"));
    };

    let question = store
        .add(NewQuestion { author, summary })
        .map_err(internal_error)?;
    tracing::info!("Added question {}", question.id);

    Ok(Json(MessageResponse::new("Question was successfully added")))
}

// ============================================================
// Answers
// ============================================================

pub async fn list_answers(
    State(store): State<SharedStore>,
    Path(question_id): Path<String>,
) -> ApiResult<Vec<Answer>> {
    store
        .list_answers(&question_id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| question_not_found(&question_id))
}

pub async fn create_answer(
    State(store): State<SharedStore>,
    Path(question_id): Path<String>,
    Submission(body): Submission,
) -> ApiResult<MessageResponse> {
    let Some((author, summary)) = body.fields() else {
        return Err(bad_request("Author and summary are required to add an answer"));
    };

    let answer = store
        .add_answer(&question_id, NewAnswer { author, summary })
        .map_err(internal_error)?
        .ok_or_else(|| question_not_found(&question_id))?;
    tracing::info!("Added answer {} to question {}", answer.id, question_id);

    Ok(Json(MessageResponse::new(format!(
        "Answer to question with id '{}' was successfully added",
        question_id
    ))))
}

pub async fn get_answer(
    State(store): State<SharedStore>,
    Path((question_id, answer_id)): Path<(String, String)>,
) -> ApiResult<Answer> {
    if let Some(answer) = store
        .get_answer(&question_id, &answer_id)
        .map_err(internal_error)?
    {
        return Ok(Json(answer));
    }

    // Tell a missing question apart from a missing answer.
    match store.get_by_id(&question_id).map_err(internal_error)? {
        Some(_) => Err(answer_not_found(&answer_id)),
        None => Err(question_not_found(&question_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_requires_both_fields() {
        let body = SubmissionBody {
            author: Some("Jack".to_string()),
            summary: None,
        };
        assert!(body.fields().is_none());
    }

    #[test]
    fn submission_rejects_empty_strings() {
        let body = SubmissionBody {
            author: Some(String::new()),
            summary: Some("Q1".to_string()),
        };
        assert!(body.fields().is_none());
    }

    #[test]
    fn submission_keeps_both_fields() {
        let body = SubmissionBody {
            author: Some("Jack".to_string()),
            summary: Some("Q1".to_string()),
        };
        assert_eq!(body.fields(), Some(("Jack".to_string(), "Q1".to_string())));
    }
}
