//! Request handlers for the contacts API.
//!
//! Handlers turn untyped transport input into domain values, call the
//! service, and render every failure as `{"error": <message>}`.

use super::AppState;
use crate::domain::{ContactId, Pagination, ValidationError};
use crate::error::ContactError;
use crate::models::{Contact, CreateContactRequest, DeleteOutcome};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

/// Query string for `GET /contacts`, kept as text until validated.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self, "Storage operation failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// `GET /contacts`: one page of contacts in id order.
pub async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Contact>>, ContactError> {
    let pagination = Pagination::from_query(
        params.page.as_deref(),
        params.limit.as_deref(),
        state.max_page_limit,
    )?;

    let contacts = state.service.list_contacts(pagination).await?;
    Ok(Json(contacts))
}

/// `POST /contacts`: validate and insert a contact.
pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Contact>, ContactError> {
    let request = match body {
        Ok(Json(value)) => CreateContactRequest::from_json(value)?,
        // Without a JSON content type the body is not parsed at all, so no
        // field is present.
        Err(JsonRejection::MissingJsonContentType(_)) => CreateContactRequest::default(),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Unreadable request body");
            return Err(ValidationError::InvalidBody.into());
        }
    };

    let contact = state.service.create_contact(request).await?;
    Ok(Json(contact))
}

/// `DELETE /contacts/:id`: remove a contact permanently.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>, ContactError> {
    let id: ContactId = id.parse()?;
    let outcome = state.service.delete_contact(id).await?;
    Ok(Json(outcome))
}

/// `GET /health`: returns `{ "ok": true, "requests_total": .., "errors_total": .. }`.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.snapshot();
    Json(json!({
        "ok": true,
        "requests_total": snapshot.requests_total,
        "errors_total": snapshot.errors_total,
    }))
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
