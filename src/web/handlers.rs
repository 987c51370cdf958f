//! HTTP request handlers for the documentation API.

use axum::{
    extract::{Path, Query as QueryParams, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::state::AppState;
use crate::error::{DocError, PageError, QueryError};
use crate::metrics::{self, MetricSnapshot};
use crate::pages::{DismissOutcome, PageKind, PageOutcome};
use crate::query::{self, help_text, Answer, Query};

/// Query request payload.
#[derive(Debug, Deserialize)]
pub struct DocRequest {
    /// Arguments as typed after the command name, e.g. `["strings", "Builder.*"]`
    #[serde(default)]
    pub args: Vec<String>,
}

/// Request to open a paging session.
#[derive(Debug, Deserialize)]
pub struct CreatePageRequest {
    pub package: String,
    pub kind: PageKind,
    /// Identity of the viewer allowed to move the session
    pub owner: String,
}

/// Identity of the viewer performing a paging action.
#[derive(Debug, Deserialize)]
pub struct OwnerRequest {
    pub owner: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// Version
    pub version: String,
    pub cached_packages: usize,
    pub page_sessions: usize,
    pub metrics: MetricSnapshot,
}

fn error_response(status: StatusCode, message: impl std::fmt::Display) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": message.to_string()
        })),
    )
        .into_response()
}

fn doc_error_response(err: &DocError) -> Response {
    match err {
        DocError::Fetch { .. } => {
            error!(error = %err, "Documentation fetch failed");
            error_response(StatusCode::BAD_GATEWAY, err)
        }
        DocError::InvalidPackage(_) => error_response(StatusCode::BAD_REQUEST, err),
    }
}

fn query_error_response(err: &QueryError) -> Response {
    if err.is_not_found() {
        error_response(StatusCode::NOT_FOUND, err)
    } else {
        error_response(StatusCode::BAD_REQUEST, err)
    }
}

/// Answer a documentation query.
///
/// POST /api/doc
pub async fn doc(State(state): State<AppState>, Json(request): Json<DocRequest>) -> Response {
    let start = Instant::now();

    let parsed = match Query::parse(request.args.as_slice()) {
        Ok(parsed) => parsed,
        Err(e) => return query_error_response(&e),
    };

    let Some(package) = parsed.package() else {
        let help = Answer::new(
            "Docs help",
            state.config.fetch.base_url.clone(),
            help_text(""),
        );
        return Json(help).into_response();
    };

    info!(package = %package, args = ?request.args, "Processing doc request");

    let doc = match state.docs.get_doc(package).await {
        Ok(doc) => doc,
        Err(e) => return doc_error_response(&e),
    };

    match query::answer(&doc, &parsed) {
        Ok(answer) => {
            info!(
                title = %answer.title,
                took_ms = start.elapsed().as_millis() as u64,
                "Query answered"
            );
            Json(answer).into_response()
        }
        Err(e) => query_error_response(&e),
    }
}

/// Type and function counts plus the overview of a package.
///
/// GET /api/packages/{*package}
pub async fn package_summary(
    State(state): State<AppState>,
    Path(package): Path<String>,
) -> Response {
    match state.docs.get_doc(&package).await {
        Ok(doc) if doc.is_empty() => {
            query_error_response(&QueryError::UnknownPackage(doc.name.clone()))
        }
        Ok(doc) => Json(query::package_summary(&doc)).into_response(),
        Err(e) => doc_error_response(&e),
    }
}

/// Open a paging session on a package's functions or types.
///
/// POST /api/pages
pub async fn create_page(
    State(state): State<AppState>,
    Json(request): Json<CreatePageRequest>,
) -> Response {
    let doc = match state.docs.get_doc(&request.package).await {
        Ok(doc) => doc,
        Err(e) => return doc_error_response(&e),
    };

    let key = Uuid::new_v4().to_string();
    match state
        .pages
        .create(key, request.owner, request.kind, doc)
        .await
    {
        Ok(page) => (StatusCode::CREATED, Json(page)).into_response(),
        Err(e @ PageError::Empty { .. }) => error_response(StatusCode::NOT_FOUND, e),
    }
}

/// Current page of a session.
///
/// GET /api/pages/{key}
pub async fn show_page(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    match state.pages.render(&key).await {
        Some(page) => Json(page).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("no paging session `{}`", key),
        ),
    }
}

fn outcome_response(outcome: PageOutcome) -> Response {
    match outcome.into_page() {
        Some(page) => Json(page).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Move a session one page forward.
///
/// POST /api/pages/{key}/next
pub async fn next_page(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<OwnerRequest>,
) -> Response {
    outcome_response(state.pages.advance(&key, &request.owner).await)
}

/// Move a session one page back.
///
/// POST /api/pages/{key}/prev
pub async fn prev_page(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<OwnerRequest>,
) -> Response {
    outcome_response(state.pages.retreat(&key, &request.owner).await)
}

/// Close a session. Rejected dismissals are not reported to the caller.
///
/// DELETE /api/pages/{key}?owner=...
pub async fn dismiss_page(
    State(state): State<AppState>,
    Path(key): Path<String>,
    QueryParams(request): QueryParams<OwnerRequest>,
) -> StatusCode {
    if state.pages.dismiss(&key, &request.owner).await == DismissOutcome::Rejected {
        warn!(key = %key, "Dismissal rejected");
    }
    StatusCode::NO_CONTENT
}

/// Health check endpoint.
///
/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cached_packages: state.docs.cached_count().await,
        page_sessions: state.pages.len().await,
        metrics: MetricSnapshot::capture(),
    })
}

/// Prometheus metrics endpoint.
///
/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    let output = metrics::gather_metrics();
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], output)
}
