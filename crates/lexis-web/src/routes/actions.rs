//! HTMX action handlers.
//!
//! Each handler runs one dispatch and returns the fragment that replaces the
//! action's target. A failed call renders the cleared target.

use askama::Template;
use axum::{extract::State, response::Response, Form};
use lexis_core::{Endpoint, FieldBuffer, KeywordRow, RowBuffer};
use serde::Deserialize;
use tracing::debug;

use super::page::render;
use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "partials/result_field.html")]
struct ResultFieldTemplate {
    value: String,
}

#[derive(Template)]
#[template(path = "partials/keyword_rows.html")]
struct KeywordRowsTemplate {
    rows: Vec<RowView>,
}

/// View model for a keyword row.
struct RowView {
    text: String,
    score: String,
}

impl RowView {
    fn from_row(row: KeywordRow) -> Self {
        Self {
            score: row.score_label(),
            text: row.text,
        }
    }
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
pub struct KeywordsForm {
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub method: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// POST /actions/lemmatize
pub async fn lemmatize(State(state): State<AppState>, Form(form): Form<TextForm>) -> Response {
    simple_action(&state, Endpoint::Lemmatize, &form).await
}

/// POST /actions/tag
pub async fn tag(State(state): State<AppState>, Form(form): Form<TextForm>) -> Response {
    simple_action(&state, Endpoint::Tag, &form).await
}

/// POST /actions/keywords
pub async fn keywords(State(state): State<AppState>, Form(form): Form<KeywordsForm>) -> Response {
    let session = state.action_session(&form.session);
    let mut table = RowBuffer::default();
    let outcome = state
        .dispatcher(&session)
        .dispatch_keywords(Endpoint::Keywords, &form.text, &form.method, &mut table)
        .await;
    debug!(session = %form.session, ?outcome, "Keywords action finished");

    render(KeywordRowsTemplate {
        rows: table.into_rows().into_iter().map(RowView::from_row).collect(),
    })
}

// ============================================================
// HELPERS
// ============================================================

async fn simple_action(state: &AppState, endpoint: Endpoint, form: &TextForm) -> Response {
    let session = state.action_session(&form.session);
    let mut field = FieldBuffer::default();
    let outcome = state
        .dispatcher(&session)
        .dispatch_simple(endpoint, &form.text, &mut field)
        .await;
    debug!(session = %form.session, endpoint = %endpoint, ?outcome, "Action finished");

    render(ResultFieldTemplate {
        value: field.into_value(),
    })
}
