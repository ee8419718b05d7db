//! Analysis page.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use lexis_core::model::{DEFAULT_METHOD, KEYWORD_METHODS};

use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    session_id: String,
    methods: Vec<MethodOption>,
}

struct MethodOption {
    value: &'static str,
    selected: bool,
}

/// GET / - Render the analysis page under a new page session.
pub async fn index(State(state): State<AppState>) -> Response {
    let (session_id, _session) = state.open_session();
    let template = IndexTemplate {
        session_id,
        methods: KEYWORD_METHODS
            .iter()
            .map(|&value| MethodOption {
                value,
                selected: value == DEFAULT_METHOD,
            })
            .collect(),
    };

    render(template)
}

/// Render a template into an HTML response.
pub(crate) fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}
