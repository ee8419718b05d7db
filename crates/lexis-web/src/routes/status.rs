//! Busy-state snapshot.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub outstanding: usize,
    pub busy: bool,
}

#[derive(Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub session: String,
}

/// GET /api/status?session=<id> - Outstanding analysis calls of one page.
pub async fn get_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Json<StatusResponse> {
    let outstanding = state
        .find_session(&query.session)
        .map(|session| session.busy.outstanding())
        .unwrap_or(0);
    Json(StatusResponse {
        outstanding,
        busy: outstanding > 0,
    })
}
