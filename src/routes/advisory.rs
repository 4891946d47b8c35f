use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::models::AdvisoryRequest;
use crate::services::advisor::AdvisoryReply;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(submit_advisory_request))
}

/// POST /api/advisory
///
/// Accepts an advisory request (body and every field optional) and returns a
/// portfolio recommendation, a short general answer, or an error variant when
/// the LLM produced unusable output.
///
/// An absent body defaults every field; a present but malformed body gets
/// the standard JSON rejection rather than a defaulted recommendation.
///
/// Request body:
/// {
///   "capital": 100000,
///   "monthlyInvestment": 5000,
///   "riskLevel": "medium",
///   "preferences": ["equity", "gold"],
///   "query": "What is SIP?",
///   "language": "en"
/// }
async fn submit_advisory_request(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AdvisoryReply>, JsonRejection> {
    let request = if body.is_empty() {
        AdvisoryRequest::default()
    } else {
        let Json(request) = Json::<AdvisoryRequest>::from_bytes(&body)?;
        request
    };
    info!(
        "POST /api/advisory - risk: {}, query: {:?}",
        request.risk(),
        request.query
    );

    Ok(Json(state.advisor.handle(request).await))
}
