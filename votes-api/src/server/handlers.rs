// HTTP request handlers
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use votes_engine::VoteOutcome;
use votes_shared::types::{TargetId, UserScore, VoteTarget};

use crate::errors::ApiError;
use crate::server::auth::CallerId;
use crate::server::state::AppState;

/// Body of a vote request. A missing body or `type` is treated as an
/// invalid vote type.
#[derive(Debug, Default, Deserialize)]
pub struct VoteRequest {
    #[serde(rename = "type")]
    pub vote_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoteResponse {
    pub success: bool,
    pub votes: i64,
    pub id: TargetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        Self {
            success: true,
            votes: outcome.tally,
            id: outcome.target_id(),
            message: outcome.message().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TallyResponse {
    pub id: TargetId,
    pub votes: i64,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Votes API is running")
}

/// `POST /posts/:id/vote`
pub async fn vote_post(
    State(state): State<AppState>,
    CallerId(voter_id): CallerId,
    Path(id): Path<String>,
    body: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteResponse>, ApiError> {
    let target = VoteTarget::post(parse_id(&id, "post")?);
    cast(&state, voter_id, target, body).await
}

/// `POST /comments/:id/vote`
pub async fn vote_comment(
    State(state): State<AppState>,
    CallerId(voter_id): CallerId,
    Path(id): Path<String>,
    body: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteResponse>, ApiError> {
    let target = VoteTarget::comment(parse_id(&id, "comment")?);
    cast(&state, voter_id, target, body).await
}

/// `GET /posts/:id/votes`
pub async fn post_tally(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TallyResponse>, ApiError> {
    let target = VoteTarget::post(parse_id(&id, "post")?);
    tally(&state, target).await
}

/// `GET /comments/:id/votes`
pub async fn comment_tally(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TallyResponse>, ApiError> {
    let target = VoteTarget::comment(parse_id(&id, "comment")?);
    tally(&state, target).await
}

/// `GET /users/:id/score`
pub async fn user_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserScore>, ApiError> {
    let user_id = parse_id(&id, "user")?;
    Ok(Json(state.engine.get_score(user_id).await?))
}

async fn cast(
    state: &AppState,
    voter_id: Uuid,
    target: VoteTarget,
    body: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteResponse>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "Rejected vote body");
            VoteRequest::default()
        }
    };
    let requested = request.vote_type.unwrap_or_default();

    let outcome = state.engine.cast_vote(voter_id, target, &requested).await?;
    Ok(Json(outcome.into()))
}

async fn tally(state: &AppState, target: VoteTarget) -> Result<Json<TallyResponse>, ApiError> {
    let votes = state.engine.get_tally(target).await?;
    Ok(Json(TallyResponse {
        id: target.id,
        votes,
    }))
}

fn parse_id(raw: &str, kind: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId(kind))
}
