//! Voter handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{GenericOutput, VoterInput, VoterOutput};

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Create voter routes
pub fn voter_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_voters).post(create_voter))
        .route(
            "/:voter_id",
            get(get_voter).put(update_voter).delete(delete_voter),
        )
}

/// Path ids that are not integers reach the service as absent.
fn parse_voter_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// List all voters
#[utoipa::path(
    get,
    path = "/v1/voter",
    tag = "Voters",
    responses(
        (status = 200, description = "List of all voters", body = Vec<VoterOutput>)
    )
)]
pub async fn list_voters(State(state): State<AppState>) -> AppResult<Json<Vec<VoterOutput>>> {
    let voters = state.voter_client.list_voters().await?;
    Ok(Json(voters))
}

/// Create a voter
#[utoipa::path(
    post,
    path = "/v1/voter",
    tag = "Voters",
    request_body = VoterInput,
    responses(
        (status = 200, description = "Voter created", body = VoterOutput),
        (status = 400, description = "Invalid email, name or password")
    )
)]
pub async fn create_voter(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VoterInput>,
) -> AppResult<Json<VoterOutput>> {
    let voter = state.voter_client.create_voter(payload).await?;
    Ok(Json(voter))
}

/// Get voter by ID
#[utoipa::path(
    get,
    path = "/v1/voter/{voterId}",
    tag = "Voters",
    params(
        ("voterId" = i64, Path, description = "Voter ID")
    ),
    responses(
        (status = 200, description = "Voter", body = VoterOutput),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Voter not found")
    )
)]
pub async fn get_voter(
    State(state): State<AppState>,
    Path(voter_id): Path<String>,
) -> AppResult<Json<VoterOutput>> {
    let voter = state
        .voter_client
        .get_voter(parse_voter_id(&voter_id))
        .await?;
    Ok(Json(voter))
}

/// Update a voter
///
/// A blank password keeps the current one.
#[utoipa::path(
    put,
    path = "/v1/voter/{voterId}",
    tag = "Voters",
    params(
        ("voterId" = i64, Path, description = "Voter ID")
    ),
    request_body = VoterInput,
    responses(
        (status = 200, description = "Voter updated", body = VoterOutput),
        (status = 400, description = "Invalid id, email, name or password"),
        (status = 404, description = "Voter not found")
    )
)]
pub async fn update_voter(
    State(state): State<AppState>,
    Path(voter_id): Path<String>,
    JsonBody(payload): JsonBody<VoterInput>,
) -> AppResult<Json<VoterOutput>> {
    let voter = state
        .voter_client
        .update_voter(parse_voter_id(&voter_id), payload)
        .await?;
    Ok(Json(voter))
}

/// Delete a voter who has not voted
#[utoipa::path(
    delete,
    path = "/v1/voter/{voterId}",
    tag = "Voters",
    params(
        ("voterId" = i64, Path, description = "Voter ID")
    ),
    responses(
        (status = 200, description = "Voter deleted", body = GenericOutput),
        (status = 400, description = "Voter already voted, or the election service failed"),
        (status = 404, description = "Voter not found")
    )
)]
pub async fn delete_voter(
    State(state): State<AppState>,
    Path(voter_id): Path<String>,
) -> AppResult<Json<GenericOutput>> {
    let output = state
        .voter_client
        .delete_voter(parse_voter_id(&voter_id))
        .await?;
    Ok(Json(output))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request, http::StatusCode};
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use super::*;
    use crate::clients::MockVoterServiceClient;
    use crate::config::GatewayConfig;

    fn router(client: MockVoterServiceClient) -> Router {
        Router::new()
            .nest("/v1/voter", voter_routes())
            .with_state(AppState::new(Arc::new(client), GatewayConfig::default()))
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_numeric_path_id_is_forwarded() {
        let mut client = MockVoterServiceClient::new();
        client
            .expect_delete_voter()
            .with(eq(Some(42)))
            .times(1)
            .returning(|_| Ok(GenericOutput::voter_deleted()));

        assert_eq!(status_of(router(client), "DELETE", "/v1/voter/42").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unparseable_path_id_is_forwarded_as_absent() {
        let mut client = MockVoterServiceClient::new();
        client
            .expect_get_voter()
            .with(eq(None))
            .times(1)
            .returning(|_| Err(domain::DomainError::InvalidId.into()));

        assert_eq!(
            status_of(router(client), "GET", "/v1/voter/12abc").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_parse_voter_id() {
        assert_eq!(parse_voter_id("42"), Some(42));
        assert_eq!(parse_voter_id(" 7 "), Some(7));
        assert_eq!(parse_voter_id("abc"), None);
        assert_eq!(parse_voter_id(""), None);
    }
}
