//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use domain::{GenericOutput, VoterInput, VoterOutput};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::voter_handler::list_voters,
        crate::handlers::voter_handler::create_voter,
        crate::handlers::voter_handler::get_voter,
        crate::handlers::voter_handler::update_voter,
        crate::handlers::voter_handler::delete_voter,
    ),
    components(
        schemas(
            VoterInput,
            VoterOutput,
            GenericOutput,
            HealthResponse,
        )
    ),
    tags(
        (name = "Voters", description = "Voter management endpoints"),
        (name = "Health", description = "Gateway liveness"),
    )
)]
pub struct ApiDoc;
