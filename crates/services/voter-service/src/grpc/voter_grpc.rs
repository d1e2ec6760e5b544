//! gRPC implementation for VoterService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::VoterService;
use domain::{VoterInput, VoterOutput};
use proto::voter::{
    voter_service_server::VoterService as VoterServiceProto, CreateVoterRequest,
    DeleteVoterRequest, GenericResponse, GetVoterRequest, ListVotersRequest, ListVotersResponse,
    UpdateVoterRequest, VoterResponse,
};

/// gRPC service wrapper for VoterService.
pub struct VoterGrpcService {
    service: Arc<dyn VoterService>,
}

impl VoterGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn VoterService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl VoterServiceProto for VoterGrpcService {
    async fn list_voters(
        &self,
        _request: Request<ListVotersRequest>,
    ) -> Result<Response<ListVotersResponse>, Status> {
        let voters = self.service.list().await.map_err(Status::from)?;
        let total = voters.len() as i32;
        let voters: Vec<VoterResponse> = voters.iter().map(voter_to_proto).collect();

        Ok(Response::new(ListVotersResponse { voters, total }))
    }

    async fn get_voter(
        &self,
        request: Request<GetVoterRequest>,
    ) -> Result<Response<VoterResponse>, Status> {
        let req = request.into_inner();

        let voter = self.service.get_by_id(req.id).await.map_err(Status::from)?;
        Ok(Response::new(voter_to_proto(&voter)))
    }

    async fn create_voter(
        &self,
        request: Request<CreateVoterRequest>,
    ) -> Result<Response<VoterResponse>, Status> {
        let req = request.into_inner();

        let voter = self
            .service
            .create(input_from_proto(req.voter))
            .await
            .map_err(Status::from)?;
        Ok(Response::new(voter_to_proto(&voter)))
    }

    async fn update_voter(
        &self,
        request: Request<UpdateVoterRequest>,
    ) -> Result<Response<VoterResponse>, Status> {
        let req = request.into_inner();

        let voter = self
            .service
            .update(req.id, input_from_proto(req.voter))
            .await
            .map_err(Status::from)?;
        Ok(Response::new(voter_to_proto(&voter)))
    }

    async fn delete_voter(
        &self,
        request: Request<DeleteVoterRequest>,
    ) -> Result<Response<GenericResponse>, Status> {
        let req = request.into_inner();

        let output = self.service.delete(req.id).await.map_err(Status::from)?;
        Ok(Response::new(GenericResponse {
            message: output.message,
        }))
    }
}

/// Convert proto VoterInput to domain input; a missing message is an empty input.
fn input_from_proto(input: Option<proto::voter::VoterInput>) -> VoterInput {
    let input = input.unwrap_or_default();
    VoterInput {
        email: input.email,
        name: input.name,
        password: input.password,
        password_confirm: input.password_confirm,
    }
}

/// Convert domain VoterOutput to proto VoterResponse.
fn voter_to_proto(voter: &VoterOutput) -> VoterResponse {
    VoterResponse {
        id: voter.id,
        name: voter.name.clone(),
        email: voter.email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use common::{AppError, AppResult};
    use domain::{DomainError, GenericOutput, ERROR_CODE_METADATA_KEY};

    /// Echoes inputs back and fails on absent ids.
    struct EchoService;

    #[async_trait]
    impl VoterService for EchoService {
        async fn list(&self) -> AppResult<Vec<VoterOutput>> {
            Ok(vec![VoterOutput {
                id: 1,
                name: "Maria Silva".to_string(),
                email: "maria@example.com".to_string(),
            }])
        }

        async fn create(&self, input: VoterInput) -> AppResult<VoterOutput> {
            Ok(VoterOutput {
                id: 10,
                name: input.name.unwrap_or_default(),
                email: input.email.unwrap_or_default(),
            })
        }

        async fn get_by_id(&self, id: Option<i64>) -> AppResult<VoterOutput> {
            let id = id.ok_or(DomainError::InvalidId)?;
            Err(AppError::from(if id == 404 {
                DomainError::VoterNotFound
            } else {
                DomainError::internal("unexpected id")
            }))
        }

        async fn update(&self, _id: Option<i64>, _input: VoterInput) -> AppResult<VoterOutput> {
            Err(DomainError::DuplicateEmail.into())
        }

        async fn delete(&self, id: Option<i64>) -> AppResult<GenericOutput> {
            id.ok_or(DomainError::InvalidId)?;
            Ok(GenericOutput::voter_deleted())
        }
    }

    fn grpc() -> VoterGrpcService {
        VoterGrpcService::new(Arc::new(EchoService))
    }

    fn error_code(status: &Status) -> Option<&str> {
        status
            .metadata()
            .get(ERROR_CODE_METADATA_KEY)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_list_voters_reports_total() {
        let response = grpc()
            .list_voters(Request::new(ListVotersRequest {}))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.total, 1);
        assert_eq!(response.voters[0].email, "maria@example.com");
    }

    #[tokio::test]
    async fn test_create_passes_fields_through() {
        let request = CreateVoterRequest {
            voter: Some(proto::voter::VoterInput {
                email: Some("ana@example.com".to_string()),
                name: Some("Ana Souza".to_string()),
                password: None,
                password_confirm: None,
            }),
        };

        let response = grpc()
            .create_voter(Request::new(request))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.id, 10);
        assert_eq!(response.name, "Ana Souza");
    }

    #[tokio::test]
    async fn test_absent_id_is_invalid_argument() {
        let status = grpc()
            .get_voter(Request::new(GetVoterRequest { id: None }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "Invalid id");
        assert_eq!(error_code(&status), Some("INVALID_ID"));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let status = grpc()
            .get_voter(Request::new(GetVoterRequest { id: Some(404) }))
            .await
            .unwrap_err();

        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(error_code(&status), Some("VOTER_NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_update_error_carries_code() {
        let status = grpc()
            .update_voter(Request::new(UpdateVoterRequest {
                id: Some(1),
                voter: None,
            }))
            .await
            .unwrap_err();

        assert_eq!(status.message(), "Duplicate email");
        assert_eq!(error_code(&status), Some("DUPLICATE_EMAIL"));
    }

    #[tokio::test]
    async fn test_delete_returns_message() {
        let response = grpc()
            .delete_voter(Request::new(DeleteVoterRequest { id: Some(3) }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.message, "Voter deleted");
    }
}
