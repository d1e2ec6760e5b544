//! gRPC client for voter-service.

use async_trait::async_trait;
use tonic::transport::Channel;
use tracing::debug;

use common::{AppError, AppResult};
use domain::{GenericOutput, VoterInput, VoterOutput};
use proto::voter::{
    voter_service_client::VoterServiceClient as ProtoVoterServiceClient, CreateVoterRequest,
    DeleteVoterRequest, GetVoterRequest, ListVotersRequest, UpdateVoterRequest, VoterResponse,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Voter operations the REST handlers call.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VoterServiceClient: Send + Sync {
    /// List all voters.
    async fn list_voters(&self) -> AppResult<Vec<VoterOutput>>;

    /// Get voter by ID.
    async fn get_voter(&self, id: Option<i64>) -> AppResult<VoterOutput>;

    /// Create voter.
    async fn create_voter(&self, input: VoterInput) -> AppResult<VoterOutput>;

    /// Update voter.
    async fn update_voter(&self, id: Option<i64>, input: VoterInput) -> AppResult<VoterOutput>;

    /// Delete voter.
    async fn delete_voter(&self, id: Option<i64>) -> AppResult<GenericOutput>;
}

/// gRPC client wrapper for voter-service.
pub struct VoterClient {
    client: ProtoVoterServiceClient<Channel>,
}

impl VoterClient {
    /// Connect to voter-service.
    pub async fn connect(endpoint: &str) -> Result<Self, tonic::transport::Error> {
        debug!("Connecting to voter-service at {}", endpoint);
        let client = ProtoVoterServiceClient::connect(endpoint.to_string()).await?;
        Ok(Self { client })
    }
}

#[async_trait]
impl VoterServiceClient for VoterClient {
    async fn list_voters(&self) -> AppResult<Vec<VoterOutput>> {
        let request = tonic::Request::new(ListVotersRequest {});

        let mut client = self.client.clone();
        let response = client.list_voters(request).await.map_err(AppError::from)?;

        Ok(response
            .into_inner()
            .voters
            .into_iter()
            .map(proto_to_voter)
            .collect())
    }

    async fn get_voter(&self, id: Option<i64>) -> AppResult<VoterOutput> {
        let request = tonic::Request::new(GetVoterRequest { id });

        let mut client = self.client.clone();
        let response = client.get_voter(request).await.map_err(AppError::from)?;
        Ok(proto_to_voter(response.into_inner()))
    }

    async fn create_voter(&self, input: VoterInput) -> AppResult<VoterOutput> {
        let request = tonic::Request::new(CreateVoterRequest {
            voter: Some(input_to_proto(input)),
        });

        let mut client = self.client.clone();
        let response = client.create_voter(request).await.map_err(AppError::from)?;
        Ok(proto_to_voter(response.into_inner()))
    }

    async fn update_voter(&self, id: Option<i64>, input: VoterInput) -> AppResult<VoterOutput> {
        let request = tonic::Request::new(UpdateVoterRequest {
            id,
            voter: Some(input_to_proto(input)),
        });

        let mut client = self.client.clone();
        let response = client.update_voter(request).await.map_err(AppError::from)?;
        Ok(proto_to_voter(response.into_inner()))
    }

    async fn delete_voter(&self, id: Option<i64>) -> AppResult<GenericOutput> {
        let request = tonic::Request::new(DeleteVoterRequest { id });

        let mut client = self.client.clone();
        let response = client.delete_voter(request).await.map_err(AppError::from)?;
        Ok(GenericOutput::new(response.into_inner().message))
    }
}

fn input_to_proto(input: VoterInput) -> proto::voter::VoterInput {
    proto::voter::VoterInput {
        email: input.email,
        name: input.name,
        password: input.password,
        password_confirm: input.password_confirm,
    }
}

/// Convert proto VoterResponse to domain VoterOutput.
fn proto_to_voter(proto: VoterResponse) -> VoterOutput {
    VoterOutput {
        id: proto.id,
        name: proto.name,
        email: proto.email,
    }
}
