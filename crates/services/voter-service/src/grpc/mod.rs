//! gRPC adapters.

mod voter_grpc;

pub use voter_grpc::VoterGrpcService;
