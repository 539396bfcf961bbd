// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{KnowledgeEntry, IssueCode, MeasurementPair, ScoredCandidate, Recommendation, RecommendationKind};
pub use requests::RecommendationRequest;
pub use responses::{HealthResponse, ErrorResponse};
