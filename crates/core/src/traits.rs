use crate::{GenerationRequest, GenerationResponse, SummaryError};
use async_trait::async_trait;

/// A remote text-generation endpoint.
///
/// Implementations send one request and return the status with either the
/// output text or the service's message. Non-200 statuses are reported in the
/// response, not as `Err`; `Err` is reserved for transport failures.
#[async_trait]
pub trait GenerationService {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, SummaryError>;
}
