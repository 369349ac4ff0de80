//! Trait abstraction for the plan service to enable mocking in tests

use super::error::PlanError;
use super::types::PlanRequest;
use async_trait::async_trait;

/// Remote diet plan generation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanService: Send + Sync {
    /// Send one request and return the plan text
    async fn generate_plan(&self, request: PlanRequest) -> Result<String, PlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormDraft;

    #[test]
    fn test_mock_service_as_trait_object() {
        let mut mock = MockPlanService::new();
        mock.expect_generate_plan()
            .times(1)
            .returning(|_| Err(PlanError::Timeout));
        let service: Box<dyn PlanService> = Box::new(mock);

        let result = tokio_test::block_on(
            service.generate_plan(PlanRequest::from(&FormDraft::default())),
        );
        assert!(matches!(result, Err(PlanError::Timeout)));
    }
}
