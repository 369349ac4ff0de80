//! HTTP client for the diet plan service

use super::error::PlanError;
use super::traits::PlanService;
use super::types::{extract_plan, PlanRequest};
use crate::config::ServiceSettings;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Client for the plan generation endpoint
pub struct PlanServiceClient {
    http: Client,
    url: String,
}

impl PlanServiceClient {
    /// Create a client from resolved settings
    pub fn new(settings: &ServiceSettings) -> Result<Self> {
        let http = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self::with_http_client(http, settings.url.clone()))
    }

    /// Create a client around an already configured reqwest client
    pub fn with_http_client(http: Client, url: String) -> Self {
        Self { http, url }
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PlanService for PlanServiceClient {
    async fn generate_plan(&self, request: PlanRequest) -> Result<String, PlanError> {
        debug!(url = %self.url, diet_type = %request.diet_type, "generate_plan: sending");

        let response = self.http.post(&self.url).json(&request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "generate_plan: response received");
        extract_plan(status, &body)
    }
}
