//! Plan service module for HTTP communication

mod client;
mod error;
mod traits;
mod types;

pub use client::PlanServiceClient;
pub use error::PlanError;
pub use traits::PlanService;
pub use types::PlanRequest;

#[cfg(test)]
pub use traits::MockPlanService;
