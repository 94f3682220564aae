//! HTTP client for the route planning service.

use async_trait::async_trait;
use routeplan_core::{PlanRequest, PlanResponse, PlanningError};
use std::time::Duration;

/// Anything that can turn a plan request into a planner response.
#[async_trait]
pub trait RoutePlanner: Send + Sync {
    async fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanningError>;
}

/// Client for `POST <base>/api/plan-route`.
#[derive(Debug, Clone)]
pub struct HttpRoutePlanner {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRoutePlanner {
    /// Create a planner client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the planner (e.g., "http://localhost:5000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a planner client whose requests time out after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PlanningError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlanningError::Transport(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/plan-route", self.base_url)
    }
}

#[async_trait]
impl RoutePlanner for HttpRoutePlanner {
    #[tracing::instrument(skip(self, request), fields(points = request.points.len()))]
    async fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanningError> {
        let url = self.endpoint();
        tracing::info!(%url, "Requesting route plan");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| PlanningError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlanningError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PlanningError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| PlanningError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let planner = HttpRoutePlanner::new("http://localhost:5000/");
        assert_eq!(planner.endpoint(), "http://localhost:5000/api/plan-route");
    }

    #[tokio::test]
    async fn unreachable_planner_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = format!("http://{addr}");
        let planner = HttpRoutePlanner::with_timeout(base, Duration::from_secs(2)).unwrap();
        let request = PlanRequest { points: Vec::new() };
        let err = planner.plan(&request).await.unwrap_err();
        assert!(matches!(err, PlanningError::Transport(_)), "got {err:?}");
    }
}
