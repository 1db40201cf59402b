//! Backend health check

use crate::model::ServiceStatus;
use super::AppController;

impl AppController {
    /// Probe `/health` and update the status indicator. Never retried automatically.
    pub async fn check_health(&self) {
        self.model.set_service_status(ServiceStatus::Checking).await;

        let status = match self.api.health().await {
            Ok(()) => ServiceStatus::Healthy,
            Err(e) => {
                tracing::warn!(error = %e, "Music service health check failed");
                ServiceStatus::Unavailable
            }
        };
        tracing::info!(status = status.label(), "Music service status");
        self.model.set_service_status(status).await;
    }
}
