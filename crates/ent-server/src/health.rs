//! Health checks
//!
//! `GET /health/live` answers as long as the process serves requests.
//! `GET /health/ready` additionally pings the database pool.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use ent_db::Database;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Upper bound on a single database ping
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Overall health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub service: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: Vec<ComponentHealth>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    pub fn http_status(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Health checker service
pub struct HealthChecker {
    service: &'static str,
    start_time: Instant,
    db: Database,
}

impl HealthChecker {
    pub fn new(service: &'static str, db: Database) -> Self {
        Self {
            service,
            start_time: Instant::now(),
            db,
        }
    }

    pub async fn check(&self) -> HealthReport {
        let database = self.check_database().await;

        HealthReport {
            status: database.status,
            service: self.service.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            components: vec![database],
            timestamp: chrono::Utc::now(),
        }
    }

    async fn check_database(&self) -> ComponentHealth {
        let start = Instant::now();

        let (status, message) = match tokio::time::timeout(CHECK_TIMEOUT, self.db.ping()).await {
            Ok(Ok(())) => (HealthStatus::Healthy, None),
            Ok(Err(e)) => {
                warn!(error = %e, "Database health check failed");
                (HealthStatus::Unhealthy, Some(e.to_string()))
            }
            Err(_) => {
                warn!("Database health check timed out");
                (HealthStatus::Unhealthy, Some("timed out".to_string()))
            }
        };
        debug!(?status, "Database health checked");

        ComponentHealth {
            name: "database".to_string(),
            status,
            message,
            response_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Liveness check
pub async fn liveness() -> &'static str {
    "OK"
}

/// Readiness check
pub async fn readiness(State(health): State<Arc<HealthChecker>>) -> (StatusCode, Json<HealthReport>) {
    let report = health.check().await;
    (report.http_status(), Json(report))
}

/// Health routes
pub fn router(health: Arc<HealthChecker>) -> Router {
    Router::new()
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .with_state(health)
}
