use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    /// Database reachability: "up" or "down"
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Healthy(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Degraded(Json<HealthCheckResponse>),
}

/// Health API for load balancers and monitoring
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports whether the service and its database are reachable.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let database_up = sqlx::query("SELECT 1").execute(&self.pool).await.is_ok();

        let body = HealthCheckResponse {
            status: if database_up { "healthy" } else { "degraded" }.to_string(),
            database: if database_up { "up" } else { "down" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        if database_up {
            HealthResponse::Healthy(Json(body))
        } else {
            tracing::warn!("health check could not reach the database");
            HealthResponse::Degraded(Json(body))
        }
    }
}
