use axum::extract::State;
use axum::Json;

use crate::connector::api::Container;
use crate::domain::HealthStatus;

/// `GET /api/chat/health`. Liveness only; the model backend is not consulted.
pub async fn health(State(container): State<Container>) -> Json<HealthStatus> {
    Json(HealthStatus::ok(container.service_name()))
}
