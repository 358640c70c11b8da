// src/handlers/health.rs

use axum::{extract::State, http::StatusCode, Json};

use crate::{config::AppState, models::envelope::HealthResponse};

// GET /api/health
// Banco fora do ar não é erro desta rota: responde 503 com connected = false.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Sistema",
    responses(
        (status = 200, description = "Banco acessível", body = HealthResponse),
        (status = 503, description = "Banco inacessível", body = HealthResponse)
    )
)]
pub async fn health_check(State(app_state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match sqlx::query("SELECT 1").execute(&app_state.db_pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse { success: true, connected: true }),
        ),
        Err(e) => {
            tracing::warn!("Teste de conexão falhou: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { success: false, connected: false }),
            )
        }
    }
}
