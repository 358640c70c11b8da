// src/handlers/auth.rs

use axum::{extract::State, Json};

use crate::{
    common::{error::AppError, extract::AppJson},
    config::AppState,
    models::{
        auth::LoginPayload,
        envelope::{ErrorResponse, LoginResponse},
    },
};

// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login efetuado; devolve o usuário e o token", body = LoginResponse),
        (status = 401, description = "Email ou senha inválidos", body = ErrorResponse)
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<LoginPayload>,
) -> Result<Json<LoginResponse>, AppError> {
    let (user, token) = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse::new(user, token)))
}
