// src/middleware/auth.rs

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{common::error::AppError, config::AppState, models::auth::Claims};

/// Guarda das rotas de usuário: exige um Bearer válido de Admin ou Gerente.
/// O papel é o gravado agora no "User" do `sub`, não o do momento do login.
pub async fn manager_guard(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())
        .ok_or(AppError::InvalidToken)?
        .to_owned();
    let claims: Claims = app_state.auth_service.authorize(&token).await?;

    if !claims.role.can_manage_users() {
        tracing::warn!("Acesso negado às rotas de usuário para o id {} ({:?})", claims.sub, claims.role);
        return Err(AppError::Forbidden);
    }

    // Os handlers de usuário leem as claims para registrar quem fez a alteração
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
