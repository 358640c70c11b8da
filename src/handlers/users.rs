// src/handlers/users.rs

use axum::{extract::State, Extension, Json};

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    handlers::ensure_affected,
    models::{
        auth::{Claims, CreateUserPayload, UpdateUserPayload, User},
        envelope::{DataResponse, ErrorResponse, MessageResponse},
    },
};

// Todas as rotas daqui passam pelo `manager_guard` (quando ligado)

// Quem está agindo, para os logs. Sem a guarda não há claims.
fn actor(claims: &Option<Extension<Claims>>) -> String {
    match claims {
        Some(Extension(claims)) => format!("id {} ({:?})", claims.sub, claims.role),
        None => "anônimo (guarda desligada)".to_string(),
    }
}

// GET /api/user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Usuários",
    responses(
        (status = 200, description = "Usuários, sem as senhas", body = DataResponse<Vec<User>>),
        (status = 401, description = "Token ausente ou inválido", body = ErrorResponse),
        (status = 403, description = "Papel sem permissão", body = ErrorResponse)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<User>>>, AppError> {
    let users = app_state.user_service.list_users().await?;
    Ok(Json(DataResponse::new(users)))
}

// POST /api/user
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "Usuários",
    request_body = CreateUserPayload,
    responses(
        (status = 200, description = "Usuário criado", body = MessageResponse),
        (status = 500, description = "Email repetido ou falha no banco", body = ErrorResponse)
    ),
    security(("api_jwt" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    claims: Option<Extension<Claims>>,
    AppJson(payload): AppJson<CreateUserPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = app_state.user_service.create_user(&payload).await?;
    tracing::info!("Usuário {} criado por {}", user.id_person, actor(&claims));
    Ok(Json(MessageResponse::new("Usuário criado!")))
}

// PUT /api/user/{id}
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = "Usuários",
    request_body = UpdateUserPayload,
    params(("id" = i32, Path, description = "Id da Person do usuário")),
    responses(
        (status = 200, description = "Usuário atualizado; senha vazia mantém a atual", body = MessageResponse),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse)
    ),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    claims: Option<Extension<Claims>>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateUserPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.user_service.update_user(id, &payload).await?;
    ensure_affected(affected, "Usuário não encontrado")?;
    tracing::info!("Usuário {} atualizado por {}", id, actor(&claims));
    Ok(Json(MessageResponse::new("Usuário atualizado!")))
}

// DELETE /api/user/{id}
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = "Usuários",
    params(("id" = i32, Path, description = "Id da Person do usuário")),
    responses(
        (status = 200, description = "Usuário removido", body = MessageResponse),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_user(
    State(app_state): State<AppState>,
    claims: Option<Extension<Claims>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.user_service.delete_user(id).await?;
    ensure_affected(affected, "Usuário não encontrado")?;
    tracing::warn!("Usuário {} removido por {}", id, actor(&claims));
    Ok(Json(MessageResponse::new("Usuário removido!")))
}
