// src/handlers/clients.rs

use axum::{extract::State, Json};

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    handlers::ensure_affected,
    models::{
        client::{ClientPayload, ClientRow},
        envelope::{DataResponse, ErrorResponse, MessageResponse},
    },
};

// GET /api/client
#[utoipa::path(
    get,
    path = "/api/client",
    tag = "Clientes",
    responses(
        (status = 200, description = "Clientes em ordem de nome", body = DataResponse<Vec<ClientRow>>),
        (status = 500, description = "Falha no banco", body = ErrorResponse)
    )
)]
pub async fn list_clients(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ClientRow>>>, AppError> {
    let clients = app_state.client_service.list_clients().await?;
    Ok(Json(DataResponse::new(clients)))
}

// POST /api/client
#[utoipa::path(
    post,
    path = "/api/client",
    tag = "Clientes",
    request_body = ClientPayload,
    responses(
        (status = 200, description = "Cliente cadastrado", body = MessageResponse),
        (status = 500, description = "CPF repetido ou falha no banco", body = ErrorResponse)
    )
)]
pub async fn create_client(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ClientPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    app_state.client_service.create_client(&payload).await?;
    Ok(Json(MessageResponse::new("Cliente cadastrado com sucesso!")))
}

// PUT /api/client/{id}
#[utoipa::path(
    put,
    path = "/api/client/{id}",
    tag = "Clientes",
    request_body = ClientPayload,
    params(("id" = i32, Path, description = "Id da Person do cliente")),
    responses(
        (status = 200, description = "Cliente atualizado", body = MessageResponse),
        (status = 404, description = "Cliente não encontrado", body = ErrorResponse)
    )
)]
pub async fn update_client(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ClientPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.client_service.update_client(id, &payload).await?;
    ensure_affected(affected, "Cliente não encontrado")?;
    Ok(Json(MessageResponse::new("Cliente atualizado!")))
}

// DELETE /api/client/{id}
#[utoipa::path(
    delete,
    path = "/api/client/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "Id da Person do cliente")),
    responses(
        (status = 200, description = "Cliente removido (telefones e documentos vão junto)", body = MessageResponse),
        (status = 404, description = "Cliente não encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_client(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.client_service.delete_client(id).await?;
    ensure_affected(affected, "Cliente não encontrado")?;
    Ok(Json(MessageResponse::new("Cliente removido!")))
}
