// src/handlers/processes.rs

use axum::{extract::State, Json};

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    handlers::ensure_affected,
    models::{
        envelope::{DataResponse, ErrorResponse, MessageResponse},
        regulatory::{ProcessPayload, ProcessRow},
    },
};

// GET /api/process
#[utoipa::path(
    get,
    path = "/api/process",
    tag = "Processos",
    responses((status = 200, description = "Processos com o nome do órgão", body = DataResponse<Vec<ProcessRow>>))
)]
pub async fn list_processes(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ProcessRow>>>, AppError> {
    let processes = app_state.regulatory_service.list_processes().await?;
    Ok(Json(DataResponse::new(processes)))
}

// POST /api/process
#[utoipa::path(
    post,
    path = "/api/process",
    tag = "Processos",
    request_body = ProcessPayload,
    responses(
        (status = 200, description = "Processo cadastrado", body = MessageResponse),
        (status = 500, description = "Órgão inexistente ou falha no banco", body = ErrorResponse)
    )
)]
pub async fn create_process(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<ProcessPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    app_state.regulatory_service.create_process(&payload).await?;
    Ok(Json(MessageResponse::new("Processo cadastrado!")))
}

// PUT /api/process/{id}
#[utoipa::path(
    put,
    path = "/api/process/{id}",
    tag = "Processos",
    request_body = ProcessPayload,
    params(("id" = i32, Path, description = "Id do processo")),
    responses(
        (status = 200, description = "Processo atualizado", body = MessageResponse),
        (status = 404, description = "Processo não encontrado", body = ErrorResponse)
    )
)]
pub async fn update_process(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ProcessPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.regulatory_service.update_process(id, &payload).await?;
    ensure_affected(affected, "Processo não encontrado")?;
    Ok(Json(MessageResponse::new("Processo atualizado!")))
}

// DELETE /api/process/{id}
#[utoipa::path(
    delete,
    path = "/api/process/{id}",
    tag = "Processos",
    params(("id" = i32, Path, description = "Id do processo")),
    responses(
        (status = 200, description = "Processo removido junto com as inspeções", body = MessageResponse),
        (status = 404, description = "Processo não encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_process(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.regulatory_service.delete_process(id).await?;
    ensure_affected(affected, "Processo não encontrado")?;
    Ok(Json(MessageResponse::new("Processo removido!")))
}
