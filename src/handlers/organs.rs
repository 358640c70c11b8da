// src/handlers/organs.rs

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
        regulatory::{Organ, OrganPayload},
    },
};

// GET /api/organ
#[utoipa::path(
    get,
    path = "/api/organ",
    tag = "Órgãos",
    responses((status = 200, description = "Órgãos em ordem de nome", body = DataResponse<Vec<Organ>>))
)]
pub async fn list_organs(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<Organ>>>, AppError> {
    let organs = app_state.regulatory_service.list_organs().await?;
    Ok(Json(DataResponse::new(organs)))
}

// POST /api/organ
#[utoipa::path(
    post,
    path = "/api/organ",
    tag = "Órgãos",
    request_body = OrganPayload,
    responses((status = 200, description = "Órgão cadastrado", body = MessageResponse))
)]
pub async fn create_organ(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<OrganPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    app_state.regulatory_service.create_organ(&payload).await?;
    Ok(Json(MessageResponse::new("Órgão cadastrado!")))
}

// PUT /api/organ/{id}
#[utoipa::path(
    put,
    path = "/api/organ/{id}",
    tag = "Órgãos",
    request_body = OrganPayload,
    params(("id" = i32, Path, description = "Id do órgão")),
    responses(
        (status = 200, description = "Órgão atualizado", body = MessageResponse),
        (status = 404, description = "Órgão não encontrado", body = ErrorResponse)
    )
)]
pub async fn update_organ(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<OrganPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.regulatory_service.update_organ(id, &payload).await?;
    ensure_affected(affected, "Órgão não encontrado")?;
    Ok(Json(MessageResponse::new("Órgão atualizado!")))
}

// DELETE /api/organ/{id}
#[utoipa::path(
    delete,
    path = "/api/organ/{id}",
    tag = "Órgãos",
    params(("id" = i32, Path, description = "Id do órgão")),
    responses(
        (status = 200, description = "Órgão removido", body = MessageResponse),
        (status = 404, description = "Órgão não encontrado", body = ErrorResponse),
        (status = 500, description = "Órgão ainda tem processos", body = ErrorResponse)
    )
)]
pub async fn delete_organ(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.regulatory_service.delete_organ(id).await?;
    ensure_affected(affected, "Órgão não encontrado")?;
    Ok(Json(MessageResponse::new("Órgão removido!")))
}
