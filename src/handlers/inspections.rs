// src/handlers/inspections.rs

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
        regulatory::{CreateInspectionPayload, InspectionKey, InspectionRow, UpdateInspectionPayload},
    },
};

// A inspeção não tem Id próprio: a rota carrega o par (processo, código)

// GET /api/inspection
#[utoipa::path(
    get,
    path = "/api/inspection",
    tag = "Inspeções",
    responses((status = 200, description = "Inspeções, mais recentes primeiro", body = DataResponse<Vec<InspectionRow>>))
)]
pub async fn list_inspections(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<InspectionRow>>>, AppError> {
    let inspections = app_state.regulatory_service.list_inspections().await?;
    Ok(Json(DataResponse::new(inspections)))
}

// POST /api/inspection
#[utoipa::path(
    post,
    path = "/api/inspection",
    tag = "Inspeções",
    request_body = CreateInspectionPayload,
    responses(
        (status = 200, description = "Inspeção cadastrada", body = MessageResponse),
        (status = 500, description = "Par (processo, código) repetido ou processo inexistente", body = ErrorResponse)
    )
)]
pub async fn create_inspection(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateInspectionPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    app_state.regulatory_service.create_inspection(&payload).await?;
    Ok(Json(MessageResponse::new("Inspeção cadastrada!")))
}

// PUT /api/inspection/{idProcess}/{code}
#[utoipa::path(
    put,
    path = "/api/inspection/{idProcess}/{code}",
    tag = "Inspeções",
    request_body = UpdateInspectionPayload,
    params(
        ("idProcess" = i32, Path, description = "Id do processo"),
        ("code" = String, Path, description = "Código da inspeção dentro do processo")
    ),
    responses(
        (status = 200, description = "Inspeção atualizada", body = MessageResponse),
        (status = 404, description = "Inspeção não encontrada", body = ErrorResponse)
    )
)]
pub async fn update_inspection(
    State(app_state): State<AppState>,
    AppPath(key): AppPath<InspectionKey>,
    AppJson(payload): AppJson<UpdateInspectionPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state
        .regulatory_service
        .update_inspection(&key, &payload)
        .await?;
    ensure_affected(affected, "Inspeção não encontrada")?;
    Ok(Json(MessageResponse::new("Inspeção atualizada!")))
}

// DELETE /api/inspection/{idProcess}/{code}
#[utoipa::path(
    delete,
    path = "/api/inspection/{idProcess}/{code}",
    tag = "Inspeções",
    params(
        ("idProcess" = i32, Path, description = "Id do processo"),
        ("code" = String, Path, description = "Código da inspeção dentro do processo")
    ),
    responses(
        (status = 200, description = "Inspeção removida", body = MessageResponse),
        (status = 404, description = "Inspeção não encontrada", body = ErrorResponse)
    )
)]
pub async fn delete_inspection(
    State(app_state): State<AppState>,
    AppPath(key): AppPath<InspectionKey>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.regulatory_service.delete_inspection(&key).await?;
    ensure_affected(affected, "Inspeção não encontrada")?;
    Ok(Json(MessageResponse::new("Inspeção removida!")))
}
