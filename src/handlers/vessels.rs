// src/handlers/vessels.rs

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
        vessel::{CreateVesselPayload, UpdateVesselPayload, VesselRow},
    },
};

// GET /api/vessel
#[utoipa::path(
    get,
    path = "/api/vessel",
    tag = "Embarcações",
    responses(
        (status = 200, description = "Embarcações com CPF e nome do proprietário", body = DataResponse<Vec<VesselRow>>)
    )
)]
pub async fn list_vessels(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<VesselRow>>>, AppError> {
    let vessels = app_state.vessel_service.list_vessels().await?;
    Ok(Json(DataResponse::new(vessels)))
}

// POST /api/vessel
#[utoipa::path(
    post,
    path = "/api/vessel",
    tag = "Embarcações",
    request_body = CreateVesselPayload,
    responses(
        (status = 200, description = "Embarcação registrada", body = MessageResponse),
        (status = 404, description = "Nenhum cliente com o CPF informado", body = ErrorResponse)
    )
)]
pub async fn create_vessel(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateVesselPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    app_state.vessel_service.create_vessel(&payload).await?;
    Ok(Json(MessageResponse::new("Embarcação registrada!")))
}

// PUT /api/vessel/{id}
#[utoipa::path(
    put,
    path = "/api/vessel/{id}",
    tag = "Embarcações",
    request_body = UpdateVesselPayload,
    params(("id" = i32, Path, description = "Id da embarcação")),
    responses(
        (status = 200, description = "Embarcação atualizada (o dono não muda)", body = MessageResponse),
        (status = 404, description = "Embarcação não encontrada", body = ErrorResponse)
    )
)]
pub async fn update_vessel(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateVesselPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.vessel_service.update_vessel(id, &payload).await?;
    ensure_affected(affected, "Embarcação não encontrada")?;
    Ok(Json(MessageResponse::new("Embarcação atualizada!")))
}

// DELETE /api/vessel/{id}
#[utoipa::path(
    delete,
    path = "/api/vessel/{id}",
    tag = "Embarcações",
    params(("id" = i32, Path, description = "Id da embarcação")),
    responses(
        (status = 200, description = "Embarcação removida", body = MessageResponse),
        (status = 404, description = "Embarcação não encontrada", body = ErrorResponse)
    )
)]
pub async fn delete_vessel(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.vessel_service.delete_vessel(id).await?;
    ensure_affected(affected, "Embarcação não encontrada")?;
    Ok(Json(MessageResponse::new("Embarcação removida!")))
}
