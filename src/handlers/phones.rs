// src/handlers/phones.rs

use axum::{extract::State, Json};

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    handlers::ensure_affected,
    models::{
        client::{PhoneKey, PhoneRow},
        envelope::{DataResponse, ErrorResponse, MessageResponse},
    },
};

// GET /api/phones/{idClient}
#[utoipa::path(
    get,
    path = "/api/phones/{idClient}",
    tag = "Telefones",
    params(("idClient" = i32, Path, description = "Id do cliente")),
    responses((status = 200, description = "Telefones do cliente", body = DataResponse<Vec<PhoneRow>>))
)]
pub async fn list_phones(
    State(app_state): State<AppState>,
    AppPath(id_client): AppPath<i32>,
) -> Result<Json<DataResponse<Vec<PhoneRow>>>, AppError> {
    let phones = app_state.client_service.list_phones(id_client).await?;
    Ok(Json(DataResponse::new(phones)))
}

// POST /api/phones
#[utoipa::path(
    post,
    path = "/api/phones",
    tag = "Telefones",
    request_body = PhoneKey,
    responses(
        (status = 200, description = "Telefone adicionado", body = MessageResponse),
        (status = 500, description = "Telefone repetido ou cliente inexistente", body = ErrorResponse)
    )
)]
pub async fn add_phone(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<PhoneKey>,
) -> Result<Json<MessageResponse>, AppError> {
    app_state.client_service.add_phone(&payload).await?;
    Ok(Json(MessageResponse::new("Telefone adicionado!")))
}

// DELETE /api/phones/{idClient}/{phone}
#[utoipa::path(
    delete,
    path = "/api/phones/{idClient}/{phone}",
    tag = "Telefones",
    params(
        ("idClient" = i32, Path, description = "Id do cliente"),
        ("phone" = String, Path, description = "Número, codificado para URL")
    ),
    responses(
        (status = 200, description = "Telefone removido", body = MessageResponse),
        (status = 404, description = "Telefone não encontrado", body = ErrorResponse)
    )
)]
pub async fn remove_phone(
    State(app_state): State<AppState>,
    AppPath(key): AppPath<PhoneKey>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.client_service.remove_phone(&key).await?;
    ensure_affected(affected, "Telefone não encontrado")?;
    Ok(Json(MessageResponse::new("Telefone removido!")))
}
