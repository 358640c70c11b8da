// src/handlers/documents.rs

use axum::{extract::State, Json};

use crate::{
    common::{
        error::AppError,
        extract::{AppJson, AppPath},
    },
    config::AppState,
    handlers::ensure_affected,
    models::{
        document::{DocumentPayload, DocumentRow},
        envelope::{DataResponse, ErrorResponse, MessageResponse},
    },
};

// GET /api/document
#[utoipa::path(
    get,
    path = "/api/document",
    tag = "Documentos",
    responses((status = 200, description = "Documentos com CPF do cliente e órgão emissor", body = DataResponse<Vec<DocumentRow>>))
)]
pub async fn list_documents(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<DocumentRow>>>, AppError> {
    let documents = app_state.document_service.list_documents().await?;
    Ok(Json(DataResponse::new(documents)))
}

// POST /api/document
#[utoipa::path(
    post,
    path = "/api/document",
    tag = "Documentos",
    request_body = DocumentPayload,
    responses(
        (status = 200, description = "Documento cadastrado", body = MessageResponse),
        (status = 500, description = "Cliente inexistente ou falha no banco", body = ErrorResponse)
    )
)]
pub async fn create_document(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<DocumentPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    app_state.document_service.create_document(&payload).await?;
    Ok(Json(MessageResponse::new("Documento cadastrado!")))
}

// PUT /api/document/{id}
#[utoipa::path(
    put,
    path = "/api/document/{id}",
    tag = "Documentos",
    request_body = DocumentPayload,
    params(("id" = i32, Path, description = "Id do documento")),
    responses(
        (status = 200, description = "Documento atualizado", body = MessageResponse),
        (status = 404, description = "Documento não encontrado", body = ErrorResponse)
    )
)]
pub async fn update_document(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<DocumentPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.document_service.update_document(id, &payload).await?;
    ensure_affected(affected, "Documento não encontrado")?;
    Ok(Json(MessageResponse::new("Documento atualizado!")))
}

// DELETE /api/document/{id}
#[utoipa::path(
    delete,
    path = "/api/document/{id}",
    tag = "Documentos",
    params(("id" = i32, Path, description = "Id do documento")),
    responses(
        (status = 200, description = "Documento removido", body = MessageResponse),
        (status = 404, description = "Documento não encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_document(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let affected = app_state.document_service.delete_document(id).await?;
    ensure_affected(affected, "Documento não encontrado")?;
    Ok(Json(MessageResponse::new("Documento removido!")))
}
