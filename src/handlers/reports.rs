// src/handlers/reports.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        envelope::DataResponse,
        reports::{
            ClientVesselCount, InspectedProcess, LargestVessel, OrganActiveProcesses,
            OwnerDocument, PanelEntry,
        },
    },
};

// =============================================================================
//  CONSULTAS FIXAS (somente leitura, sem parâmetros)
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/consultas/clientes-embarcacoes",
    tag = "Consultas",
    responses((status = 200, description = "Clientes e quantidade de embarcações", body = DataResponse<Vec<ClientVesselCount>>))
)]
pub async fn clients_with_vessel_count(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<ClientVesselCount>>>, AppError> {
    let rows = app_state.report_service.clients_with_vessel_count().await?;
    Ok(Json(DataResponse::new(rows)))
}

#[utoipa::path(
    get,
    path = "/api/consultas/orgaos-processos",
    tag = "Consultas",
    responses((status = 200, description = "Órgãos com processos ativos", body = DataResponse<Vec<OrganActiveProcesses>>))
)]
pub async fn organs_with_active_processes(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<OrganActiveProcesses>>>, AppError> {
    let rows = app_state.report_service.organs_with_active_processes().await?;
    Ok(Json(DataResponse::new(rows)))
}

#[utoipa::path(
    get,
    path = "/api/consultas/documentos-clientes",
    tag = "Consultas",
    responses((status = 200, description = "Documentos de clientes que possuem embarcação", body = DataResponse<Vec<OwnerDocument>>))
)]
pub async fn documents_of_vessel_owners(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<OwnerDocument>>>, AppError> {
    let rows = app_state.report_service.documents_of_vessel_owners().await?;
    Ok(Json(DataResponse::new(rows)))
}

#[utoipa::path(
    get,
    path = "/api/consultas/processos-inspecoes",
    tag = "Consultas",
    responses((status = 200, description = "Processos com ao menos uma inspeção", body = DataResponse<Vec<InspectedProcess>>))
)]
pub async fn processes_with_inspections(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<InspectedProcess>>>, AppError> {
    let rows = app_state.report_service.processes_with_inspections().await?;
    Ok(Json(DataResponse::new(rows)))
}

#[utoipa::path(
    get,
    path = "/api/consultas/embarcacao-maior",
    tag = "Consultas",
    responses((status = 200, description = "Embarcação(ões) de maior capacidade", body = DataResponse<Vec<LargestVessel>>))
)]
pub async fn largest_vessels(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<LargestVessel>>>, AppError> {
    let rows = app_state.report_service.largest_vessels().await?;
    Ok(Json(DataResponse::new(rows)))
}

#[utoipa::path(
    get,
    path = "/api/consultas/painel-geral",
    tag = "Consultas",
    responses((status = 200, description = "Painel geral por cliente e embarcação", body = DataResponse<Vec<PanelEntry>>))
)]
pub async fn general_panel(
    State(app_state): State<AppState>,
) -> Result<Json<DataResponse<Vec<PanelEntry>>>, AppError> {
    let rows = app_state.report_service.general_panel().await?;
    Ok(Json(DataResponse::new(rows)))
}
