// src/services/report_service.rs

use crate::{
    common::error::AppError,
    db::ReportRepository,
    models::reports::{
        ClientVesselCount, InspectedProcess, LargestVessel, OrganActiveProcesses, OwnerDocument,
        PanelEntry,
    },
};

#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
}

impl ReportService {
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    pub async fn clients_with_vessel_count(&self) -> Result<Vec<ClientVesselCount>, AppError> {
        self.repo.clients_with_vessel_count().await
    }

    pub async fn organs_with_active_processes(&self) -> Result<Vec<OrganActiveProcesses>, AppError> {
        self.repo.organs_with_active_processes().await
    }

    pub async fn documents_of_vessel_owners(&self) -> Result<Vec<OwnerDocument>, AppError> {
        self.repo.documents_of_vessel_owners().await
    }

    pub async fn processes_with_inspections(&self) -> Result<Vec<InspectedProcess>, AppError> {
        self.repo.processes_with_inspections().await
    }

    pub async fn largest_vessels(&self) -> Result<Vec<LargestVessel>, AppError> {
        self.repo.largest_vessels().await
    }

    pub async fn general_panel(&self) -> Result<Vec<PanelEntry>, AppError> {
        self.repo.general_panel().await
    }
}
