// src/services/regulatory_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{InspectionRepository, OrganRepository, ProcessRepository},
    models::regulatory::{
        CreateInspectionPayload, Inspection, InspectionKey, InspectionRow, Organ, OrganPayload,
        Process, ProcessPayload, ProcessRow, UpdateInspectionPayload,
    },
};

// Órgãos, os processos de cada órgão e as inspeções de cada processo
#[derive(Clone)]
pub struct RegulatoryService {
    organ_repo: OrganRepository,
    process_repo: ProcessRepository,
    inspection_repo: InspectionRepository,
    pool: PgPool,
}

impl RegulatoryService {
    pub fn new(
        organ_repo: OrganRepository,
        process_repo: ProcessRepository,
        inspection_repo: InspectionRepository,
        pool: PgPool,
    ) -> Self {
        Self { organ_repo, process_repo, inspection_repo, pool }
    }

    // =========================================================================
    //  ÓRGÃOS
    // =========================================================================

    pub async fn list_organs(&self) -> Result<Vec<Organ>, AppError> {
        self.organ_repo.list_organs().await
    }

    pub async fn create_organ(&self, payload: &OrganPayload) -> Result<Organ, AppError> {
        let organ = self
            .organ_repo
            .insert_organ(&self.pool, &payload.organ_name, payload.sail())
            .await?;

        tracing::info!("🏛️ Órgão {} cadastrado (id {})", organ.organ_name, organ.id);
        Ok(organ)
    }

    pub async fn update_organ(&self, id: i32, payload: &OrganPayload) -> Result<u64, AppError> {
        self.organ_repo
            .update_organ(&self.pool, id, &payload.organ_name, payload.sail())
            .await
    }

    pub async fn delete_organ(&self, id: i32) -> Result<u64, AppError> {
        self.organ_repo.delete_organ(&self.pool, id).await
    }

    // =========================================================================
    //  PROCESSOS
    // =========================================================================

    pub async fn list_processes(&self) -> Result<Vec<ProcessRow>, AppError> {
        self.process_repo.list_processes().await
    }

    pub async fn create_process(&self, payload: &ProcessPayload) -> Result<Process, AppError> {
        let process = self
            .process_repo
            .insert_process(
                &self.pool,
                &payload.process_name,
                &payload.process_number,
                payload.status,
                payload.id_organ,
            )
            .await?;

        tracing::info!("📂 Processo {} aberto no órgão {}", process.process_number, process.id_organ);
        Ok(process)
    }

    pub async fn update_process(&self, id: i32, payload: &ProcessPayload) -> Result<u64, AppError> {
        self.process_repo
            .update_process(
                &self.pool,
                id,
                &payload.process_name,
                &payload.process_number,
                payload.status,
                payload.id_organ,
            )
            .await
    }

    pub async fn delete_process(&self, id: i32) -> Result<u64, AppError> {
        self.process_repo.delete_process(&self.pool, id).await
    }

    // =========================================================================
    //  INSPEÇÕES (chave composta)
    // =========================================================================

    pub async fn list_inspections(&self) -> Result<Vec<InspectionRow>, AppError> {
        self.inspection_repo.list_inspections().await
    }

    pub async fn create_inspection(&self, payload: &CreateInspectionPayload) -> Result<Inspection, AppError> {
        self.inspection_repo
            .insert_inspection(&self.pool, &payload.key, &payload.name, payload.date)
            .await
    }

    pub async fn update_inspection(
        &self,
        key: &InspectionKey,
        payload: &UpdateInspectionPayload,
    ) -> Result<u64, AppError> {
        self.inspection_repo
            .update_inspection(&self.pool, key, &payload.name, payload.date)
            .await
    }

    pub async fn delete_inspection(&self, key: &InspectionKey) -> Result<u64, AppError> {
        self.inspection_repo.delete_inspection(&self.pool, key).await
    }
}
