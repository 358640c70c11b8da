// src/services/vessel_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{ClientRepository, VesselRepository},
    models::vessel::{CreateVesselPayload, UpdateVesselPayload, Vessel, VesselRow},
};

#[derive(Clone)]
pub struct VesselService {
    client_repo: ClientRepository,
    vessel_repo: VesselRepository,
    pool: PgPool,
}

impl VesselService {
    pub fn new(client_repo: ClientRepository, vessel_repo: VesselRepository, pool: PgPool) -> Self {
        Self { client_repo, vessel_repo, pool }
    }

    pub async fn list_vessels(&self) -> Result<Vec<VesselRow>, AppError> {
        self.vessel_repo.list_vessels().await
    }

    /// Resolve o dono pelo CPF e registra a embarcação.
    /// CPF sem cliente é erro de domínio, não falha genérica do banco.
    pub async fn create_vessel(&self, payload: &CreateVesselPayload) -> Result<Vessel, AppError> {
        let mut tx = self.pool.begin().await?;

        let id_client = self
            .client_repo
            .find_client_id_by_cpf(&mut *tx, &payload.owner_cpf)
            .await?
            .ok_or_else(|| AppError::ClientNotFoundByCpf(payload.owner_cpf.clone()))?;

        let vessel = self
            .vessel_repo
            .insert_vessel(
                &mut *tx,
                &payload.name,
                payload.vessel_type,
                payload.capacity,
                payload.size,
                id_client,
            )
            .await?;

        tx.commit().await?;

        tracing::info!("🚤 Embarcação {} registrada para o cliente {}", vessel.name, id_client);
        Ok(vessel)
    }

    pub async fn update_vessel(&self, id: i32, payload: &UpdateVesselPayload) -> Result<u64, AppError> {
        self.vessel_repo
            .update_vessel(
                &self.pool,
                id,
                &payload.name,
                payload.vessel_type,
                payload.capacity,
                payload.size,
            )
            .await
    }

    pub async fn delete_vessel(&self, id: i32) -> Result<u64, AppError> {
        self.vessel_repo.delete_vessel(&self.pool, id).await
    }
}
