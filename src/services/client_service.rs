// src/services/client_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{ClientRepository, PersonRepository, PhoneRepository},
    models::client::{Client, ClientPayload, ClientRow, PhoneKey, PhoneRow},
};

#[derive(Clone)]
pub struct ClientService {
    person_repo: PersonRepository,
    client_repo: ClientRepository,
    phone_repo: PhoneRepository,
    pool: PgPool,
}

impl ClientService {
    pub fn new(
        person_repo: PersonRepository,
        client_repo: ClientRepository,
        phone_repo: PhoneRepository,
        pool: PgPool,
    ) -> Self {
        Self { person_repo, client_repo, phone_repo, pool }
    }

    // =========================================================================
    //  CLIENTES (Person + Client)
    // =========================================================================

    pub async fn list_clients(&self) -> Result<Vec<ClientRow>, AppError> {
        self.client_repo.list_clients().await
    }

    /// Os dois INSERTs na mesma transação: CPF repetido não deixa Person órfã.
    pub async fn create_client(&self, payload: &ClientPayload) -> Result<Client, AppError> {
        let mut tx = self.pool.begin().await?;

        let id_person = self
            .person_repo
            .insert_person(&mut *tx, &payload.first_name, &payload.last_name)
            .await?;

        let client = self
            .client_repo
            .insert_client(&mut *tx, id_person, &payload.cpf, payload.rg(), payload.phone())
            .await?;

        tx.commit().await?;

        tracing::info!("🧾 Cliente {} cadastrado (id {})", client.cpf, client.id_person);
        Ok(client)
    }

    pub async fn update_client(&self, id_person: i32, payload: &ClientPayload) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;

        self.person_repo
            .update_person(&mut *tx, id_person, &payload.first_name, &payload.last_name)
            .await?;

        let affected = self
            .client_repo
            .update_client(&mut *tx, id_person, &payload.cpf, payload.rg(), payload.phone())
            .await?;

        if affected == 0 {
            return Ok(0);
        }

        tx.commit().await?;
        Ok(affected)
    }

    pub async fn delete_client(&self, id_person: i32) -> Result<u64, AppError> {
        let affected = self.client_repo.delete_client(&self.pool, id_person).await?;
        if affected > 0 {
            tracing::info!("🗑️ Cliente {} removido", id_person);
        }
        Ok(affected)
    }

    // =========================================================================
    //  TELEFONES
    // =========================================================================

    pub async fn list_phones(&self, id_client: i32) -> Result<Vec<PhoneRow>, AppError> {
        self.phone_repo.list_phones(id_client).await
    }

    pub async fn add_phone(&self, key: &PhoneKey) -> Result<PhoneKey, AppError> {
        self.phone_repo.insert_phone(&self.pool, key).await
    }

    pub async fn remove_phone(&self, key: &PhoneKey) -> Result<u64, AppError> {
        self.phone_repo.delete_phone(&self.pool, key).await
    }
}
