// src/db/phone_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::client::{PhoneKey, PhoneRow},
};

#[derive(Clone)]
pub struct PhoneRepository {
    pool: PgPool,
}

impl PhoneRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_phones(&self, id_client: i32) -> Result<Vec<PhoneRow>, AppError> {
        let phones = sqlx::query_as::<_, PhoneRow>(
            "SELECT Phone AS phone FROM Phones WHERE Id_Client = $1 ORDER BY Phone",
        )
        .bind(id_client)
        .fetch_all(&self.pool)
        .await?;

        Ok(phones)
    }

    pub async fn insert_phone<'e, E>(&self, executor: E, key: &PhoneKey) -> Result<PhoneKey, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let phone = sqlx::query_as::<_, PhoneKey>(
            r#"
            INSERT INTO Phones (Id_Client, Phone)
            VALUES ($1, $2)
            RETURNING Id_Client AS id_client, Phone AS phone
            "#,
        )
        .bind(key.id_client)
        .bind(&key.phone)
        .fetch_one(executor)
        .await?;

        Ok(phone)
    }

    // Sem chave substituta: o par inteiro identifica a linha
    pub async fn delete_phone<'e, E>(&self, executor: E, key: &PhoneKey) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM Phones WHERE Id_Client = $1 AND Phone = $2")
            .bind(key.id_client)
            .bind(&key.phone)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
