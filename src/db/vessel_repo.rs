// src/db/vessel_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::vessel::{Vessel, VesselRow, VesselType},
};

#[derive(Clone)]
pub struct VesselRepository {
    pool: PgPool,
}

impl VesselRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // LEFT JOIN: uma embarcação cujo dono foi removido continua listada
    pub async fn list_vessels(&self) -> Result<Vec<VesselRow>, AppError> {
        let vessels = sqlx::query_as::<_, VesselRow>(
            r#"
            SELECT
                v.Id AS id,
                v."Name" AS name,
                v."Type" AS vessel_type,
                v.Capacity AS capacity,
                v."Size" AS size,
                c.CPF AS owner_cpf,
                pe.FirstName || ' ' || pe.LastName AS owner_name
            FROM Vessel v
            LEFT JOIN Client c ON v.Id_Client = c.Id_Person
            LEFT JOIN Person pe ON c.Id_Person = pe.Id
            ORDER BY v."Name", v.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vessels)
    }

    pub async fn insert_vessel<'e, E>(
        &self,
        executor: E,
        name: &str,
        vessel_type: VesselType,
        capacity: i32,
        size: Decimal,
        id_client: i32,
    ) -> Result<Vessel, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let vessel = sqlx::query_as::<_, Vessel>(
            r#"
            INSERT INTO Vessel ("Name", "Type", Capacity, "Size", Id_Client)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING
                Id AS id, "Name" AS name, "Type" AS vessel_type,
                Capacity AS capacity, "Size" AS size, Id_Client AS id_client
            "#,
        )
        .bind(name)
        .bind(vessel_type)
        .bind(capacity)
        .bind(size)
        .bind(id_client)
        .fetch_one(executor)
        .await?;

        Ok(vessel)
    }

    pub async fn update_vessel<'e, E>(
        &self,
        executor: E,
        id: i32,
        name: &str,
        vessel_type: VesselType,
        capacity: i32,
        size: Decimal,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"UPDATE Vessel SET "Name" = $1, "Type" = $2, Capacity = $3, "Size" = $4 WHERE Id = $5"#,
        )
        .bind(name)
        .bind(vessel_type)
        .bind(capacity)
        .bind(size)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_vessel<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM Vessel WHERE Id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
