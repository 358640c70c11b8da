// src/db/inspection_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::regulatory::{Inspection, InspectionKey, InspectionRow},
};

#[derive(Clone)]
pub struct InspectionRepository {
    pool: PgPool,
}

impl InspectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Mais recentes primeiro
    pub async fn list_inspections(&self) -> Result<Vec<InspectionRow>, AppError> {
        let inspections = sqlx::query_as::<_, InspectionRow>(
            r#"
            SELECT
                i.Id_Process AS id_process,
                i.Code AS code,
                i."Name" AS name,
                i.Date AS date,
                p.ProcessName AS process_name
            FROM Inspection i
            INNER JOIN Process p ON i.Id_Process = p.Id
            ORDER BY i.Date DESC, i.Id_Process, i.Code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(inspections)
    }

    pub async fn insert_inspection<'e, E>(
        &self,
        executor: E,
        key: &InspectionKey,
        name: &str,
        date: NaiveDate,
    ) -> Result<Inspection, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let inspection = sqlx::query_as::<_, Inspection>(
            r#"
            INSERT INTO Inspection (Id_Process, Code, "Name", Date)
            VALUES ($1, $2, $3, $4)
            RETURNING Id_Process AS id_process, Code AS code, "Name" AS name, Date AS date
            "#,
        )
        .bind(key.id_process)
        .bind(&key.code)
        .bind(name)
        .bind(date)
        .fetch_one(executor)
        .await?;

        Ok(inspection)
    }

    pub async fn update_inspection<'e, E>(
        &self,
        executor: E,
        key: &InspectionKey,
        name: &str,
        date: NaiveDate,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"UPDATE Inspection SET "Name" = $1, Date = $2 WHERE Id_Process = $3 AND Code = $4"#,
        )
        .bind(name)
        .bind(date)
        .bind(key.id_process)
        .bind(&key.code)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_inspection<'e, E>(
        &self,
        executor: E,
        key: &InspectionKey,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM Inspection WHERE Id_Process = $1 AND Code = $2")
            .bind(key.id_process)
            .bind(&key.code)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
