// src/db/process_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::regulatory::{Process, ProcessRow, ProcessStatus},
};

#[derive(Clone)]
pub struct ProcessRepository {
    pool: PgPool,
}

impl ProcessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_processes(&self) -> Result<Vec<ProcessRow>, AppError> {
        let processes = sqlx::query_as::<_, ProcessRow>(
            r#"
            SELECT
                p.Id AS id,
                p.ProcessName AS process_name,
                p.ProcessNumber AS process_number,
                p.Status AS status,
                o.OrganName AS organ_name
            FROM Process p
            LEFT JOIN Organ o ON p.Id_Organ = o.Id
            ORDER BY p.ProcessNumber, p.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(processes)
    }

    pub async fn insert_process<'e, E>(
        &self,
        executor: E,
        process_name: &str,
        process_number: &str,
        status: ProcessStatus,
        id_organ: i32,
    ) -> Result<Process, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let process = sqlx::query_as::<_, Process>(
            r#"
            INSERT INTO Process (ProcessName, ProcessNumber, Status, Id_Organ)
            VALUES ($1, $2, $3, $4)
            RETURNING
                Id AS id, ProcessName AS process_name, ProcessNumber AS process_number,
                Status AS status, Id_Organ AS id_organ
            "#,
        )
        .bind(process_name)
        .bind(process_number)
        .bind(status)
        .bind(id_organ)
        .fetch_one(executor)
        .await?;

        Ok(process)
    }

    pub async fn update_process<'e, E>(
        &self,
        executor: E,
        id: i32,
        process_name: &str,
        process_number: &str,
        status: ProcessStatus,
        id_organ: i32,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE Process
            SET ProcessName = $1, ProcessNumber = $2, Status = $3, Id_Organ = $4
            WHERE Id = $5
            "#,
        )
        .bind(process_name)
        .bind(process_number)
        .bind(status)
        .bind(id_organ)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    // As inspeções do processo vão junto pelo CASCADE
    pub async fn delete_process<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM Process WHERE Id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
