// src/db/organ_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{common::error::AppError, models::regulatory::Organ};

#[derive(Clone)]
pub struct OrganRepository {
    pool: PgPool,
}

impl OrganRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_organs(&self) -> Result<Vec<Organ>, AppError> {
        let organs = sqlx::query_as::<_, Organ>(
            "SELECT Id AS id, OrganName AS organ_name, Sail AS sail FROM Organ ORDER BY OrganName, Id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(organs)
    }

    pub async fn insert_organ<'e, E>(
        &self,
        executor: E,
        organ_name: &str,
        sail: Option<&str>,
    ) -> Result<Organ, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let organ = sqlx::query_as::<_, Organ>(
            r#"
            INSERT INTO Organ (OrganName, Sail)
            VALUES ($1, $2)
            RETURNING Id AS id, OrganName AS organ_name, Sail AS sail
            "#,
        )
        .bind(organ_name)
        .bind(sail)
        .fetch_one(executor)
        .await?;

        Ok(organ)
    }

    pub async fn update_organ<'e, E>(
        &self,
        executor: E,
        id: i32,
        organ_name: &str,
        sail: Option<&str>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE Organ SET OrganName = $1, Sail = $2 WHERE Id = $3")
            .bind(organ_name)
            .bind(sail)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Falha com violação de chave estrangeira se ainda houver processos do órgão.
    pub async fn delete_organ<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM Organ WHERE Id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
