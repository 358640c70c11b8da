// src/db/person_repo.rs

use sqlx::{Executor, Postgres};

use crate::common::error::AppError;

// A identidade raiz. Client e "User" compartilham o Id gerado aqui,
// por isso só é escrita dentro das transações dos serviços.
#[derive(Clone, Default)]
pub struct PersonRepository;

impl PersonRepository {
    pub fn new() -> Self {
        Self
    }

    /// Insere a Person e devolve o Id gerado.
    pub async fn insert_person<'e, E>(
        &self,
        executor: E,
        first_name: &str,
        last_name: &str,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO Person (FirstName, LastName) VALUES ($1, $2) RETURNING Id",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }

    pub async fn update_person<'e, E>(
        &self,
        executor: E,
        id: i32,
        first_name: &str,
        last_name: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE Person SET FirstName = $1, LastName = $2 WHERE Id = $3")
            .bind(first_name)
            .bind(last_name)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
