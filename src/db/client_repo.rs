// src/db/client_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::client::{Client, ClientRow},
};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clientes com o nome da Person, em ordem de nome
    pub async fn list_clients(&self) -> Result<Vec<ClientRow>, AppError> {
        let clients = sqlx::query_as::<_, ClientRow>(
            r#"
            SELECT
                c.Id_Person AS id_person,
                pe.FirstName AS first_name,
                pe.LastName AS last_name,
                c.CPF AS cpf,
                c.RG AS rg,
                c.Phone AS phone
            FROM Client c
            INNER JOIN Person pe ON c.Id_Person = pe.Id
            ORDER BY pe.FirstName, c.Id_Person
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    /// Segundo passo do cadastro: a Person já existe com este Id.
    pub async fn insert_client<'e, E>(
        &self,
        executor: E,
        id_person: i32,
        cpf: &str,
        rg: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Client, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO Client (Id_Person, Phone, CPF, RG)
            VALUES ($1, $2, $3, $4)
            RETURNING Id_Person AS id_person, CPF AS cpf, RG AS rg, Phone AS phone
            "#,
        )
        .bind(id_person)
        .bind(phone)
        .bind(cpf)
        .bind(rg)
        .fetch_one(executor)
        .await?;

        Ok(client)
    }

    pub async fn update_client<'e, E>(
        &self,
        executor: E,
        id_person: i32,
        cpf: &str,
        rg: Option<&str>,
        phone: Option<&str>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE Client SET CPF = $1, RG = $2, Phone = $3 WHERE Id_Person = $4")
            .bind(cpf)
            .bind(rg)
            .bind(phone)
            .bind(id_person)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remove a Person de um cliente; o Client, os telefones e os documentos
    /// vão junto pelo ON DELETE CASCADE.
    pub async fn delete_client<'e, E>(&self, executor: E, id_person: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM Person pe
            WHERE pe.Id = $1
              AND EXISTS (SELECT 1 FROM Client c WHERE c.Id_Person = pe.Id)
            "#,
        )
        .bind(id_person)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_client_id_by_cpf<'e, E>(
        &self,
        executor: E,
        cpf: &str,
    ) -> Result<Option<i32>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let id = sqlx::query_scalar::<_, i32>("SELECT Id_Person FROM Client WHERE CPF = $1")
            .bind(cpf)
            .fetch_optional(executor)
            .await?;

        Ok(id)
    }
}
