// src/db/document_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::document::{Document, DocumentRow},
};

#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_documents(&self) -> Result<Vec<DocumentRow>, AppError> {
        let documents = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT
                d.Id AS id,
                d."Name" AS name,
                d."Path" AS path,
                c.CPF AS client_cpf,
                o.OrganName AS organ_name
            FROM "Document" d
            LEFT JOIN Client c ON d.Id_Client = c.Id_Person
            LEFT JOIN Organ o ON d.Id_Organ = o.Id
            ORDER BY d."Name", d.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(documents)
    }

    pub async fn insert_document<'e, E>(
        &self,
        executor: E,
        name: &str,
        path: &str,
        id_client: i32,
        id_organ: Option<i32>,
    ) -> Result<Document, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO "Document" ("Name", "Path", Id_Client, Id_Organ)
            VALUES ($1, $2, $3, $4)
            RETURNING
                Id AS id, "Name" AS name, "Path" AS path,
                Id_Client AS id_client, Id_Organ AS id_organ
            "#,
        )
        .bind(name)
        .bind(path)
        .bind(id_client)
        .bind(id_organ)
        .fetch_one(executor)
        .await?;

        Ok(document)
    }

    pub async fn update_document<'e, E>(
        &self,
        executor: E,
        id: i32,
        name: &str,
        path: &str,
        id_client: i32,
        id_organ: Option<i32>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE "Document"
            SET "Name" = $1, "Path" = $2, Id_Client = $3, Id_Organ = $4
            WHERE Id = $5
            "#,
        )
        .bind(name)
        .bind(path)
        .bind(id_client)
        .bind(id_organ)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_document<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(r#"DELETE FROM "Document" WHERE Id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
