// src/db/user_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::auth::{Role, User, UserCredentials},
};

// O repositório de usuários, responsável pelas interações com a tabela "User"
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                u.Id_Person AS id_person,
                pe.FirstName AS first_name,
                pe.LastName AS last_name,
                u."Role" AS role,
                u.Email AS email
            FROM "User" u
            INNER JOIN Person pe ON u.Id_Person = pe.Id
            ORDER BY pe.FirstName, u.Id_Person
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    // Busca as credenciais pelo e-mail. A senha é conferida no serviço,
    // nunca na cláusula WHERE.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT
                u.Id_Person AS id_person,
                pe.FirstName AS first_name,
                pe.LastName AS last_name,
                u."Role" AS role,
                u.Email AS email,
                u."Password" AS password_hash
            FROM "User" u
            INNER JOIN Person pe ON u.Id_Person = pe.Id
            WHERE u.Email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    /// Papel atual gravado para o Id; `None` se o usuário não existe mais.
    pub async fn find_role_by_id(&self, id_person: i32) -> Result<Option<Role>, AppError> {
        let role = sqlx::query_scalar::<_, Role>(r#"SELECT "Role" FROM "User" WHERE Id_Person = $1"#)
            .bind(id_person)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (SELECT 1 FROM "User" WHERE Email = $1)"#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Segundo passo do cadastro: a Person já existe com este Id.
    /// Devolve o usuário já com o nome da Person.
    pub async fn insert_user<'e, E>(
        &self,
        executor: E,
        id_person: i32,
        role: Role,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            WITH inserted AS (
                INSERT INTO "User" (Id_Person, "Role", "Password", Email)
                VALUES ($1, $2, $3, $4)
                RETURNING Id_Person, "Role", Email
            )
            SELECT
                i.Id_Person AS id_person,
                pe.FirstName AS first_name,
                pe.LastName AS last_name,
                i."Role" AS role,
                i.Email AS email
            FROM inserted i
            INNER JOIN Person pe ON pe.Id = i.Id_Person
            "#,
        )
        .bind(id_person)
        .bind(role)
        .bind(password_hash)
        .bind(email)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Com `password_hash` ausente a senha gravada não é tocada.
    pub async fn update_user<'e, E>(
        &self,
        executor: E,
        id_person: i32,
        role: Role,
        email: &str,
        password_hash: Option<&str>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = match password_hash {
            Some(hash) => {
                sqlx::query(
                    r#"UPDATE "User" SET "Role" = $1, Email = $2, "Password" = $3 WHERE Id_Person = $4"#,
                )
                .bind(role)
                .bind(email)
                .bind(hash)
                .bind(id_person)
                .execute(executor)
                .await?
            }
            None => {
                sqlx::query(r#"UPDATE "User" SET "Role" = $1, Email = $2 WHERE Id_Person = $3"#)
                    .bind(role)
                    .bind(email)
                    .bind(id_person)
                    .execute(executor)
                    .await?
            }
        };

        Ok(result.rows_affected())
    }

    // Remove a Person do usuário; o "User" vai junto pelo CASCADE
    pub async fn delete_user<'e, E>(&self, executor: E, id_person: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            DELETE FROM Person pe
            WHERE pe.Id = $1
              AND EXISTS (SELECT 1 FROM "User" u WHERE u.Id_Person = pe.Id)
            "#,
        )
        .bind(id_person)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
