// src/services/user_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    config::AdminBootstrap,
    db::{PersonRepository, UserRepository},
    models::auth::{CreateUserPayload, Role, UpdateUserPayload, User},
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct UserService {
    person_repo: PersonRepository,
    user_repo: UserRepository,
    pool: PgPool,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        person_repo: PersonRepository,
        user_repo: UserRepository,
        pool: PgPool,
        bcrypt_cost: u32,
    ) -> Self {
        Self { person_repo, user_repo, pool, bcrypt_cost }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.list_users().await
    }

    /// Person + "User" numa única transação: se o segundo INSERT falhar
    /// (e-mail repetido, por exemplo) a Person também é desfeita.
    pub async fn create_user(&self, payload: &CreateUserPayload) -> Result<User, AppError> {
        // Hashing fora da transação, pois não toca no banco
        let password_hash = hash_password(&payload.password, self.bcrypt_cost).await?;

        let mut tx = self.pool.begin().await?;

        let id_person = self
            .person_repo
            .insert_person(&mut *tx, &payload.first_name, &payload.last_name)
            .await?;

        let user = self
            .user_repo
            .insert_user(&mut *tx, id_person, payload.role, &payload.email, &password_hash)
            .await?;

        tx.commit().await?;

        tracing::info!("👤 Usuário {} criado (id {}, {:?})", user.email, user.id_person, user.role);
        Ok(user)
    }

    /// Devolve quantas linhas de "User" foram alteradas; zero significa que
    /// o Id não é de um usuário e nada foi gravado.
    pub async fn update_user(&self, id_person: i32, payload: &UpdateUserPayload) -> Result<u64, AppError> {
        let password_hash = match payload.new_password() {
            Some(password) => Some(hash_password(password, self.bcrypt_cost).await?),
            None => None,
        };

        let mut tx = self.pool.begin().await?;

        self.person_repo
            .update_person(&mut *tx, id_person, &payload.first_name, &payload.last_name)
            .await?;

        let affected = self
            .user_repo
            .update_user(&mut *tx, id_person, payload.role, &payload.email, password_hash.as_deref())
            .await?;

        if affected == 0 {
            // O drop do tx faz o rollback da Person
            return Ok(0);
        }

        tx.commit().await?;
        Ok(affected)
    }

    pub async fn delete_user(&self, id_person: i32) -> Result<u64, AppError> {
        let affected = self.user_repo.delete_user(&self.pool, id_person).await?;
        if affected > 0 {
            tracing::info!("🗑️ Usuário {} removido", id_person);
        }
        Ok(affected)
    }

    /// Cria o primeiro administrador se o e-mail ainda não estiver cadastrado.
    pub async fn bootstrap_admin(&self, admin: &AdminBootstrap) -> Result<Option<User>, AppError> {
        if self.user_repo.email_exists(&admin.email).await? {
            return Ok(None);
        }

        let payload = CreateUserPayload {
            first_name: "Administrador".to_string(),
            last_name: "do Sistema".to_string(),
            role: Role::Admin,
            email: admin.email.clone(),
            password: admin.password.clone(),
        };

        self.create_user(&payload).await.map(Some)
    }
}
