// src/services/auth.rs

use std::sync::Arc;

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tokio::sync::OnceCell;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, User},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    token_ttl_hours: i64,
    bcrypt_cost: u32,
    // Hash usado quando o e-mail não existe, para o login custar o mesmo
    dummy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        jwt_secret: String,
        token_ttl_hours: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            jwt_secret,
            token_ttl_hours,
            bcrypt_cost,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Confere e-mail e senha. Devolve o usuário (sem a senha) e o token da sessão.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let Some(credentials) = self.user_repo.find_credentials_by_email(email).await? else {
            // Mesmo trabalho de bcrypt que um e-mail existente
            let dummy = self.dummy_hash().await?;
            let _ = verify_password(password, dummy).await;
            return Err(AppError::InvalidCredentials);
        };

        match verify_password(password, &credentials.password_hash).await {
            Ok(true) => {}
            // Hash corrompido no banco também é só uma senha que não confere
            Ok(false) | Err(AppError::BcryptError(_)) => return Err(AppError::InvalidCredentials),
            Err(e) => return Err(e),
        }

        let token = self.create_token(&credentials.user)?;
        tracing::info!("🔑 Login de {} (id {})", credentials.user.email, credentials.user.id_person);

        Ok((credentials.user, token))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    /// Valida o token e troca o papel das claims pelo que está gravado agora.
    /// Usuário removido depois do login perde a sessão.
    pub async fn authorize(&self, token: &str) -> Result<Claims, AppError> {
        let mut claims = self.validate_token(token)?;

        claims.role = self
            .user_repo
            .find_role_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)?;

        Ok(claims)
    }

    pub fn create_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.token_ttl_hours);

        let claims = Claims {
            sub: user.id_person,
            role: user.role,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }

    async fn dummy_hash(&self) -> Result<&str, AppError> {
        let cost = self.bcrypt_cost;
        let hashed = self
            .dummy_hash
            .get_or_try_init(|| hash_password("registro-naval-sem-usuario", cost))
            .await?;

        Ok(hashed)
    }
}

// bcrypt é caro de propósito: roda fora das threads do runtime

pub async fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || hash(&password, cost))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

    Ok(hashed)
}

pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let is_valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

    Ok(is_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::Role;
    use sqlx::postgres::PgPoolOptions;

    fn service_with(secret: &str, ttl_hours: i64) -> AuthService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://registro@localhost/embarcacoes")
            .unwrap();
        AuthService::new(UserRepository::new(pool), secret.to_string(), ttl_hours, 4)
    }

    fn service(secret: &str) -> AuthService {
        service_with(secret, 12)
    }

    fn gerente() -> User {
        User {
            id_person: 42,
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            role: Role::Gerente,
            email: "ana@capitania.gov.br".into(),
        }
    }

    #[tokio::test]
    async fn token_carries_person_id_and_role() {
        let auth = service("segredo");
        let token = auth.create_token(&gerente()).unwrap();

        let claims = auth.validate_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, Role::Gerente);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_rejected() {
        let token = service("outro-segredo").create_token(&gerente()).unwrap();
        let result = service("segredo").validate_token(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let auth = service_with("segredo", -2);
        let token = auth.create_token(&gerente()).unwrap();
        assert!(matches!(auth.validate_token(&token), Err(AppError::InvalidToken)));
    }

    #[tokio::test]
    async fn bad_signature_is_rejected_before_touching_the_store() {
        let token = service("outro-segredo").create_token(&gerente()).unwrap();
        let result = service("segredo").authorize(&token).await;
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[tokio::test]
    async fn password_is_never_stored_as_is() {
        let hashed = hash_password("segredo123", 4).await.unwrap();
        assert_ne!(hashed, "segredo123");
        assert!(verify_password("segredo123", &hashed).await.unwrap());
        assert!(!verify_password("segredo124", &hashed).await.unwrap());
    }

    #[tokio::test]
    async fn dummy_hash_uses_the_configured_cost_and_is_reused() {
        let auth = service("segredo");
        let first = auth.dummy_hash().await.unwrap().to_string();
        assert!(first.starts_with("$2b$04$"));
        assert_eq!(auth.dummy_hash().await.unwrap(), first);
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_a_bcrypt_error() {
        let result = verify_password("qualquer", "texto-puro").await;
        assert!(matches!(result, Err(AppError::BcryptError(_))));
    }
}
