use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::envelope::ErrorResponse;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O texto de cada variante é exatamente o que vai no campo `error` do envelope.
#[derive(Debug, Error)]
pub enum AppError {
    // O único erro de domínio sinalizado explicitamente pela camada de dados
    #[error("Cliente com CPF {0} não encontrado.")]
    ClientNotFoundByCpf(String),

    // Linha inexistente (DELETE/PUT que não afetou nada)
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Email ou senha inválidos")]
    InvalidCredentials,

    #[error("Token de autenticação inválido ou ausente.")]
    InvalidToken,

    #[error("Acesso restrito a administradores e gerentes.")]
    Forbidden,

    // Corpo JSON ou parâmetro de rota que não pôde ser convertido
    #[error("{0}")]
    InvalidPayload(String),

    // Violações de constraint, conexão perdida etc. O texto do driver vai como está.
    #[error("{0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("{0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ClientNotFoundByCpf(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            // Sem classe 400: entrada malformada é tratada como falha do servidor
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unknown_cpf_is_a_not_found_carrying_the_cpf() {
        let (status, body) = body_of(AppError::ClientNotFoundByCpf("111.222.333-44".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], Value::Bool(false));
        assert!(body["error"].as_str().unwrap().contains("111.222.333-44"));
    }

    #[tokio::test]
    async fn failed_login_uses_the_fixed_portuguese_message() {
        let (status, body) = body_of(AppError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Email ou senha inválidos");
    }

    #[tokio::test]
    async fn store_faults_surface_verbatim_as_500() {
        let (status, body) = body_of(AppError::DatabaseError(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn payload_problems_have_no_distinct_client_error_class() {
        let err = AppError::InvalidPayload("expected an integer".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::NotFound("Processo não encontrado").status(), StatusCode::NOT_FOUND);
    }
}
