// src/models/envelope.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::auth::User;

// ---
// O envelope JSON uniforme: { success, data?, message?, error? }
// ---

/// Resposta de listagem: `{ success: true, data: [...] }`
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { success: true, data }
    }
}

/// Resposta de escrita bem-sucedida: `{ success: true, message }`
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    #[schema(example = "Cliente cadastrado com sucesso!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }
}

/// Corpo de toda falha: `{ success: false, error }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    #[schema(example = "Cliente não encontrado")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}

/// Resposta do login. O `user` é o que o navegador guarda como "sessão";
/// o `token` é o que o servidor exige nas rotas protegidas.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
    pub token: String,
}

impl LoginResponse {
    pub fn new(user: User, token: String) -> Self {
        Self { success: true, user, token }
    }
}

/// Resultado do teste de conexão com o banco
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub connected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_response_has_no_data_or_error_keys() {
        let body = serde_json::to_value(MessageResponse::new("Órgão cadastrado!")).unwrap();
        assert_eq!(body, json!({ "success": true, "message": "Órgão cadastrado!" }));
    }

    #[test]
    fn error_response_is_never_successful() {
        let body = serde_json::to_value(ErrorResponse::new("Telefone não encontrado")).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Telefone não encontrado"));
        assert!(body.get("data").is_none());
    }

    #[test]
    fn empty_listing_still_carries_an_array() {
        let body = serde_json::to_value(DataResponse::new(Vec::<u8>::new())).unwrap();
        assert_eq!(body, json!({ "success": true, "data": [] }));
    }
}
