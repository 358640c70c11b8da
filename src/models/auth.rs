// src/models/auth.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Mapeia o CREATE TYPE user_role do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "user_role")]
pub enum Role {
    Admin,
    Gerente,
    Operador,
}

impl Role {
    /// Apenas administradores e gerentes gerenciam usuários.
    pub fn can_manage_users(self) -> bool {
        matches!(self, Role::Admin | Role::Gerente)
    }
}

// Um usuário como sai do banco: Person + "User", sem a senha.
// É também o objeto que o navegador guarda como "sessão" após o login.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct User {
    #[schema(example = 1)]
    pub id_person: i32,

    #[serde(rename = "firstname")]
    #[schema(example = "Ana")]
    pub first_name: String,

    #[serde(rename = "lastname")]
    #[schema(example = "Souza")]
    pub last_name: String,

    #[serde(rename = "Role")]
    pub role: Role,

    #[schema(example = "ana@capitania.gov.br")]
    pub email: String,
}

// Usado só no login: nunca é serializado
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

// Dados para criação de um usuário (Person + "User")
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Souza")]
    pub last_name: String,
    pub role: Role,
    #[schema(example = "ana@capitania.gov.br")]
    pub email: String,
    #[schema(example = "segredo123")]
    pub password: String,
}

// Dados para atualização. Senha ausente ou vazia mantém a senha atual.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateUserPayload {
    /// A nova senha, se alguma foi de fato informada.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

// Dados para login
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginPayload {
    #[schema(example = "ana@capitania.gov.br")]
    pub email: String,
    #[schema(example = "segredo123")]
    pub password: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,   // Subject (Id_Person do usuário)
    pub role: Role, // Re-derivado a cada requisição protegida
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued At
}
