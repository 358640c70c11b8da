// src/models/document.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct DocumentRow {
    pub id: i32,

    #[serde(rename = "Name")]
    #[schema(example = "TIE")]
    pub name: String,

    // Só a referência ao arquivo; o conteúdo não passa por aqui
    #[serde(rename = "Path")]
    #[schema(example = "/docs/tie-0001.pdf")]
    pub path: String,

    #[serde(rename = "cpf_cliente")]
    pub client_cpf: Option<String>,

    #[serde(rename = "organname")]
    pub organ_name: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: i32,
    pub name: String,
    pub path: String,
    pub id_client: i32,
    pub id_organ: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub name: String,
    pub path: String,
    pub id_client: i32,
    // O órgão é opcional
    #[serde(default)]
    pub id_organ: Option<i32>,
}
