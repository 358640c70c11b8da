// src/models/regulatory.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// ---
// 1. Organ (o órgão regulador)
// ---
#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct Organ {
    pub id: i32,

    #[serde(rename = "organname")]
    #[schema(example = "Capitania dos Portos")]
    pub organ_name: String,

    #[schema(example = "CAP")]
    pub sail: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganPayload {
    #[schema(example = "Capitania dos Portos")]
    pub organ_name: String,
    #[serde(default)]
    pub sail: Option<String>,
}

impl OrganPayload {
    pub fn sail(&self) -> Option<&str> {
        self.sail.as_deref().filter(|s| !s.is_empty())
    }
}

// ---
// 2. Process (o processo administrativo)
// ---

// Mapeia o CREATE TYPE process_status do banco
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "process_status")]
pub enum ProcessStatus {
    Ativo,
    #[default]
    Pendente,
    #[sqlx(rename = "Concluído")]
    #[serde(rename = "Concluído")]
    Concluido,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct ProcessRow {
    pub id: i32,
    #[serde(rename = "processname")]
    pub process_name: String,
    #[serde(rename = "processnumber")]
    #[schema(example = "001/2024")]
    pub process_number: String,
    pub status: ProcessStatus,
    #[serde(rename = "organname")]
    pub organ_name: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Process {
    pub id: i32,
    pub process_name: String,
    pub process_number: String,
    pub status: ProcessStatus,
    pub id_organ: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPayload {
    #[schema(example = "Licença de navegação")]
    pub process_name: String,
    #[schema(example = "001/2024")]
    pub process_number: String,
    // Sem status, o processo nasce Pendente
    #[serde(default)]
    pub status: ProcessStatus,
    pub id_organ: i32,
}

// ---
// 3. Inspection (chave composta: processo + código)
// ---

/// Identidade de uma inspeção. O código só é único dentro do processo,
/// então busca, alteração e remoção usam sempre o par.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InspectionKey {
    #[schema(example = 1)]
    pub id_process: i32,
    #[schema(example = "INS1")]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct InspectionRow {
    pub id_process: i32,
    pub code: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[schema(value_type = String, format = Date, example = "2024-05-20")]
    pub date: NaiveDate,
    #[serde(rename = "processname")]
    pub process_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Inspection {
    pub id_process: i32,
    pub code: String,
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInspectionPayload {
    #[serde(flatten)]
    pub key: InspectionKey,
    #[schema(example = "Vistoria anual")]
    pub name: String,
    #[schema(value_type = String, format = Date, example = "2024-05-20")]
    pub date: NaiveDate,
}

// O processo nunca é reatribuído: a chave vem da rota
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateInspectionPayload {
    pub name: String,
    #[schema(value_type = String, format = Date, example = "2024-05-20")]
    pub date: NaiveDate,
}
