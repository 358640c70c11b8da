// src/models/reports.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::{regulatory::ProcessStatus, vessel::VesselType};

// As seis consultas fixas. Os nomes no JSON são os das colunas que o
// Postgres devolve, que é o que a tela de consultas lê.

// 1. Clientes e quantas embarcações cada um possui
#[derive(Debug, Serialize, FromRow, ToSchema, PartialEq)]
pub struct ClientVesselCount {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub cpf: String,
    #[serde(rename = "totalembarcacoes")]
    pub total_vessels: i64,
}

// 2. Órgãos com pelo menos um processo Ativo
#[derive(Debug, Serialize, FromRow, ToSchema, PartialEq)]
pub struct OrganActiveProcesses {
    #[serde(rename = "organname")]
    pub organ_name: String,
    #[serde(rename = "processosativos")]
    pub active_processes: i64,
}

// 3. Documentos de clientes que possuem embarcação
#[derive(Debug, Serialize, FromRow, ToSchema, PartialEq)]
pub struct OwnerDocument {
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
}

// 4. Processos que já tiveram inspeção
#[derive(Debug, Serialize, FromRow, ToSchema, PartialEq)]
pub struct InspectedProcess {
    #[serde(rename = "processname")]
    pub process_name: String,
    #[serde(rename = "processnumber")]
    pub process_number: String,
    pub status: ProcessStatus,
}

// 5. Embarcação(ões) de maior capacidade
#[derive(Debug, Serialize, FromRow, ToSchema, PartialEq)]
pub struct LargestVessel {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub vessel_type: VesselType,
    pub capacity: i32,
    #[serde(rename = "Size")]
    #[schema(value_type = f64)]
    pub size: Decimal,
}

// 6. Painel geral: uma linha por embarcação de cada cliente
// (ou uma linha só, sem embarcação, para quem não tem nenhuma)
#[derive(Debug, Serialize, FromRow, ToSchema, PartialEq)]
pub struct PanelEntry {
    #[serde(rename = "cliente")]
    pub client: String,
    pub cpf: String,
    pub email: Option<String>,
    #[serde(rename = "embarcacao")]
    pub vessel: Option<String>,
    #[serde(rename = "tipo")]
    pub vessel_type: Option<VesselType>,
    #[serde(rename = "capacidade")]
    pub capacity: Option<i32>,
    #[serde(rename = "qtddocumentos")]
    pub document_count: i64,
    #[serde(rename = "qtdtelefones")]
    pub phone_count: i64,
}
