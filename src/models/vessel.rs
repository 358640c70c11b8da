// src/models/vessel.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Mapeia o CREATE TYPE vessel_type do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, ToSchema)]
#[sqlx(type_name = "vessel_type")]
pub enum VesselType {
    Lancha,
    Veleiro,
    Iate,
    #[sqlx(rename = "Jet Ski")]
    #[serde(rename = "Jet Ski")]
    JetSki,
    #[sqlx(rename = "Barco de Pesca")]
    #[serde(rename = "Barco de Pesca")]
    BarcoDePesca,
}

// Linha da listagem, com o dono resolvido por LEFT JOIN
#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct VesselRow {
    pub id: i32,

    #[serde(rename = "Name")]
    #[schema(example = "Maré Alta")]
    pub name: String,

    #[serde(rename = "Type")]
    pub vessel_type: VesselType,

    #[schema(example = 8)]
    pub capacity: i32,

    #[serde(rename = "Size")]
    #[schema(value_type = f64, example = 7.5)]
    pub size: Decimal,

    #[serde(rename = "cpf_proprietario")]
    pub owner_cpf: Option<String>,

    #[serde(rename = "proprietario")]
    pub owner_name: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Vessel {
    pub id: i32,
    pub name: String,
    pub vessel_type: VesselType,
    pub capacity: i32,
    pub size: Decimal,
    pub id_client: Option<i32>,
}

// O formulário envia os nomes em português; os nomes em inglês também são aceitos.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVesselPayload {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,

    #[serde(rename = "tipo", alias = "type")]
    pub vessel_type: VesselType,

    #[serde(rename = "capacidade", alias = "capacity")]
    pub capacity: i32,

    #[serde(rename = "tamanho", alias = "size")]
    #[schema(value_type = f64)]
    pub size: Decimal,

    // O dono é informado pelo CPF, não pelo Id
    #[serde(rename = "cpfCliente", alias = "cpf")]
    #[schema(example = "123.456.789-00")]
    pub owner_cpf: String,
}

// O dono não muda depois da criação
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVesselPayload {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,

    #[serde(rename = "tipo", alias = "type")]
    pub vessel_type: VesselType,

    #[serde(rename = "capacidade", alias = "capacity")]
    pub capacity: i32,

    #[serde(rename = "tamanho", alias = "size")]
    #[schema(value_type = f64)]
    pub size: Decimal,
}
