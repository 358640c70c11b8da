// src/models/client.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// --- CLIENTE (Person + Client) ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct ClientRow {
    #[schema(example = 3)]
    pub id_person: i32,

    #[serde(rename = "firstname")]
    #[schema(example = "João")]
    pub first_name: String,

    #[serde(rename = "lastname")]
    #[schema(example = "Pereira")]
    pub last_name: String,

    #[schema(example = "123.456.789-00")]
    pub cpf: String,

    pub rg: Option<String>,
    pub phone: Option<String>,
}

// O que o INSERT/UPDATE em Client devolve
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id_person: i32,
    pub cpf: String,
    pub rg: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[schema(example = "João")]
    pub first_name: String,
    #[schema(example = "Pereira")]
    pub last_name: String,
    #[schema(example = "123.456.789-00")]
    pub cpf: String,
    #[serde(default)]
    pub rg: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ClientPayload {
    // Campos opcionais vazios viram NULL no banco
    pub fn rg(&self) -> Option<&str> {
        self.rg.as_deref().filter(|v| !v.is_empty())
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|v| !v.is_empty())
    }
}

// --- TELEFONES (lista 1:N, sem chave substituta) ---

/// Um telefone é identificado pelo par (cliente, número).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneKey {
    #[schema(example = 3)]
    pub id_client: i32,
    #[schema(example = "(21) 99999-0000")]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema, PartialEq)]
pub struct PhoneRow {
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_optional_fields_become_null() {
        let payload: ClientPayload = serde_json::from_value(json!({
            "firstName": "João", "lastName": "Pereira",
            "cpf": "123.456.789-00", "rg": "", "phone": null
        }))
        .unwrap();
        assert_eq!(payload.rg(), None);
        assert_eq!(payload.phone(), None);
    }

    #[test]
    fn client_row_uses_lowercase_column_names() {
        let row = ClientRow {
            id_person: 1,
            first_name: "João".into(),
            last_name: "Pereira".into(),
            cpf: "123.456.789-00".into(),
            rg: None,
            phone: Some("2199".into()),
        };
        let body = serde_json::to_value(row).unwrap();
        assert_eq!(
            body,
            json!({
                "id_person": 1, "firstname": "João", "lastname": "Pereira",
                "cpf": "123.456.789-00", "rg": null, "phone": "2199"
            })
        );
    }

    #[test]
    fn phone_key_reads_camel_case_body() {
        let key: PhoneKey =
            serde_json::from_value(json!({ "idClient": 4, "phone": "2100" })).unwrap();
        assert_eq!(key, PhoneKey { id_client: 4, phone: "2100".into() });
    }
}
