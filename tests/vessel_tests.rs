// Embarcações contra um Postgres real (DATABASE_URL)

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{db_app, find_row, unique_code, unique_cpf};

#[tokio::test]
async fn unknown_owner_cpf_is_a_domain_error_naming_the_cpf() {
    let Some(app) = db_app().await else { return };
    let cpf = unique_cpf();

    let response = app
        .server
        .post("/api/vessel")
        .json(&json!({ "nome": "Fantasma", "tipo": "Lancha", "capacidade": 4, "tamanho": 6.5, "cpfCliente": cpf }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "error": format!("Cliente com CPF {} não encontrado.", cpf) })
    );
}

#[tokio::test]
async fn vessel_is_listed_with_its_owner_and_keeps_it_on_update() {
    let Some(app) = db_app().await else { return };
    let cpf = unique_cpf();
    let name = unique_code("Maré Alta ");

    app.server
        .post("/api/client")
        .json(&json!({ "firstName": "Paulo", "lastName": "Nunes", "cpf": cpf }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/api/vessel")
        .json(&json!({ "nome": name, "tipo": "Jet Ski", "capacidade": 2, "tamanho": 3.2, "cpfCliente": cpf }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], json!("Embarcação registrada!"));

    let body: Value = app.server.get("/api/vessel").await.json();
    let row = find_row(&body, "Name", &json!(name)).expect("embarcação na listagem");
    assert_eq!(row["Type"], json!("Jet Ski"));
    assert_eq!(row["cpf_proprietario"], json!(cpf));
    assert_eq!(row["proprietario"], json!("Paulo Nunes"));
    let id = row["id"].as_i64().unwrap();

    // Nomes em inglês também são aceitos
    let response = app
        .server
        .put(&format!("/api/vessel/{}", id))
        .json(&json!({ "name": name, "type": "Veleiro", "capacity": 6, "size": 9.75 }))
        .await;
    response.assert_status_ok();

    let body: Value = app.server.get("/api/vessel").await.json();
    let row = find_row(&body, "id", &json!(id)).unwrap();
    assert_eq!(row["Type"], json!("Veleiro"));
    assert_eq!(row["capacity"], json!(6));
    assert_eq!(row["cpf_proprietario"], json!(cpf));

    app.server.delete(&format!("/api/vessel/{}", id)).await.assert_status_ok();
    app.server
        .delete(&format!("/api/vessel/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_positive_capacity_is_rejected_by_the_store() {
    let Some(app) = db_app().await else { return };
    let cpf = unique_cpf();
    app.server
        .post("/api/client")
        .json(&json!({ "firstName": "Lia", "lastName": "Prado", "cpf": cpf }))
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/api/vessel")
        .json(&json!({ "nome": "Zero", "tipo": "Iate", "capacidade": 0, "tamanho": 12.0, "cpfCliente": cpf }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["success"], json!(false));
}
