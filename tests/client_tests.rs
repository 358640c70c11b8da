// Clientes e telefones contra um Postgres real (DATABASE_URL)

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{client_id_by_cpf, db_app, find_row, unique_code, unique_cpf};

#[tokio::test]
async fn created_client_shows_up_in_the_listing() {
    let Some(app) = db_app().await else { return };
    let cpf = unique_cpf();

    let response = app
        .server
        .post("/api/client")
        .json(&json!({ "firstName": "Marina", "lastName": "Alves", "cpf": cpf, "rg": "", "phone": "(21) 3333-0000" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": true, "message": "Cliente cadastrado com sucesso!" })
    );

    let body: Value = app.server.get("/api/client").await.json();
    let row = find_row(&body, "cpf", &json!(cpf)).expect("cliente na listagem");
    assert_eq!(row["firstname"], json!("Marina"));
    assert_eq!(row["lastname"], json!("Alves"));
    // RG vazio é gravado como NULL
    assert_eq!(row["rg"], Value::Null);
    assert_eq!(row["phone"], json!("(21) 3333-0000"));
}

#[tokio::test]
async fn duplicate_cpf_fails_without_leaving_an_orphan_person() {
    let Some(app) = db_app().await else { return };
    let cpf = unique_cpf();
    let marker = unique_code("Orfao");

    let payload = json!({ "firstName": marker, "lastName": "Teste", "cpf": cpf });
    app.server.post("/api/client").json(&payload).await.assert_status_ok();

    let response = app.server.post("/api/client").json(&payload).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["success"], json!(false));

    let people: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Person WHERE FirstName = $1")
        .bind(&marker)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(people, 1);
}

#[tokio::test]
async fn deleting_the_person_removes_the_client() {
    let Some(app) = db_app().await else { return };
    let cpf = "123.456.789-00";

    // Sobras de execuções anteriores
    sqlx::query("DELETE FROM Person WHERE Id IN (SELECT Id_Person FROM Client WHERE CPF = $1)")
        .bind(cpf)
        .execute(&app.pool)
        .await
        .unwrap();

    app.server
        .post("/api/client")
        .json(&json!({ "firstName": "Carlos", "lastName": "Lima", "cpf": cpf }))
        .await
        .assert_status_ok();
    let id = client_id_by_cpf(&app.pool, cpf).await;

    let response = app.server.delete(&format!("/api/client/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], json!("Cliente removido!"));

    let body: Value = app.server.get("/api/client").await.json();
    assert!(find_row(&body, "cpf", &json!(cpf)).is_none());

    let person: Option<i32> = sqlx::query_scalar("SELECT Id FROM Person WHERE Id = $1")
        .bind(id)
        .fetch_optional(&app.pool)
        .await
        .unwrap();
    assert!(person.is_none());
}

#[tokio::test]
async fn update_changes_person_and_client_together() {
    let Some(app) = db_app().await else { return };
    let cpf = unique_cpf();
    app.server
        .post("/api/client")
        .json(&json!({ "firstName": "Rui", "lastName": "Costa", "cpf": cpf }))
        .await
        .assert_status_ok();
    let id = client_id_by_cpf(&app.pool, &cpf).await;

    let new_cpf = unique_cpf();
    let response = app
        .server
        .put(&format!("/api/client/{}", id))
        .json(&json!({ "firstName": "Rui", "lastName": "Barbosa", "cpf": new_cpf, "rg": "12.345.678-9" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], json!("Cliente atualizado!"));

    let body: Value = app.server.get("/api/client").await.json();
    let row = find_row(&body, "id_person", &json!(id)).unwrap();
    assert_eq!(row["lastname"], json!("Barbosa"));
    assert_eq!(row["cpf"], json!(new_cpf));
    assert_eq!(row["rg"], json!("12.345.678-9"));
}

#[tokio::test]
async fn missing_client_is_a_404_on_update_and_delete() {
    let Some(app) = db_app().await else { return };

    let response = app
        .server
        .put("/api/client/-1")
        .json(&json!({ "firstName": "Ninguém", "lastName": "Aqui", "cpf": unique_cpf() }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "success": false, "error": "Cliente não encontrado" })
    );

    let response = app.server.delete("/api/client/-1").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn phones_are_keyed_by_client_and_number() {
    let Some(app) = db_app().await else { return };
    let cpf = unique_cpf();
    app.server
        .post("/api/client")
        .json(&json!({ "firstName": "Bia", "lastName": "Rocha", "cpf": cpf }))
        .await
        .assert_status_ok();
    let id = client_id_by_cpf(&app.pool, &cpf).await;

    for phone in ["(21) 99999-0001", "(21) 99999-0002"] {
        let response = app
            .server
            .post("/api/phones")
            .json(&json!({ "idClient": id, "phone": phone }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["message"], json!("Telefone adicionado!"));
    }

    // O mesmo par duas vezes viola a chave primária
    app.server
        .post("/api/phones")
        .json(&json!({ "idClient": id, "phone": "(21) 99999-0001" }))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = app.server.get(&format!("/api/phones/{}", id)).await.json();
    assert_eq!(
        body["data"],
        json!([{ "phone": "(21) 99999-0001" }, { "phone": "(21) 99999-0002" }])
    );

    let path = format!("/api/phones/{}/(21)%2099999-0001", id);
    app.server.delete(&path).await.assert_status_ok();
    app.server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);

    // Remover o cliente leva os telefones restantes
    app.server.delete(&format!("/api/client/{}", id)).await.assert_status_ok();
    let body: Value = app.server.get(&format!("/api/phones/{}", id)).await.json();
    assert_eq!(body["data"], json!([]));
}
