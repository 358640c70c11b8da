// Usuários, login e guarda de papel contra um Postgres real (DATABASE_URL)

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{db_app, db_app_with, find_row, unique_email, TestApp};
use registro_naval::{config::AdminBootstrap, models::auth::Role};

async fn create_user(app: &TestApp, email: &str, role: &str, password: &str) -> i64 {
    let token = app.token_for(Role::Admin).await;
    let response = app
        .server
        .post("/api/user")
        .authorization_bearer(token.clone())
        .json(&json!({ "firstName": "Joana", "lastName": "Reis", "role": role, "email": email, "password": password }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], json!("Usuário criado!"));

    let body: Value = app.server.get("/api/user").authorization_bearer(token).await.json();
    find_row(&body, "email", &json!(email)).unwrap()["id_person"].as_i64().unwrap()
}

async fn login(app: &TestApp, email: &str, password: &str) -> axum_test::TestResponse {
    app.server
        .post("/api/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

#[tokio::test]
async fn login_returns_the_session_user_and_a_usable_token() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("gerente");
    create_user(&app, &email, "Gerente", "senha-forte").await;

    let response = login(&app, &email, "senha-forte").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["email"], json!(email));
    assert_eq!(body["user"]["Role"], json!("Gerente"));
    assert!(body["user"].get("password").is_none());

    // O token do próprio login abre as rotas de usuário
    let token = body["token"].as_str().unwrap().to_string();
    app.server
        .get("/api/user")
        .authorization_bearer(token)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("operador");
    create_user(&app, &email, "Operador", "certa").await;

    for (email, password) in [(email.as_str(), "errada"), ("ninguem@registro.br", "certa")] {
        let response = login(&app, email, password).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "error": "Email ou senha inválidos" })
        );
    }
}

#[tokio::test]
async fn password_is_stored_hashed() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("hash");
    create_user(&app, &email, "Operador", "texto-puro").await;

    let stored: String = sqlx::query_scalar(r#"SELECT "Password" FROM "User" WHERE Email = $1"#)
        .bind(&email)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_ne!(stored, "texto-puro");
    assert!(stored.starts_with("$2"));
}

#[tokio::test]
async fn empty_password_on_update_keeps_the_old_one() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("update");
    let id = create_user(&app, &email, "Operador", "original").await;
    let token = app.token_for(Role::Gerente).await;

    let response = app
        .server
        .put(&format!("/api/user/{}", id))
        .authorization_bearer(token.clone())
        .json(&json!({ "firstName": "Joana", "lastName": "Reis", "role": "Gerente", "email": email, "password": "" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], json!("Usuário atualizado!"));
    login(&app, &email, "original").await.assert_status_ok();

    app.server
        .put(&format!("/api/user/{}", id))
        .authorization_bearer(token)
        .json(&json!({ "firstName": "Joana", "lastName": "Reis", "role": "Gerente", "email": email, "password": "nova" }))
        .await
        .assert_status_ok();
    login(&app, &email, "original").await.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = login(&app, &email, "nova").await.json();
    assert_eq!(body["user"]["Role"], json!("Gerente"));
}

#[tokio::test]
async fn updating_a_missing_user_changes_nothing() {
    let Some(app) = db_app().await else { return };
    let token = app.token_for(Role::Admin).await;

    let response = app
        .server
        .put("/api/user/-1")
        .authorization_bearer(token.clone())
        .json(&json!({ "firstName": "X", "lastName": "Y", "role": "Admin", "email": unique_email("x") }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], json!("Usuário não encontrado"));

    app.server
        .delete("/api/user/-1")
        .authorization_bearer(token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_delete_removes_the_user() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("dup");
    let id = create_user(&app, &email, "Operador", "abc").await;
    let token = app.token_for(Role::Admin).await;

    app.server
        .post("/api/user")
        .authorization_bearer(token.clone())
        .json(&json!({ "firstName": "Outra", "lastName": "Pessoa", "role": "Operador", "email": email, "password": "def" }))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .server
        .delete(&format!("/api/user/{}", id))
        .authorization_bearer(token)
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], json!("Usuário removido!"));
    login(&app, &email, "abc").await.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn operator_token_from_login_is_forbidden() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("op");
    create_user(&app, &email, "Operador", "op123").await;

    let body: Value = login(&app, &email, "op123").await.json();
    let token = body["token"].as_str().unwrap().to_string();

    let response = app.server.get("/api/user").authorization_bearer(token).await;
    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["error"],
        json!("Acesso restrito a administradores e gerentes.")
    );
}

async fn login_token(app: &TestApp, email: &str, password: &str) -> String {
    let body: Value = login(app, email, password).await.json();
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn token_of_a_removed_user_stops_working() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("removido");
    let id = create_user(&app, &email, "Gerente", "gerente123").await;
    let token = login_token(&app, &email, "gerente123").await;

    app.server
        .get("/api/user")
        .authorization_bearer(token.clone())
        .await
        .assert_status_ok();

    let admin = app.token_for(Role::Admin).await;
    app.server
        .delete(&format!("/api/user/{}", id))
        .authorization_bearer(admin)
        .await
        .assert_status_ok();

    let response = app.server.get("/api/user").authorization_bearer(token).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["success"], json!(false));
}

#[tokio::test]
async fn demoted_manager_loses_access_with_the_old_token() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("rebaixado");
    let id = create_user(&app, &email, "Gerente", "gerente123").await;
    let token = login_token(&app, &email, "gerente123").await;

    let admin = app.token_for(Role::Admin).await;
    app.server
        .put(&format!("/api/user/{}", id))
        .authorization_bearer(admin)
        .json(&json!({ "firstName": "Joana", "lastName": "Reis", "role": "Operador", "email": email }))
        .await
        .assert_status_ok();

    // As claims ainda dizem Gerente; vale o papel gravado
    let response = app
        .server
        .post("/api/user")
        .authorization_bearer(token)
        .json(&json!({ "firstName": "X", "lastName": "Y", "role": "Admin", "email": unique_email("x"), "password": "x" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn promoted_operator_gets_in_with_the_old_token() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("promovido");
    let id = create_user(&app, &email, "Operador", "op123").await;
    let token = login_token(&app, &email, "op123").await;

    app.server
        .get("/api/user")
        .authorization_bearer(token.clone())
        .await
        .assert_status(StatusCode::FORBIDDEN);

    sqlx::query(r#"UPDATE "User" SET "Role" = 'Gerente' WHERE Id_Person = $1"#)
        .bind(id as i32)
        .execute(&app.pool)
        .await
        .unwrap();

    app.server
        .get("/api/user")
        .authorization_bearer(token)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn corrupted_stored_password_is_just_a_failed_login() {
    let Some(app) = db_app().await else { return };
    let email = unique_email("legado");
    let id = create_user(&app, &email, "Operador", "qualquer").await;

    sqlx::query(r#"UPDATE "User" SET "Password" = 'senha-sem-hash' WHERE Id_Person = $1"#)
        .bind(id as i32)
        .execute(&app.pool)
        .await
        .unwrap();

    for password in ["senha-sem-hash", "qualquer"] {
        let response = login(&app, &email, password).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "error": "Email ou senha inválidos" })
        );
    }
}

#[tokio::test]
async fn user_routes_work_without_claims_when_the_guard_is_off() {
    let Some(app) = db_app_with(&[("ENFORCE_USER_ROLES", "false")]).await else { return };
    let email = unique_email("semguarda");

    let response = app
        .server
        .post("/api/user")
        .json(&json!({ "firstName": "Livre", "lastName": "Acesso", "role": "Operador", "email": email, "password": "abc" }))
        .await;
    response.assert_status_ok();

    let body: Value = app.server.get("/api/user").await.json();
    let id = find_row(&body, "email", &json!(email)).unwrap()["id_person"].as_i64().unwrap();
    app.server
        .delete(&format!("/api/user/{}", id))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn admin_bootstrap_runs_only_once_per_email() {
    let Some(app) = db_app().await else { return };
    let admin = AdminBootstrap { email: unique_email("admin"), password: "inicial".into() };

    let created = app.state.user_service.bootstrap_admin(&admin).await.unwrap();
    assert_eq!(created.map(|u| u.role), Some(Role::Admin));

    let again = app.state.user_service.bootstrap_admin(&admin).await.unwrap();
    assert!(again.is_none());

    login(&app, &admin.email, "inicial").await.assert_status_ok();
}
