// src/routes.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::auth::manager_guard};

/// Monta o router completo. Fica fora do `main` para os testes de integração.
pub fn app(app_state: AppState) -> Router {
    // Rotas de cadastro (abertas, como o cliente do navegador espera)
    let client_routes = Router::new()
        .route("/", get(handlers::clients::list_clients).post(handlers::clients::create_client))
        .route(
            "/{id}",
            put(handlers::clients::update_client).delete(handlers::clients::delete_client),
        );

    let vessel_routes = Router::new()
        .route("/", get(handlers::vessels::list_vessels).post(handlers::vessels::create_vessel))
        .route(
            "/{id}",
            put(handlers::vessels::update_vessel).delete(handlers::vessels::delete_vessel),
        );

    let organ_routes = Router::new()
        .route("/", get(handlers::organs::list_organs).post(handlers::organs::create_organ))
        .route(
            "/{id}",
            put(handlers::organs::update_organ).delete(handlers::organs::delete_organ),
        );

    let process_routes = Router::new()
        .route(
            "/",
            get(handlers::processes::list_processes).post(handlers::processes::create_process),
        )
        .route(
            "/{id}",
            put(handlers::processes::update_process).delete(handlers::processes::delete_process),
        );

    let document_routes = Router::new()
        .route(
            "/",
            get(handlers::documents::list_documents).post(handlers::documents::create_document),
        )
        .route(
            "/{id}",
            put(handlers::documents::update_document).delete(handlers::documents::delete_document),
        );

    let inspection_routes = Router::new()
        .route(
            "/",
            get(handlers::inspections::list_inspections)
                .post(handlers::inspections::create_inspection),
        )
        .route(
            "/{idProcess}/{code}",
            put(handlers::inspections::update_inspection)
                .delete(handlers::inspections::delete_inspection),
        );

    let phone_routes = Router::new()
        .route("/", post(handlers::phones::add_phone))
        .route("/{idClient}", get(handlers::phones::list_phones))
        .route("/{idClient}/{phone}", delete(handlers::phones::remove_phone));

    let report_routes = Router::new()
        .route("/clientes-embarcacoes", get(handlers::reports::clients_with_vessel_count))
        .route("/orgaos-processos", get(handlers::reports::organs_with_active_processes))
        .route("/documentos-clientes", get(handlers::reports::documents_of_vessel_owners))
        .route("/processos-inspecoes", get(handlers::reports::processes_with_inspections))
        .route("/embarcacao-maior", get(handlers::reports::largest_vessels))
        .route("/painel-geral", get(handlers::reports::general_panel));

    // Gestão de usuários: só Admin e Gerente, salvo se o guarda estiver desligado
    let mut user_routes = Router::new()
        .route("/", get(handlers::users::list_users).post(handlers::users::create_user))
        .route(
            "/{id}",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        );

    if app_state.settings.enforce_user_roles {
        user_routes = user_routes.route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            manager_guard,
        ));
    } else {
        tracing::warn!("⚠️ ENFORCE_USER_ROLES=false: rotas de usuário sem verificação de papel");
    }

    let api_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/health", get(handlers::health::health_check))
        .nest("/client", client_routes)
        .nest("/user", user_routes)
        .nest("/vessel", vessel_routes)
        .nest("/organ", organ_routes)
        .nest("/process", process_routes)
        .nest("/document", document_routes)
        .nest("/inspection", inspection_routes)
        .nest("/phones", phone_routes)
        .nest("/consultas", report_routes);

    // Combina tudo no router principal
    Router::new()
        .nest("/api", api_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .fallback(handlers::fallback)
        .with_state(app_state)
}
