// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Clientes ---
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Usuários ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,

        // --- Embarcações ---
        handlers::vessels::list_vessels,
        handlers::vessels::create_vessel,
        handlers::vessels::update_vessel,
        handlers::vessels::delete_vessel,

        // --- Órgãos / Processos / Inspeções ---
        handlers::organs::list_organs,
        handlers::organs::create_organ,
        handlers::organs::update_organ,
        handlers::organs::delete_organ,
        handlers::processes::list_processes,
        handlers::processes::create_process,
        handlers::processes::update_process,
        handlers::processes::delete_process,
        handlers::inspections::list_inspections,
        handlers::inspections::create_inspection,
        handlers::inspections::update_inspection,
        handlers::inspections::delete_inspection,

        // --- Documentos ---
        handlers::documents::list_documents,
        handlers::documents::create_document,
        handlers::documents::update_document,
        handlers::documents::delete_document,

        // --- Telefones ---
        handlers::phones::list_phones,
        handlers::phones::add_phone,
        handlers::phones::remove_phone,

        // --- Consultas ---
        handlers::reports::clients_with_vessel_count,
        handlers::reports::organs_with_active_processes,
        handlers::reports::documents_of_vessel_owners,
        handlers::reports::processes_with_inspections,
        handlers::reports::largest_vessels,
        handlers::reports::general_panel,

        handlers::health::health_check,
    ),
    components(
        schemas(
            // --- Envelope ---
            models::envelope::MessageResponse,
            models::envelope::ErrorResponse,
            models::envelope::LoginResponse,
            models::envelope::HealthResponse,

            // --- Auth ---
            models::auth::Role,
            models::auth::User,
            models::auth::CreateUserPayload,
            models::auth::UpdateUserPayload,
            models::auth::LoginPayload,

            // --- Clientes ---
            models::client::ClientRow,
            models::client::ClientPayload,
            models::client::PhoneKey,
            models::client::PhoneRow,

            // --- Embarcações ---
            models::vessel::VesselType,
            models::vessel::VesselRow,
            models::vessel::CreateVesselPayload,
            models::vessel::UpdateVesselPayload,

            // --- Regulatório ---
            models::regulatory::Organ,
            models::regulatory::OrganPayload,
            models::regulatory::ProcessStatus,
            models::regulatory::ProcessRow,
            models::regulatory::ProcessPayload,
            models::regulatory::InspectionKey,
            models::regulatory::InspectionRow,
            models::regulatory::CreateInspectionPayload,
            models::regulatory::UpdateInspectionPayload,

            // --- Documentos ---
            models::document::DocumentRow,
            models::document::DocumentPayload,

            // --- Consultas ---
            models::reports::ClientVesselCount,
            models::reports::OrganActiveProcesses,
            models::reports::OwnerDocument,
            models::reports::InspectedProcess,
            models::reports::LargestVessel,
            models::reports::PanelEntry,
        )
    ),
    tags(
        (name = "Auth", description = "Login e emissão de token"),
        (name = "Clientes", description = "Clientes (Person + Client)"),
        (name = "Usuários", description = "Usuários do sistema, restrito a Admin e Gerente"),
        (name = "Embarcações", description = "Registro de embarcações"),
        (name = "Órgãos", description = "Órgãos reguladores"),
        (name = "Processos", description = "Processos junto aos órgãos"),
        (name = "Inspeções", description = "Inspeções de processos"),
        (name = "Documentos", description = "Documentos dos clientes"),
        (name = "Telefones", description = "Telefones adicionais dos clientes"),
        (name = "Consultas", description = "Relatórios fixos"),
        (name = "Sistema", description = "Teste de conexão")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_composite_key_routes_and_bearer_scheme() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/api/inspection/{idProcess}/{code}"].is_object());
        assert!(doc["paths"]["/api/consultas/painel-geral"].is_object());
        assert!(doc["components"]["securitySchemes"]["api_jwt"].is_object());
    }
}
