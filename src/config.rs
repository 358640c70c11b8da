// src/config.rs

use anyhow::{anyhow, Context};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, fmt::Display, str::FromStr, time::Duration};

use crate::{
    db::{
        ClientRepository, DocumentRepository, InspectionRepository, OrganRepository,
        PersonRepository, PhoneRepository, ProcessRepository, ReportRepository, UserRepository,
        VesselRepository,
    },
    services::{
        auth::AuthService, client_service::ClientService, document_service::DocumentService,
        regulatory_service::RegulatoryService, report_service::ReportService,
        user_service::UserService, vessel_service::VesselService,
    },
};

// Primeiro administrador, criado na inicialização se ainda não existir
#[derive(Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

#[derive(Clone)]
pub struct Settings {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    // Guarda de papel nas rotas de usuário. Desligado, o comportamento é o do
    // cliente legado, que não envia token.
    pub enforce_user_roles: bool,
    pub bootstrap_admin: Option<AdminBootstrap>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta as configurações a partir de qualquer fonte chave -> valor.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = lookup("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let bootstrap_admin = match (
            lookup("BOOTSTRAP_ADMIN_EMAIL"),
            lookup("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            (None, None) => None,
            _ => {
                return Err(anyhow!(
                    "BOOTSTRAP_ADMIN_EMAIL e BOOTSTRAP_ADMIN_PASSWORD devem ser definidos juntos"
                ))
            }
        };

        Ok(Self {
            database_url,
            jwt_secret,
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            db_acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 3)?),
            token_ttl_hours: parse_or(&lookup, "TOKEN_TTL_HOURS", 12)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            enforce_user_roles: parse_or(&lookup, "ENFORCE_USER_ROLES", true)?,
            bootstrap_admin,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{} inválido ({:?}): {}", key, raw, e)),
        None => Ok(default),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub settings: Settings,
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub client_service: ClientService,
    pub vessel_service: VesselService,
    pub regulatory_service: RegulatoryService,
    pub document_service: DocumentService,
    pub report_service: ReportService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Settings::from_env()?;

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(settings.db_max_connections)
            .acquire_timeout(settings.db_acquire_timeout)
            .connect(&settings.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_parts(db_pool, settings))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_parts(db_pool: PgPool, settings: Settings) -> Self {
        let person_repo = PersonRepository::new();
        let client_repo = ClientRepository::new(db_pool.clone());
        let user_repo = UserRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo.clone(),
            settings.jwt_secret.clone(),
            settings.token_ttl_hours,
            settings.bcrypt_cost,
        );
        let user_service = UserService::new(
            person_repo.clone(),
            user_repo,
            db_pool.clone(),
            settings.bcrypt_cost,
        );
        let client_service = ClientService::new(
            person_repo,
            client_repo.clone(),
            PhoneRepository::new(db_pool.clone()),
            db_pool.clone(),
        );
        let vessel_service = VesselService::new(
            client_repo,
            VesselRepository::new(db_pool.clone()),
            db_pool.clone(),
        );
        let regulatory_service = RegulatoryService::new(
            OrganRepository::new(db_pool.clone()),
            ProcessRepository::new(db_pool.clone()),
            InspectionRepository::new(db_pool.clone()),
            db_pool.clone(),
        );
        let document_service =
            DocumentService::new(DocumentRepository::new(db_pool.clone()), db_pool.clone());
        let report_service = ReportService::new(ReportRepository::new(db_pool.clone()));

        Self {
            db_pool,
            settings,
            auth_service,
            user_service,
            client_service,
            vessel_service,
            regulatory_service,
            document_service,
            report_service,
        }
    }
}
