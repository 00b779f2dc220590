pub mod api;
pub mod config;
pub mod health;
pub mod home;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::entry;
pub use modules::topic;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::use_cases::{
    create_superuser::{CreateSuperuserUseCase, ICreateSuperuserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::config::AppConfig;
use crate::entry::adapter::outgoing::{EntryQueryPostgres, EntryRepositoryPostgres};
use crate::entry::application::entry_use_cases::EntryUseCases;
use crate::entry::application::services::{CreateEntryService, EditEntryService};
use crate::topic::adapter::outgoing::{TopicQueryPostgres, TopicRepositoryPostgres};
use crate::topic::application::services::{CreateTopicService, GetTopicService, GetTopicsService};
use crate::topic::application::topic_use_cases::TopicUseCases;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub topic: TopicUseCases,
    pub entry: EntryUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let topic_query = TopicQueryPostgres::new(Arc::clone(&db_arc));
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));
    let entry_query = EntryQueryPostgres::new(Arc::clone(&db_arc));
    let entry_repo = EntryRepositoryPostgres::new(Arc::clone(&db_arc));

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));

    if let Some(superuser) = &config.superuser {
        let account = CreateSuperuserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )
        .execute(&superuser.username, &superuser.password)
        .await
        .context("Failed to provision superuser")?;
        info!(user_id = %account.id, username = %account.username, "Superuser ready");
    }

    let state = AppState {
        register_user_use_case: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo,
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query,
            password_hasher,
            Arc::clone(&token_provider),
        )),
        topic: TopicUseCases {
            create: Arc::new(CreateTopicService::new(topic_repo)),
            get_list: Arc::new(GetTopicsService::new(topic_query.clone())),
            get_single: Arc::new(GetTopicService::new(
                topic_query.clone(),
                entry_query.clone(),
            )),
        },
        entry: EntryUseCases {
            create: Arc::new(CreateEntryService::new(
                topic_query.clone(),
                entry_repo.clone(),
            )),
            edit: Arc::new(EditEntryService::new(entry_query, topic_query, entry_repo)),
        },
    };

    let openapi = api::openapi::ApiDoc::openapi();
    let server_url = config.server_url();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Home
    cfg.service(crate::home::home_handler);
    // Accounts
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Topics; "/topics/new" must be registered before "/topics/{topic_id}"
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::new_topic_form_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::get_topic_handler);
    // Entries
    cfg.service(crate::entry::adapter::incoming::web::routes::new_entry_form_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::create_entry_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::edit_entry_form_handler);
    cfg.service(crate::entry::adapter::incoming::web::routes::update_entry_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    start().context("Error starting app")
}
