pub mod modules;
pub use modules::{auth, email, group, membership, society};

mod api;
mod config;
pub mod health;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::helpers::PlatformAccess;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};
use crate::auth::application::services::CredentialStore;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    set_user_status::{ISetUserStatusUseCase, SetUserStatusUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};
use crate::config::{load_dotenv, ServerConfig, SmtpConfig};
use crate::email::adapter::outgoing::{RecipientQueryPostgres, SmtpEmailSender};
use crate::email::application::services::SendBulkEmailService;
use crate::email::application::EmailUseCases;
use crate::group::adapter::outgoing::{GroupQueryPostgres, GroupRepositoryPostgres};
use crate::group::application::services::{CreateGroupService, ListGroupsService};
use crate::group::application::GroupUseCases;
use crate::membership::adapter::outgoing::{
    SocietyRoleQueryPostgres, SocietyRoleRepositoryPostgres,
};
use crate::membership::application::helpers::SocietyAccess;
use crate::membership::application::services::{AssignRoleService, ListRolesService};
use crate::membership::application::MembershipUseCases;
use crate::shared::api::custom_json_config;
use crate::society::adapter::outgoing::{
    SocietyQueryPostgres, SocietyRepositoryPostgres, SocietyRequestRepositoryPostgres,
};
use crate::society::application::services::{
    ApproveSocietyRequestService, CreateSocietyRequestService, RejectSocietyRequestService,
    SetSocietyStatusService,
};
use crate::society::application::SocietyUseCases;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub set_user_status_use_case: Arc<dyn ISetUserStatusUseCase + Send + Sync>,
    pub society: SocietyUseCases,
    pub group: GroupUseCases,
    pub membership: MembershipUseCases,
    pub email: EmailUseCases,
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

    let env_name = load_dotenv();
    info!(environment = %env_name, "Starting society portal");

    let server_config = ServerConfig::from_env()?;
    // Refuse to boot without a signing secret.
    let jwt_config = JwtConfig::from_env()?;
    let smtp_config = SmtpConfig::from_env(&env_name)?;

    // Database connection
    let mut opt = ConnectOptions::new(server_config.database_url.clone());
    opt.max_connections(server_config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(Database::connect(opt).await?);

    // Outgoing adapters
    let user_query = UserQueryPostgres::new(Arc::clone(&db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db));
    let society_query = SocietyQueryPostgres::new(Arc::clone(&db));
    let society_repo = SocietyRepositoryPostgres::new(Arc::clone(&db));
    let request_repo = SocietyRequestRepositoryPostgres::new(Arc::clone(&db));
    let role_query = SocietyRoleQueryPostgres::new(Arc::clone(&db));
    let role_repo = SocietyRoleRepositoryPostgres::new(Arc::clone(&db));
    let group_query = GroupQueryPostgres::new(Arc::clone(&db));
    let group_repo = GroupRepositoryPostgres::new(Arc::clone(&db));
    let recipient_query = RecipientQueryPostgres::new(Arc::clone(&db));

    let hasher: Arc<dyn PasswordHasher + Send + Sync> = Arc::new(Argon2Hasher::from_env()?);
    let credentials = CredentialStore::new(hasher);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let mail_sender = Arc::new(SmtpEmailSender::from_config(&smtp_config)?);

    // Access checks
    let user_query_arc: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query.clone());
    let platform_access = PlatformAccess::new(Arc::clone(&user_query_arc));
    let society_access = SocietyAccess::new(platform_access.clone(), Arc::new(role_query.clone()));

    // Use cases
    let society = SocietyUseCases {
        create_request: Arc::new(CreateSocietyRequestService::new(
            society_query.clone(),
            request_repo.clone(),
        )),
        approve_request: Arc::new(ApproveSocietyRequestService::new(
            platform_access.clone(),
            Arc::clone(&user_query_arc),
            request_repo.clone(),
        )),
        reject_request: Arc::new(RejectSocietyRequestService::new(
            platform_access.clone(),
            request_repo,
        )),
        set_status: Arc::new(SetSocietyStatusService::new(
            platform_access.clone(),
            society_query.clone(),
            society_repo,
        )),
    };

    let group = GroupUseCases {
        create: Arc::new(CreateGroupService::new(
            society_access.clone(),
            society_query.clone(),
            group_repo,
        )),
        list: Arc::new(ListGroupsService::new(
            society_query.clone(),
            group_query.clone(),
        )),
    };

    let membership = MembershipUseCases {
        assign_role: Arc::new(AssignRoleService::new(
            society_access.clone(),
            Arc::clone(&user_query_arc),
            society_query.clone(),
            group_query,
            role_repo,
        )),
        list_roles: Arc::new(ListRolesService::new(society_query.clone(), role_query)),
    };

    let email = EmailUseCases {
        send_bulk: Arc::new(SendBulkEmailService::new(
            society_access,
            society_query,
            recipient_query,
            mail_sender,
        )),
    };

    let state = AppState {
        register_user_use_case: Arc::new(CreateUserUseCase::new(
            user_repo.clone(),
            credentials.clone(),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            credentials.clone(),
            Arc::clone(&token_provider),
        )),
        update_user_use_case: Arc::new(UpdateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            credentials,
        )),
        set_user_status_use_case: Arc::new(SetUserStatusUseCase::new(
            platform_access,
            user_query,
            user_repo,
        )),
        society,
        group,
        membership,
        email,
    };

    let bind_address = server_config.bind_address();
    info!(address = %bind_address, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth and users
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::set_user_status_handler);
    // Societies
    cfg.service(crate::society::adapter::incoming::web::routes::create_society_request_handler);
    cfg.service(crate::society::adapter::incoming::web::routes::approve_society_request_handler);
    cfg.service(crate::society::adapter::incoming::web::routes::reject_society_request_handler);
    cfg.service(crate::society::adapter::incoming::web::routes::set_society_status_handler);
    // Groups
    cfg.service(crate::group::adapter::incoming::web::routes::create_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::list_groups_handler);
    // Membership
    cfg.service(crate::membership::adapter::incoming::web::routes::assign_role_handler);
    cfg.service(crate::membership::adapter::incoming::web::routes::list_roles_handler);
    // Email
    cfg.service(crate::email::adapter::incoming::web::routes::send_bulk_email_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
