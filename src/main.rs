pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use crate::modules::auth::adapter::outgoing::admission_http::admission_from_env;
use crate::modules::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::modules::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::modules::auth::adapter::outgoing::verification_ledger_postgres::VerificationLedgerPostgres;
use crate::modules::auth::application::orchestrator::registration::RegistrationOrchestrator;
use crate::modules::auth::application::services::hash::{BcryptHasher, PasswordHashingService};
use crate::modules::auth::application::services::token::{TokenCodec, TokenConfig};
use crate::modules::auth::application::use_cases::{
    complete_password_reset::{CompletePasswordResetUseCase, ICompletePasswordResetUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    request_password_reset::{IRequestPasswordResetUseCase, RequestPasswordResetUseCase},
    resend_verification::{IResendVerificationUseCase, ResendVerificationUseCase},
    verify_email::{IVerifyEmailUseCase, VerifyEmailUseCase},
};
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::AuthEmailNotifier;
use crate::modules::email::application::services::EmailService;
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::use_cases::create_project::CreateProjectUseCase;
use crate::modules::project::application::use_cases::get_project::GetProjectUseCase;
use crate::modules::project::application::use_cases::list_projects::ListProjectsUseCase;
use crate::modules::project::application::use_cases::project_use_cases::ProjectUseCases;
use crate::modules::task::adapter::outgoing::task_repository_postgres::TaskRepositoryPostgres;
use crate::modules::task::application::use_cases::create_task::CreateTaskUseCase;
use crate::modules::task::application::use_cases::list_tasks::ListTasksUseCase;
use crate::modules::task::application::use_cases::task_use_cases::TaskUseCases;
use crate::modules::task::application::use_cases::update_task_status::UpdateTaskStatusUseCase;
use crate::modules::workspace::adapter::outgoing::workspace_repository_postgres::WorkspaceRepositoryPostgres;
use crate::modules::workspace::application::use_cases::accept_invite::AcceptInviteUseCase;
use crate::modules::workspace::application::use_cases::create_workspace::CreateWorkspaceUseCase;
use crate::modules::workspace::application::use_cases::get_workspace::GetWorkspaceUseCase;
use crate::modules::workspace::application::use_cases::invite_member::InviteMemberUseCase;
use crate::modules::workspace::application::use_cases::list_workspaces::ListWorkspacesUseCase;
use crate::modules::workspace::application::use_cases::workspace_use_cases::WorkspaceUseCases;
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub registration_orchestrator: Arc<RegistrationOrchestrator>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase>,
    pub verify_email_use_case: Arc<dyn IVerifyEmailUseCase>,
    pub resend_verification_use_case: Arc<dyn IResendVerificationUseCase>,
    pub request_password_reset_use_case: Arc<dyn IRequestPasswordResetUseCase>,
    pub complete_password_reset_use_case: Arc<dyn ICompletePasswordResetUseCase>,
    pub workspace_use_cases: WorkspaceUseCases,
    pub project_use_cases: ProjectUseCases,
    pub task_use_cases: TaskUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let frontend_url = env::var("FRONTEND_URL").expect("FRONTEND_URL is not set in .env file");

    // SMTP setup
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if rust_env == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
    };

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let token_codec = TokenCodec::new(TokenConfig::from_env());
    let password_hasher = PasswordHashingService::with_hasher(BcryptHasher::from_env());

    let notifier: Arc<dyn AuthEmailNotifier> =
        Arc::new(EmailService::new(Arc::new(smtp_sender), frontend_url));

    // Auth wiring
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let ledger = VerificationLedgerPostgres::new(Arc::clone(&db_arc));

    let register_user: Arc<dyn IRegisterUserUseCase> = Arc::new(RegisterUserUseCase::new(
        user_repo.clone(),
        password_hasher.clone(),
    ));
    let registration_orchestrator = RegistrationOrchestrator::new(
        admission_from_env(),
        register_user,
        Arc::new(ledger.clone()),
        token_codec.clone(),
        Arc::clone(&notifier),
    );

    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        token_codec.clone(),
    );
    let verify_email_use_case = VerifyEmailUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        ledger.clone(),
        token_codec.clone(),
    );
    let resend_verification_use_case = ResendVerificationUseCase::new(
        user_query.clone(),
        ledger.clone(),
        token_codec.clone(),
        Arc::clone(&notifier),
    );
    let request_password_reset_use_case = RequestPasswordResetUseCase::new(
        user_query.clone(),
        ledger.clone(),
        token_codec.clone(),
        Arc::clone(&notifier),
    );
    let complete_password_reset_use_case = CompletePasswordResetUseCase::new(
        user_query.clone(),
        user_repo,
        ledger,
        token_codec.clone(),
        password_hasher,
    );

    // Workspace wiring
    let workspace_repo = WorkspaceRepositoryPostgres::new(Arc::clone(&db_arc));
    let workspace_use_cases = WorkspaceUseCases {
        create: Arc::new(CreateWorkspaceUseCase::new(workspace_repo.clone())),
        list: Arc::new(ListWorkspacesUseCase::new(workspace_repo.clone())),
        get: Arc::new(GetWorkspaceUseCase::new(workspace_repo.clone())),
        invite: Arc::new(InviteMemberUseCase::new(
            workspace_repo.clone(),
            user_query,
            token_codec.clone(),
            Arc::clone(&notifier),
        )),
        accept: Arc::new(AcceptInviteUseCase::new(
            workspace_repo.clone(),
            token_codec.clone(),
        )),
    };

    // Project wiring
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_use_cases = ProjectUseCases {
        create: Arc::new(CreateProjectUseCase::new(
            project_repo.clone(),
            workspace_repo.clone(),
        )),
        list: Arc::new(ListProjectsUseCase::new(
            project_repo.clone(),
            workspace_repo.clone(),
        )),
        get: Arc::new(GetProjectUseCase::new(
            project_repo.clone(),
            workspace_repo.clone(),
        )),
    };

    // Task wiring
    let task_repo = TaskRepositoryPostgres::new(Arc::clone(&db_arc));
    let task_use_cases = TaskUseCases {
        create: Arc::new(CreateTaskUseCase::new(
            task_repo.clone(),
            project_repo.clone(),
            workspace_repo.clone(),
        )),
        list: Arc::new(ListTasksUseCase::new(
            task_repo.clone(),
            project_repo.clone(),
            workspace_repo.clone(),
        )),
        update_status: Arc::new(UpdateTaskStatusUseCase::new(
            task_repo,
            project_repo,
            workspace_repo,
        )),
    };

    let state = AppState {
        registration_orchestrator: Arc::new(registration_orchestrator),
        login_user_use_case: Arc::new(login_user_use_case),
        verify_email_use_case: Arc::new(verify_email_use_case),
        resend_verification_use_case: Arc::new(resend_verification_use_case),
        request_password_reset_use_case: Arc::new(request_password_reset_use_case),
        complete_password_reset_use_case: Arc::new(complete_password_reset_use_case),
        workspace_use_cases,
        project_use_cases,
        task_use_cases,
    };

    let db_for_server = Arc::clone(&db_arc);

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_codec.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::verify_email_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::resend_verification_handler);
    cfg.service(
        crate::modules::auth::adapter::incoming::web::routes::reset_password_request_handler,
    );
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::reset_password_handler);
    // Workspaces
    cfg.service(crate::modules::workspace::adapter::incoming::web::routes::create_workspace_handler);
    cfg.service(crate::modules::workspace::adapter::incoming::web::routes::list_workspaces_handler);
    cfg.service(crate::modules::workspace::adapter::incoming::web::routes::get_workspace_handler);
    cfg.service(crate::modules::workspace::adapter::incoming::web::routes::invite_member_handler);
    cfg.service(crate::modules::workspace::adapter::incoming::web::routes::accept_invite_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_handler);
    // Tasks
    cfg.service(crate::modules::task::adapter::incoming::web::routes::create_task_handler);
    cfg.service(crate::modules::task::adapter::incoming::web::routes::list_tasks_handler);
    cfg.service(crate::modules::task::adapter::incoming::web::routes::update_task_status_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
