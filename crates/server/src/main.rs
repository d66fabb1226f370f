// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod forms;
mod session;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use talent_bridge_api::{
    ApiError, ApplicationDetailResponse, ApplicationSummaryInfo, ApplicationWriteResponse,
    ChangePasswordRequest, DEFAULT_ADMIN_PASSWORD, DEFAULT_MAX_UPLOAD_BYTES, DeleteJobResponse,
    EditProfileRequest, EmailMessage, EmployeeDashboardResponse, HrDashboardResponse,
    InterviewWriteResponse, JobDetailResponse, JobRequest, JobWriteResponse, ListInterviewsRequest,
    ListInterviewsResponse, ListJobsRequest, ListJobsResponse, ListNotificationsResponse,
    LogMailer, LoginRequest, LoginResponse, Mailer, ManageApplicationsRequest,
    ManageApplicationsResponse, MessageResponse, NotificationDispatcher, OutboxMailer, Page,
    ProfileResponse, RegisterRequest, RegisterResponse, RescheduleInterviewRequest, ResumeStore,
    ScheduleInterviewRequest, SubmitApplicationRequest, UpdateApplicationStatusRequest,
    UpdateInterviewRequest, WhoAmIResponse, application_detail, change_password, delete_job,
    edit_job, edit_profile, employee_dashboard, ensure_admin, get_profile, hr_dashboard,
    job_detail, list_interviews, list_jobs, list_notifications, login, logout,
    manage_applications, mark_notification_read, my_applications, post_job, register,
    reschedule_interview, schedule_interview, submit_application, update_application_status,
    update_interview, whoami, withdraw_application,
};
use talent_bridge_persistence::{DEFAULT_PASSWORD_COST, Persistence, PersistenceError};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::forms::MultipartForm;
use crate::session::{BearerToken, SessionUser};

/// Room left in the body limit for the text parts of a multipart form.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// TalentBridge Server - HTTP server for the TalentBridge recruiting portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "TALENT_BRIDGE_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, env = "TALENT_BRIDGE_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Directory resumes are stored in
    #[arg(long, env = "UPLOAD_FOLDER", default_value = "uploads/resumes")]
    upload_folder: PathBuf,

    /// Largest accepted resume, in bytes
    #[arg(long, env = "MAX_CONTENT_LENGTH", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_content_length: usize,

    /// Directory outgoing emails are written to. Emails are only logged when absent.
    #[arg(long, env = "MAIL_OUTBOX")]
    mail_outbox: Option<PathBuf>,

    /// Sender address for outgoing emails
    #[arg(long, env = "MAIL_DEFAULT_SENDER")]
    mail_default_sender: Option<String>,

    /// Password given to the admin account when it is first seeded
    #[arg(long, env = "TALENT_BRIDGE_ADMIN_PASSWORD", default_value = DEFAULT_ADMIN_PASSWORD)]
    admin_password: String,

    /// Session lifetime in days
    #[arg(long, default_value_t = 30)]
    session_days: i64,
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex and is the only shared
/// mutable resource.
#[derive(Clone)]
pub struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
    /// Where resumes are written.
    store: Arc<ResumeStore>,
    /// Sends the emails handlers hand back.
    dispatcher: NotificationDispatcher,
    /// How long a new session stays valid.
    session_lifetime: time::Duration,
}

#[derive(Debug, Clone, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<u32>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Flash category: `danger` or `warning`.
    level: String,
    /// The field that failed validation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    /// Where a browser client should go next, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Flash category.
    level: &'static str,
    field: Option<String>,
    redirect: Option<&'static str>,
}

impl HttpError {
    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            level: "danger",
            field: None,
            redirect: None,
        }
    }

    const fn warning(mut self) -> Self {
        self.level = "warning";
        self
    }

    const fn redirect(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            level: self.level.to_string(),
            field: self.field,
            redirect: self.redirect.map(str::to_string),
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        match err {
            ApiError::AuthenticationFailed { .. } => {
                Self::new(StatusCode::UNAUTHORIZED, message).redirect("/auth/login")
            }
            ApiError::Forbidden { .. } => Self::new(StatusCode::FORBIDDEN, message)
                .warning()
                .redirect("/jobs/employee-dashboard"),
            ApiError::InvalidInput { field, .. } => Self {
                field: Some(field),
                ..Self::new(StatusCode::BAD_REQUEST, message)
            },
            ApiError::Conflict { .. } => Self::new(StatusCode::CONFLICT, message).warning(),
            ApiError::InvalidState { .. } => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, message).warning()
            }
            ApiError::ResourceNotFound { .. } => Self::new(StatusCode::NOT_FOUND, message),
            ApiError::StoreFailure { .. } | ApiError::Internal { .. } => {
                error!(error = %message, "Request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

/// Hands committed emails to the dispatcher without holding up the response.
///
/// A mail failure is logged by the dispatcher and never reaches the client.
fn dispatch_emails(app_state: &AppState, emails: Vec<EmailMessage>) {
    if emails.is_empty() {
        return;
    }
    let dispatcher: NotificationDispatcher = app_state.dispatcher.clone();
    tokio::task::spawn_blocking(move || {
        let delivered: usize = dispatcher.dispatch(&emails);
        debug!(delivered, queued = emails.len(), "Emails dispatched");
    });
}

// ========================================================================
// Auth
// ========================================================================

/// Handler for POST `/auth/register` endpoint.
///
/// Creates an employee account.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, HttpError> {
    info!(username = %req.username, "Handling register request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterResponse = register(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/auth/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login = %req.login, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &req, app_state.session_lifetime)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/auth/logout` endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = logout(&mut persistence, &token)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/auth/whoami` endpoint.
async fn handle_whoami(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(_actor, user): SessionUser,
) -> Result<Json<WhoAmIResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: WhoAmIResponse = whoami(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

// ========================================================================
// Jobs
// ========================================================================

/// Handler for GET `/jobs/list` endpoint.
///
/// Lists active jobs with optional department, location and search filters.
async fn handle_list_jobs(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Query(query): Query<ListJobsRequest>,
) -> Result<Json<ListJobsResponse>, HttpError> {
    debug!(user_id = actor.user_id, ?query, "Handling list_jobs request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListJobsResponse = list_jobs(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_job_detail(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(job_id): Path<i64>,
) -> Result<Json<JobDetailResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: JobDetailResponse = job_detail(&mut persistence, &actor, job_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/jobs/post` endpoint.
async fn handle_post_job(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Json(req): Json<JobRequest>,
) -> Result<Json<JobWriteResponse>, HttpError> {
    info!(
        user_id = actor.user_id,
        title = %req.title,
        "Handling post_job request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: JobWriteResponse = post_job(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/jobs/{id}/edit` endpoint.
async fn handle_edit_job(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(job_id): Path<i64>,
    Json(req): Json<JobRequest>,
) -> Result<Json<JobWriteResponse>, HttpError> {
    info!(user_id = actor.user_id, job_id, "Handling edit_job request");

    let mut persistence = app_state.persistence.lock().await;
    let response: JobWriteResponse = edit_job(&mut persistence, &actor, job_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/jobs/{id}/delete` endpoint.
///
/// Removes the job together with its applications and their interviews.
async fn handle_delete_job(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(job_id): Path<i64>,
) -> Result<Json<DeleteJobResponse>, HttpError> {
    info!(user_id = actor.user_id, job_id, "Handling delete_job request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteJobResponse = delete_job(&mut persistence, &actor, job_id)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_employee_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<EmployeeDashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeDashboardResponse = employee_dashboard(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_hr_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<HrDashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: HrDashboardResponse = hr_dashboard(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

// ========================================================================
// Applications
// ========================================================================

/// Handler for POST `/applications/apply/{job_id}` endpoint.
///
/// Accepts a multipart form with a `cover_letter` text part and an optional
/// `resume` file part.
async fn handle_apply(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(job_id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<ApplicationWriteResponse>, HttpError> {
    let mut form: MultipartForm = MultipartForm::read(multipart).await?;
    let request: SubmitApplicationRequest = SubmitApplicationRequest {
        cover_letter: form.take("cover_letter"),
    };
    info!(
        user_id = actor.user_id,
        job_id,
        has_resume = form.resume.is_some(),
        "Handling apply request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ApplicationWriteResponse = submit_application(
        &mut persistence,
        &app_state.store,
        &actor,
        job_id,
        &request,
        form.resume.as_ref(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_my_applications(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<ApplicationSummaryInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Page<ApplicationSummaryInfo> =
        my_applications(&mut persistence, &actor, query.page)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/applications/manage` endpoint.
async fn handle_manage_applications(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Query(query): Query<ManageApplicationsRequest>,
) -> Result<Json<ManageApplicationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ManageApplicationsResponse =
        manage_applications(&mut persistence, &actor, &query)?;
    drop(persistence);

    Ok(Json(response))
}

async fn handle_application_detail(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(application_id): Path<i64>,
) -> Result<Json<ApplicationDetailResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ApplicationDetailResponse =
        application_detail(&mut persistence, &actor, application_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/applications/{id}/update-status` endpoint.
///
/// The applicant's email goes out after the change is committed.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(application_id): Path<i64>,
    Json(req): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<ApplicationWriteResponse>, HttpError> {
    info!(
        user_id = actor.user_id,
        application_id,
        status = %req.status,
        "Handling update_status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let outcome = update_application_status(&mut persistence, &actor, application_id, &req)?;
    drop(persistence);

    dispatch_emails(&app_state, outcome.emails);
    Ok(Json(outcome.response))
}

/// Handler for POST `/applications/{id}/withdraw` endpoint.
async fn handle_withdraw(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(application_id): Path<i64>,
) -> Result<Json<ApplicationWriteResponse>, HttpError> {
    info!(
        user_id = actor.user_id,
        application_id, "Handling withdraw request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ApplicationWriteResponse =
        withdraw_application(&mut persistence, &actor, application_id)?;
    drop(persistence);

    Ok(Json(response))
}

// ========================================================================
// Interviews
// ========================================================================

/// Handler for POST `/interviews/schedule/{application_id}` endpoint.
///
/// Books the interview and moves the application to `interview` in one
/// transaction, then sends the invitation.
async fn handle_schedule_interview(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(application_id): Path<i64>,
    Json(req): Json<ScheduleInterviewRequest>,
) -> Result<Json<InterviewWriteResponse>, HttpError> {
    info!(
        user_id = actor.user_id,
        application_id,
        date = %req.scheduled_date,
        time = %req.scheduled_time,
        "Handling schedule_interview request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let outcome = schedule_interview(&mut persistence, &actor, application_id, &req)?;
    drop(persistence);

    dispatch_emails(&app_state, outcome.emails);
    Ok(Json(outcome.response))
}

async fn handle_list_interviews(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Query(query): Query<ListInterviewsRequest>,
) -> Result<Json<ListInterviewsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListInterviewsResponse = list_interviews(&mut persistence, &actor, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/interviews/{id}/update` endpoint.
async fn handle_update_interview(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(interview_id): Path<i64>,
    Json(req): Json<UpdateInterviewRequest>,
) -> Result<Json<InterviewWriteResponse>, HttpError> {
    info!(
        user_id = actor.user_id,
        interview_id, "Handling update_interview request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: InterviewWriteResponse =
        update_interview(&mut persistence, &actor, interview_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/interviews/{id}/reschedule` endpoint.
async fn handle_reschedule_interview(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(interview_id): Path<i64>,
    Json(req): Json<RescheduleInterviewRequest>,
) -> Result<Json<InterviewWriteResponse>, HttpError> {
    info!(
        user_id = actor.user_id,
        interview_id, "Handling reschedule_interview request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let outcome = reschedule_interview(&mut persistence, &actor, interview_id, &req)?;
    drop(persistence);

    dispatch_emails(&app_state, outcome.emails);
    Ok(Json(outcome.response))
}

// ========================================================================
// Profile
// ========================================================================

async fn handle_get_profile(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<ProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ProfileResponse = get_profile(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/profile/edit` endpoint.
///
/// Multipart: the profile fields as text parts and an optional replacement
/// `resume`.
async fn handle_edit_profile(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    multipart: Multipart,
) -> Result<Json<ProfileResponse>, HttpError> {
    let mut form: MultipartForm = MultipartForm::read(multipart).await?;
    let request: EditProfileRequest = EditProfileRequest {
        first_name: form.take_or_empty("first_name"),
        last_name: form.take_or_empty("last_name"),
        department: form.take("department"),
        location: form.take("location"),
        phone: form.take("phone"),
        skills: form.take("skills"),
    };
    info!(
        user_id = actor.user_id,
        has_resume = form.resume.is_some(),
        "Handling edit_profile request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: ProfileResponse = edit_profile(
        &mut persistence,
        &app_state.store,
        &actor,
        &request,
        form.resume.as_ref(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/profile/change-password` endpoint.
async fn handle_change_password(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(user_id = actor.user_id, "Handling change_password request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = change_password(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

// ========================================================================
// Notifications
// ========================================================================

async fn handle_list_notifications(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
) -> Result<Json<ListNotificationsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListNotificationsResponse = list_notifications(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/notifications/{id}/read` endpoint.
async fn handle_mark_notification_read(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(actor, _user): SessionUser,
    Path(notification_id): Path<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse =
        mark_notification_read(&mut persistence, &actor, notification_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let body_limit: usize = app_state
        .store
        .max_bytes()
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/auth/register", post(handle_register))
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/whoami", get(handle_whoami))
        .route("/jobs/list", get(handle_list_jobs))
        .route("/jobs/post", post(handle_post_job))
        .route("/jobs/employee-dashboard", get(handle_employee_dashboard))
        .route("/jobs/hr-dashboard", get(handle_hr_dashboard))
        .route("/jobs/{job_id}", get(handle_job_detail))
        .route("/jobs/{job_id}/edit", post(handle_edit_job))
        .route("/jobs/{job_id}/delete", post(handle_delete_job))
        .route("/applications/apply/{job_id}", post(handle_apply))
        .route("/applications/my-applications", get(handle_my_applications))
        .route("/applications/manage", get(handle_manage_applications))
        .route(
            "/applications/{application_id}",
            get(handle_application_detail),
        )
        .route(
            "/applications/{application_id}/update-status",
            post(handle_update_status),
        )
        .route(
            "/applications/{application_id}/withdraw",
            post(handle_withdraw),
        )
        .route(
            "/interviews/schedule/{application_id}",
            post(handle_schedule_interview),
        )
        .route("/interviews/list", get(handle_list_interviews))
        .route(
            "/interviews/{interview_id}/update",
            post(handle_update_interview),
        )
        .route(
            "/interviews/{interview_id}/reschedule",
            post(handle_reschedule_interview),
        )
        .route("/profile", get(handle_get_profile))
        .route("/profile/", get(handle_get_profile))
        .route("/profile/edit", post(handle_edit_profile))
        .route("/profile/change-password", post(handle_change_password))
        .route("/notifications", get(handle_list_notifications))
        .route(
            "/notifications/{notification_id}/read",
            post(handle_mark_notification_read),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn build_mailer(args: &Args) -> Arc<dyn Mailer> {
    args.mail_outbox.as_ref().map_or_else(
        || {
            info!("Emails will be logged, not delivered");
            Arc::new(LogMailer) as Arc<dyn Mailer>
        },
        |dir| {
            info!("Writing emails to outbox at: {}", dir.display());
            Arc::new(OutboxMailer::new(dir.clone())) as Arc<dyn Mailer>
        },
    )
}

/// Seeds the admin account if it is missing.
fn seed_admin(persistence: &mut Persistence, password: &str) -> Result<(), ApiError> {
    match ensure_admin(persistence, password)? {
        Some(user_id) => info!(user_id, "Seeded admin account"),
        None => debug!("Admin account already present"),
    }
    Ok(())
}

/// Opens the configured database, or an in-memory one when none is given.
///
/// Both use the full bcrypt cost; only tests hash with the fast one.
fn open_persistence(database: Option<&str>) -> Result<Persistence, PersistenceError> {
    if let Some(db_path) = database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)
    } else {
        info!("Using in-memory database");
        Ok(Persistence::new_in_memory()?.with_password_cost(DEFAULT_PASSWORD_COST))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing TalentBridge Server");

    let mut persistence: Persistence = open_persistence(args.database.as_deref())?;
    seed_admin(&mut persistence, &args.admin_password)?;

    info!(
        "Storing resumes in: {} (limit {} bytes)",
        args.upload_folder.display(),
        args.max_content_length
    );
    let store: ResumeStore = ResumeStore::new(args.upload_folder.clone(), args.max_content_length);
    let dispatcher: NotificationDispatcher =
        NotificationDispatcher::new(build_mailer(&args), args.mail_default_sender.clone());

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        store: Arc::new(store),
        dispatcher,
        session_lifetime: time::Duration::days(args.session_days),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
