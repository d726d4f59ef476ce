use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::design::CustomerIdentity;
use crate::domain::ports::Session;
use crate::errors::AppError;
use crate::state::AppState;

use super::session::load_session;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: CustomerIdentity,
    pub is_admin: bool,
}

impl From<Session> for SessionResponse {
    fn from(s: Session) -> Self {
        Self {
            user: s.user,
            is_admin: s.is_admin,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /auth/signup
///
/// Registers a customer in the demo directory. The caller still has to log in.
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Customer registered", body = CustomerIdentity),
        (status = 400, description = "Missing fields, short password, bad or duplicate email"),
    ),
    tag = "auth"
)]
pub async fn sign_up(
    state: web::Data<AppState>,
    body: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let created = web::block(move || {
        let mut accounts = state.accounts()?;
        Ok::<_, AppError>(accounts.sign_up(&body.name, &body.email, &body.password)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(created))
}

/// POST /auth/login
///
/// Signs a customer in and opens a fresh configurator session.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
        (status = 401, description = "Invalid email or password"),
    ),
    tag = "auth"
)]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let session = web::block(move || {
        let session = state.accounts()?.login(&body.email, &body.password)?;
        state.configurator()?.reset();
        Ok::<_, AppError>(session)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(SessionResponse::from(session)))
}

/// POST /auth/admin/login
#[utoipa::path(
    post,
    path = "/auth/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in as admin", body = SessionResponse),
        (status = 401, description = "Invalid admin credentials"),
    ),
    tag = "auth"
)]
pub async fn admin_login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let session = web::block(move || {
        let mut accounts = state.accounts()?;
        Ok::<_, AppError>(accounts.admin_login(&body.email, &body.password)?)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(SessionResponse::from(session)))
}

/// POST /auth/logout
///
/// Clears the stored session and discards the unsubmitted configuration.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 204, description = "Signed out"),
    ),
    tag = "auth"
)]
pub async fn logout(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    web::block(move || {
        state.accounts()?.logout()?;
        state.configurator()?.reset();
        Ok::<_, AppError>(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /auth/session
#[utoipa::path(
    get,
    path = "/auth/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Nobody is signed in"),
    ),
    tag = "auth"
)]
pub async fn current_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match load_session(Some(state)).await? {
        Some(session) => Ok(HttpResponse::Ok().json(SessionResponse::from(session))),
        None => Err(AppError::Unauthorized("not signed in".to_string())),
    }
}
