use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::application::design_service::budget_label;
use crate::domain::catalog;
use crate::domain::configuration::{CarConfiguration, ConfigUpdate, SetField, WizardStep};
use crate::domain::pricing;
use crate::errors::AppError;
use crate::state::AppState;

use super::designs::DesignResponse;
use super::session::SignedInCustomer;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFieldRequest {
    /// Configuration field in camelCase, e.g. "rimSize", or one of
    /// "addConnectivity", "removeConnectivity", "addSmartTech", "removeSmartTech".
    pub field: String,
    pub value: Value,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleRequest {
    pub set: SetField,
    pub value: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StepResponse {
    pub number: usize,
    pub step: WizardStep,
    pub title: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub budget_label: String,
    pub total_price: i64,
}

fn parse_update(body: UpdateFieldRequest) -> Result<ConfigUpdate, AppError> {
    let update: ConfigUpdate =
        serde_json::from_value(json!({ "field": body.field, "value": body.value }))
            .map_err(|e| AppError::BadRequest(format!("invalid update: {e}")))?;
    catalog::validate_update(&update).map_err(AppError::BadRequest)?;
    Ok(update)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /configuration
#[utoipa::path(
    get,
    path = "/configuration",
    responses(
        (status = 200, description = "Current configuration", body = CarConfiguration),
        (status = 401, description = "No customer signed in"),
    ),
    tag = "configuration"
)]
pub async fn get_configuration(
    _customer: SignedInCustomer,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let config = state.configurator()?.snapshot();
    Ok(HttpResponse::Ok().json(config))
}

/// PATCH /configuration
///
/// Applies one field change from a wizard step. Values outside what the
/// step offers are rejected here; the stored configuration never is.
#[utoipa::path(
    patch,
    path = "/configuration",
    request_body = UpdateFieldRequest,
    responses(
        (status = 200, description = "Updated configuration", body = CarConfiguration),
        (status = 400, description = "Unknown field or value not offered"),
        (status = 401, description = "No customer signed in"),
    ),
    tag = "configuration"
)]
pub async fn update_configuration(
    _customer: SignedInCustomer,
    state: web::Data<AppState>,
    body: web::Json<UpdateFieldRequest>,
) -> Result<HttpResponse, AppError> {
    let update = parse_update(body.into_inner())?;

    let config = state.configurator()?.update(update).clone();
    Ok(HttpResponse::Ok().json(config))
}

/// POST /configuration/toggle
///
/// Flips membership of a connectivity option or smart-tech feature.
#[utoipa::path(
    post,
    path = "/configuration/toggle",
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Updated configuration", body = CarConfiguration),
        (status = 400, description = "Option not offered"),
        (status = 401, description = "No customer signed in"),
    ),
    tag = "configuration"
)]
pub async fn toggle_option(
    _customer: SignedInCustomer,
    state: web::Data<AppState>,
    body: web::Json<ToggleRequest>,
) -> Result<HttpResponse, AppError> {
    let ToggleRequest { set, value } = body.into_inner();
    let probe = match set {
        SetField::Connectivity => ConfigUpdate::AddConnectivity(value.clone()),
        SetField::SmartTech => ConfigUpdate::AddSmartTech(value.clone()),
    };
    catalog::validate_update(&probe).map_err(AppError::BadRequest)?;

    let config = state.configurator()?.toggle(set, &value).clone();
    Ok(HttpResponse::Ok().json(config))
}

/// POST /configuration/reset
#[utoipa::path(
    post,
    path = "/configuration/reset",
    responses(
        (status = 200, description = "Default configuration", body = CarConfiguration),
        (status = 401, description = "No customer signed in"),
    ),
    tag = "configuration"
)]
pub async fn reset_configuration(
    _customer: SignedInCustomer,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let config = {
        let mut store = state.configurator()?;
        store.reset();
        store.snapshot()
    };
    Ok(HttpResponse::Ok().json(config))
}

/// GET /configuration/steps
#[utoipa::path(
    get,
    path = "/configuration/steps",
    responses(
        (status = 200, description = "Wizard steps in order", body = [StepResponse]),
    ),
    tag = "configuration"
)]
pub async fn list_steps() -> HttpResponse {
    let steps: Vec<StepResponse> = WizardStep::ALL
        .into_iter()
        .map(|step| StepResponse {
            number: step.number(),
            step,
            title: step.title().to_string(),
        })
        .collect();
    HttpResponse::Ok().json(steps)
}

/// GET /configuration/quote
///
/// Price the current configuration would be submitted at.
#[utoipa::path(
    get,
    path = "/configuration/quote",
    responses(
        (status = 200, description = "Price quote", body = QuoteResponse),
        (status = 401, description = "No customer signed in"),
    ),
    tag = "configuration"
)]
pub async fn quote(
    _customer: SignedInCustomer,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let config = state.configurator()?.snapshot();
    let label = budget_label(config.budget);
    let total_price = pricing::total_price(&config);

    Ok(HttpResponse::Ok().json(QuoteResponse {
        budget_label: label,
        total_price,
    }))
}

/// POST /configuration/submit
///
/// Submits the current configuration as a design owned by the signed-in
/// customer. The configuration itself stays as it is.
#[utoipa::path(
    post,
    path = "/configuration/submit",
    responses(
        (status = 201, description = "Design submitted", body = DesignResponse),
        (status = 401, description = "No customer signed in"),
    ),
    tag = "configuration"
)]
pub async fn submit_configuration(
    customer: SignedInCustomer,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let SignedInCustomer(customer) = customer;

    let design = web::block(move || {
        let config = state.configurator()?.snapshot();
        let design = state.designs()?.submit_design(&customer, &config)?;
        Ok::<_, AppError>(design)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(DesignResponse::from(design)))
}
