use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::design::{CarDesign, CustomerSummary, DesignFilter, DesignStats, DesignStatus};
use crate::errors::AppError;
use crate::export;
use crate::state::AppState;

use super::session::SignedInAdmin;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub budget: String,
    pub engine_type: String,
    pub transmission: String,
    pub tyres: String,
    pub wheels: String,
    pub exhaust_type: String,
    pub body_style: String,
    pub exterior_color: String,
    pub interior_layout: String,
    pub features: Vec<String>,
    pub status: DesignStatus,
    pub submitted_at: String,
    pub total_price: i64,
}

impl From<CarDesign> for DesignResponse {
    fn from(d: CarDesign) -> Self {
        Self {
            id: d.id,
            customer_id: d.customer_id,
            customer_name: d.customer_name,
            customer_email: d.customer_email,
            budget: d.budget,
            engine_type: d.engine_type,
            transmission: d.transmission,
            tyres: d.tyres,
            wheels: d.wheels,
            exhaust_type: d.exhaust_type,
            body_style: d.body_style,
            exterior_color: d.exterior_color,
            interior_layout: d.interior_layout,
            features: d.features,
            status: d.status,
            submitted_at: d.submitted_at.to_rfc3339(),
            total_price: d.total_price,
        }
    }
}

fn to_responses(designs: Vec<CarDesign>) -> Vec<DesignResponse> {
    designs.into_iter().map(DesignResponse::from).collect()
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummaryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub total_designs: usize,
    pub last_active: String,
}

impl From<CustomerSummary> for CustomerSummaryResponse {
    fn from(c: CustomerSummary) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            total_designs: c.total_designs,
            last_active: c.last_active.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    pub status: DesignStatus,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DesignListParams {
    /// Matches customer name, engine type or body style, ignoring case.
    pub search: Option<String>,
    /// "Under Review", "In Progress", "Approved" or "all".
    pub status: Option<String>,
    /// Exact budget label, or "all".
    pub budget: Option<String>,
}

impl DesignListParams {
    fn into_filter(self) -> Result<DesignFilter, AppError> {
        let status = match self.status.as_deref() {
            None | Some("") | Some("all") => None,
            Some(s) => Some(s.parse::<DesignStatus>()?),
        };
        let budget = self.budget.filter(|b| !b.is_empty() && b != "all");
        Ok(DesignFilter {
            search: self.search,
            status,
            budget,
        })
    }
}

/// Reloads the stored list and applies `filter` to it.
async fn load_filtered(
    state: web::Data<AppState>,
    filter: DesignFilter,
) -> Result<Vec<CarDesign>, AppError> {
    web::block(move || {
        let mut designs = state.designs()?;
        designs.all_designs()?;
        Ok::<_, AppError>(designs.filtered(&filter))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /designs
///
/// Returns every stored design matching the filters, in submission order.
#[utoipa::path(
    get,
    path = "/designs",
    params(DesignListParams),
    responses(
        (status = 200, description = "Matching designs", body = [DesignResponse]),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "No admin signed in"),
    ),
    tag = "designs"
)]
pub async fn list_designs(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
    query: web::Query<DesignListParams>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let designs = load_filtered(state, filter).await?;
    Ok(HttpResponse::Ok().json(to_responses(designs)))
}

/// GET /designs/stats
#[utoipa::path(
    get,
    path = "/designs/stats",
    responses(
        (status = 200, description = "Design counts per status", body = DesignStats),
        (status = 401, description = "No admin signed in"),
    ),
    tag = "designs"
)]
pub async fn design_stats(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stats = web::block(move || {
        let mut designs = state.designs()?;
        designs.all_designs()?;
        Ok::<_, AppError>(designs.stats())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(stats))
}

/// GET /designs/customers
///
/// Customers derived from the design list, with design counts and the time
/// of their latest submission.
#[utoipa::path(
    get,
    path = "/designs/customers",
    responses(
        (status = 200, description = "Customer activity", body = [CustomerSummaryResponse]),
        (status = 401, description = "No admin signed in"),
    ),
    tag = "designs"
)]
pub async fn list_customers(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let summaries = web::block(move || {
        let mut designs = state.designs()?;
        designs.all_designs()?;
        Ok::<_, AppError>(designs.customer_summaries())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<CustomerSummaryResponse> = summaries
        .into_iter()
        .map(CustomerSummaryResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /designs/export
///
/// Downloads the filtered list as CSV.
#[utoipa::path(
    get,
    path = "/designs/export",
    params(DesignListParams),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 401, description = "No admin signed in"),
    ),
    tag = "designs"
)]
pub async fn export_designs(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
    query: web::Query<DesignListParams>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let designs = load_filtered(state, filter).await?;
    let csv = export::designs_to_csv(&designs)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export::CSV_FILE_NAME),
        ))
        .body(csv))
}

/// GET /designs/{id}
#[utoipa::path(
    get,
    path = "/designs/{id}",
    params(
        ("id" = i64, Path, description = "Design id"),
    ),
    responses(
        (status = 200, description = "Design found", body = DesignResponse),
        (status = 404, description = "Design not found"),
    ),
    tag = "designs"
)]
pub async fn get_design(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let design = web::block(move || {
        let mut designs = state.designs()?;
        designs.all_designs()?;
        Ok::<_, AppError>(designs.find(id).cloned())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    match design {
        Some(design) => Ok(HttpResponse::Ok().json(DesignResponse::from(design))),
        None => Err(AppError::NotFound),
    }
}

/// PATCH /designs/{id}/status
///
/// Always answers 204: an unknown id is ignored, matching the delete endpoint.
#[utoipa::path(
    patch,
    path = "/designs/{id}/status",
    params(
        ("id" = i64, Path, description = "Design id"),
    ),
    request_body = StatusUpdateRequest,
    responses(
        (status = 204, description = "Status recorded (or id unknown)"),
        (status = 401, description = "No admin signed in"),
    ),
    tag = "designs"
)]
pub async fn update_design_status(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<StatusUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let status = body.into_inner().status;

    web::block(move || {
        let mut designs = state.designs()?;
        designs.update_design_status(id, status)?;
        Ok::<_, AppError>(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /designs/{id}
#[utoipa::path(
    delete,
    path = "/designs/{id}",
    params(
        ("id" = i64, Path, description = "Design id"),
    ),
    responses(
        (status = 204, description = "Design removed (or id unknown)"),
        (status = 401, description = "No admin signed in"),
    ),
    tag = "designs"
)]
pub async fn delete_design(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || {
        let mut designs = state.designs()?;
        designs.delete_design(id)?;
        Ok::<_, AppError>(())
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /customers/{id}/designs
#[utoipa::path(
    get,
    path = "/customers/{id}/designs",
    params(
        ("id" = i64, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Designs submitted by the customer", body = [DesignResponse]),
        (status = 401, description = "No admin signed in"),
    ),
    tag = "designs"
)]
pub async fn customer_designs(
    _admin: SignedInAdmin,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    let designs = web::block(move || {
        let mut designs = state.designs()?;
        designs.all_designs()?;
        Ok::<_, AppError>(designs.designs_by_customer(customer_id))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(to_responses(designs)))
}
