use utoipa::OpenApi;

use crate::domain::configuration::{CarConfiguration, LogoUpload, SetField, WizardStep};
use crate::domain::design::{CustomerIdentity, DesignStats, DesignStatus};
use crate::handlers::auth::{LoginRequest, SessionResponse, SignUpRequest};
use crate::handlers::configuration::{QuoteResponse, StepResponse, ToggleRequest, UpdateFieldRequest};
use crate::handlers::designs::{CustomerSummaryResponse, DesignResponse, StatusUpdateRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::sign_up,
        crate::handlers::auth::login,
        crate::handlers::auth::admin_login,
        crate::handlers::auth::logout,
        crate::handlers::auth::current_session,
        crate::handlers::configuration::get_configuration,
        crate::handlers::configuration::update_configuration,
        crate::handlers::configuration::toggle_option,
        crate::handlers::configuration::reset_configuration,
        crate::handlers::configuration::list_steps,
        crate::handlers::configuration::quote,
        crate::handlers::configuration::submit_configuration,
        crate::handlers::designs::list_designs,
        crate::handlers::designs::design_stats,
        crate::handlers::designs::list_customers,
        crate::handlers::designs::export_designs,
        crate::handlers::designs::get_design,
        crate::handlers::designs::update_design_status,
        crate::handlers::designs::delete_design,
        crate::handlers::designs::customer_designs,
    ),
    components(
        schemas(
            CarConfiguration,
            LogoUpload,
            SetField,
            WizardStep,
            CustomerIdentity,
            DesignStatus,
            DesignStats,
            SignUpRequest,
            LoginRequest,
            SessionResponse,
            UpdateFieldRequest,
            ToggleRequest,
            StepResponse,
            QuoteResponse,
            DesignResponse,
            CustomerSummaryResponse,
            StatusUpdateRequest,
        )
    ),
    tags(
        (name = "auth", description = "Customer and admin sign-in"),
        (name = "configuration", description = "Step-by-step car configurator"),
        (name = "designs", description = "Submitted designs, reviewed by admins"),
    ),
    info(title = "Car Configurator API", version = "0.1.0")
)]
pub struct ApiDoc;
