use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::domain::design::CustomerIdentity;
use crate::domain::ports::Session;
use crate::errors::AppError;
use crate::state::AppState;

/// The signed-in customer. Rejects admins and anonymous callers.
pub struct SignedInCustomer(pub CustomerIdentity);

/// The signed-in admin.
pub struct SignedInAdmin(pub CustomerIdentity);

impl FromRequest for SignedInCustomer {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            match load_session(state).await? {
                Some(session) if !session.is_admin => Ok(SignedInCustomer(session.user)),
                Some(_) => Err(AppError::Forbidden),
                None => Err(AppError::Unauthorized(
                    "sign in as a customer first".to_string(),
                )),
            }
        })
    }
}

impl FromRequest for SignedInAdmin {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            match load_session(state).await? {
                Some(session) if session.is_admin => Ok(SignedInAdmin(session.user)),
                Some(_) => Err(AppError::Forbidden),
                None => Err(AppError::Unauthorized("sign in as admin first".to_string())),
            }
        })
    }
}

pub(crate) async fn load_session(
    state: Option<web::Data<AppState>>,
) -> Result<Option<Session>, AppError> {
    let state =
        state.ok_or_else(|| AppError::Internal("application state not configured".to_string()))?;

    web::block(move || {
        let session = state.accounts()?.current_session()?;
        Ok::<_, AppError>(session)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))?
}
