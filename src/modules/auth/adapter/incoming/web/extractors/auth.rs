use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::{
    domain::entities::{Requester, UserId},
    ports::outgoing::token_provider::{TokenProvider, ACCESS_TOKEN_TYPE},
};
use crate::shared::api::ApiResponse;

/// A caller holding a valid access token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_superuser: bool,
}

impl AuthenticatedUser {
    pub fn requester(&self) -> Requester {
        Requester::Account {
            user_id: self.user_id,
            is_superuser: self.is_superuser,
        }
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, HttpResponse> {
    let jwt_service = req
        .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        .ok_or_else(|| {
            tracing::error!("Token provider is not registered as app data");
            ApiResponse::internal_error()
        })?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        )
    })?;

    let claims = jwt_service.verify_token(&token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected bearer token");
        ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
    })?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        ));
    }

    Ok(AuthenticatedUser {
        user_id: UserId::from(claims.sub),
        is_superuser: claims.is_superuser,
    })
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(create_api_error))
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
