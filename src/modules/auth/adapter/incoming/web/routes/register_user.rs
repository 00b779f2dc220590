use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::registration_form::RegistrationForm;
use crate::auth::application::use_cases::register_user::RegisterUserError;
use crate::shared::api::ApiResponse;
use crate::shared::form::FormErrors;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::login_user::LoginResponse;

/// Registration form redisplayed after a failed submission.
/// Password fields are never echoed.
#[derive(Serialize, ToSchema)]
pub struct RegistrationFormView {
    #[schema(example = "ada")]
    username: String,
    errors: FormErrors,
}

fn map_register_user_error(err: RegisterUserError, username: String) -> HttpResponse {
    match err {
        RegisterUserError::InvalidForm(errors) => {
            warn!(username = %username, "Invalid registration form");
            ApiResponse::invalid_form(RegistrationFormView {
                username: username.trim().to_string(),
                errors,
            })
        }

        RegisterUserError::HashingFailed(ref e) => {
            error!(error = %e, "Password hashing failed during registration");
            ApiResponse::internal_error()
        }

        RegisterUserError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed during registration");
            ApiResponse::internal_error()
        }

        RegisterUserError::RepositoryError(ref e) => {
            error!(username = %username, error = %e, "Repository error during registration");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new account
///
/// Creates a regular (non-superuser) account and logs it in.
#[utoipa::path(
    post,
    path = "/accounts/register",
    tag = "accounts",
    request_body = RegistrationForm,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 400,
            description = "Form errors",
            body = inline(SuccessResponse<RegistrationFormView>),
            example = json!({
                "success": false,
                "data": {
                    "username": "ada",
                    "errors": { "username": ["A user with that username already exists."] }
                },
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "The submitted form contains errors"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/accounts/register")]
pub async fn register_user_handler(
    req: web::Json<RegistrationForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = req.into_inner();
    let username = form.username.clone();

    match data.register_user_use_case.execute(form).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                username = %response.user.username,
                "Account registered"
            );
            ApiResponse::created(LoginResponse::from(response))
        }
        Err(err) => map_register_user_error(err, username),
    }
}
