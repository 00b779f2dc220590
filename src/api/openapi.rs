use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, RegistrationFormView,
};
use crate::auth::application::domain::registration_form::RegistrationForm;
use crate::entry::adapter::incoming::web::routes::{EditEntryView, EntryFormView, NewEntryView};
use crate::entry::application::domain::{entities::Entry, entry_form::EntryForm};
use crate::home::HomeView;
use crate::shared::form::FormErrors;
use crate::topic::adapter::incoming::web::routes::TopicFormView;
use crate::topic::application::domain::{entities::Topic, topic_form::TopicForm};
use crate::topic::application::ports::incoming::use_cases::TopicDetail;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learning Log API",
        version = "1.0.0",
        description = "Topics you are learning about, and dated entries for each"
    ),
    paths(
        crate::home::home_handler,

        // Account endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,

        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::new_topic_form::new_topic_form_handler,
        crate::topic::adapter::incoming::web::routes::create_topic::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::get_topic::get_topic_handler,

        // Entry endpoints
        crate::entry::adapter::incoming::web::routes::new_entry_form::new_entry_form_handler,
        crate::entry::adapter::incoming::web::routes::create_entry::create_entry_handler,
        crate::entry::adapter::incoming::web::routes::edit_entry_form::edit_entry_form_handler,
        crate::entry::adapter::incoming::web::routes::update_entry::update_entry_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            FormErrors,
            HomeView,

            // Account DTOs
            RegistrationForm,
            RegistrationFormView,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,

            // Topic DTOs
            Topic,
            TopicForm,
            TopicFormView,
            TopicDetail,

            // Entry DTOs
            Entry,
            EntryForm,
            EntryFormView,
            NewEntryView,
            EditEntryView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "home", description = "Landing page"),
        (name = "accounts", description = "Registration and login"),
        (name = "topics", description = "Topic endpoints"),
        (name = "entries", description = "Entry endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /accounts/login or /accounts/register"))
                        .build(),
                ),
            )
        }
    }
}
