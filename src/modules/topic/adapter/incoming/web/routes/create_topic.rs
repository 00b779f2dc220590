use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::{api::ApiResponse, form::FormErrors},
    topic::application::{
        domain::topic_form::TopicForm, ports::incoming::use_cases::CreateTopicError,
    },
    AppState,
};

/// Topic form as shown to the client: the current value plus any field errors.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicFormView {
    #[schema(example = "Chess")]
    pub text: String,
    pub errors: FormErrors,
}

fn map_create_topic_error(err: CreateTopicError, submitted: TopicForm) -> HttpResponse {
    match err {
        CreateTopicError::Validation(errors) => {
            warn!("Topic form rejected");
            ApiResponse::invalid_form(TopicFormView {
                text: submitted.text,
                errors,
            })
        }
        CreateTopicError::RepositoryError(e) => {
            error!(error = %e, "Failed to create topic");
            ApiResponse::internal_error()
        }
    }
}

/// Create a topic
///
/// On success redirects to the topic list.
#[utoipa::path(
    post,
    path = "/topics",
    tag = "topics",
    request_body = TopicForm,
    responses(
        (status = 303, description = "Created; Location: /topics"),
        (status = 400, description = "Form errors", body = TopicFormView),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    body: web::Json<TopicForm>,
) -> impl Responder {
    let form = body.into_inner();

    match data.topic.create.execute(user.user_id, form.clone()).await {
        Ok(topic) => {
            info!(topic_id = %topic.id, owner = %topic.owner, "Topic created");
            ApiResponse::see_other("/topics")
        }
        Err(err) => map_create_topic_error(err, form),
    }
}
