use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    entry::application::{
        domain::entry_form::EntryForm, ports::incoming::use_cases::CreateEntryError,
    },
    shared::api::ApiResponse,
    topic::adapter::incoming::web::routes::get_topic::topic_not_found,
    AppState,
};

use super::new_entry_form::{EntryFormView, NewEntryView};

pub(super) fn map_create_entry_error(
    err: CreateEntryError,
    topic_id: Uuid,
    submitted_text: String,
) -> HttpResponse {
    match err {
        CreateEntryError::TopicNotFound => topic_not_found(),
        CreateEntryError::Validation { topic, errors } => {
            warn!(topic_id = %topic_id, "Entry form rejected");
            ApiResponse::invalid_form(NewEntryView {
                topic,
                form: EntryFormView {
                    text: submitted_text,
                    errors,
                },
            })
        }
        CreateEntryError::QueryFailed(e) | CreateEntryError::RepositoryError(e) => {
            error!(topic_id = %topic_id, error = %e, "Entry request failed");
            ApiResponse::internal_error()
        }
    }
}

/// Add an entry to a topic
///
/// Does not require a login and does not check who owns the topic.
/// On success redirects to the topic page.
#[utoipa::path(
    post,
    path = "/topics/{topic_id}/entries",
    tag = "entries",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Created; Location: /topics/{topic_id}"),
        (status = 400, description = "Form errors", body = NewEntryView),
        (status = 404, description = "No such topic", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/topics/{topic_id}/entries")]
pub async fn create_entry_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<EntryForm>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let form = body.into_inner();

    match data.entry.create.execute(topic_id, form.clone()).await {
        Ok(entry) => {
            info!(entry_id = %entry.id, topic_id = %topic_id, "Entry created");
            ApiResponse::see_other(&format!("/topics/{topic_id}"))
        }
        Err(err) => map_create_entry_error(err, topic_id, form.text),
    }
}
