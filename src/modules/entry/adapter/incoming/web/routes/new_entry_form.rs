use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::{api::ApiResponse, form::FormErrors},
    topic::application::domain::entities::Topic,
    AppState,
};

use super::create_entry::map_create_entry_error;

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryFormView {
    #[schema(example = "Opened with e4")]
    pub text: String,
    pub errors: FormErrors,
}

impl EntryFormView {
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            errors: FormErrors::new(),
        }
    }
}

/// The form for a new entry, with the topic it will belong to.
#[derive(Debug, Serialize, ToSchema)]
pub struct NewEntryView {
    pub topic: Topic,
    pub form: EntryFormView,
}

/// Blank entry form
#[utoipa::path(
    get,
    path = "/topics/{topic_id}/entries/new",
    tag = "entries",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Blank form", body = inline(SuccessResponse<NewEntryView>)),
        (status = 404, description = "No such topic", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/topics/{topic_id}/entries/new")]
pub async fn new_entry_form_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.entry.create.prepare(topic_id).await {
        Ok(topic) => ApiResponse::success(NewEntryView {
            topic,
            form: EntryFormView::blank(),
        }),
        Err(err) => map_create_entry_error(err, topic_id, String::new()),
    }
}
