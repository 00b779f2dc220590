use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    entry::application::{
        domain::entities::Entry, ports::incoming::use_cases::EditEntryError,
    },
    shared::api::ApiResponse,
    topic::application::domain::entities::Topic,
    AppState,
};

use super::new_entry_form::EntryFormView;

/// An entry, its topic and the edit form.
#[derive(Debug, Serialize, ToSchema)]
pub struct EditEntryView {
    pub entry: Entry,
    pub topic: Topic,
    pub form: EntryFormView,
}

pub(super) fn entry_not_found() -> HttpResponse {
    ApiResponse::not_found("ENTRY_NOT_FOUND", "Entry not found")
}

pub(super) fn map_edit_entry_error(
    err: EditEntryError,
    entry_id: Uuid,
    submitted_text: String,
) -> HttpResponse {
    match err {
        EditEntryError::EntryNotFound => entry_not_found(),
        EditEntryError::Validation { context, errors } => {
            warn!(entry_id = %entry_id, "Entry edit rejected");
            ApiResponse::invalid_form(EditEntryView {
                entry: context.entry,
                topic: context.topic,
                form: EntryFormView {
                    text: submitted_text,
                    errors,
                },
            })
        }
        EditEntryError::QueryFailed(e) | EditEntryError::RepositoryError(e) => {
            error!(entry_id = %entry_id, error = %e, "Entry edit failed");
            ApiResponse::internal_error()
        }
    }
}

/// Edit form for an entry
///
/// Pre-filled with the current text.
#[utoipa::path(
    get,
    path = "/entries/{entry_id}/edit",
    tag = "entries",
    params(("entry_id" = Uuid, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Pre-filled form", body = inline(SuccessResponse<EditEntryView>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "No such entry", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/entries/{entry_id}/edit")]
pub async fn edit_entry_form_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let entry_id = path.into_inner();

    match data.entry.edit.prepare(user.requester(), entry_id).await {
        Ok(context) => {
            let form = EntryFormView {
                text: context.entry.text.clone(),
                errors: Default::default(),
            };
            ApiResponse::success(EditEntryView {
                entry: context.entry,
                topic: context.topic,
                form,
            })
        }
        Err(err) => map_edit_entry_error(err, entry_id, String::new()),
    }
}
