use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{GetTopicError, TopicDetail},
    AppState,
};

/// Topic detail
///
/// The topic and its entries, newest entry first. A topic the caller may not
/// see is reported exactly like a missing one.
#[utoipa::path(
    get,
    path = "/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic with entries", body = inline(SuccessResponse<TopicDetail>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "No such topic", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/topics/{topic_id}")]
pub async fn get_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data
        .topic
        .get_single
        .execute(user.requester(), topic_id)
        .await
    {
        Ok(detail) => ApiResponse::success(detail),
        Err(err) => map_get_topic_error(err, topic_id),
    }
}

pub(crate) fn topic_not_found() -> HttpResponse {
    ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
}

fn map_get_topic_error(err: GetTopicError, topic_id: Uuid) -> HttpResponse {
    match err {
        GetTopicError::TopicNotFound => topic_not_found(),
        GetTopicError::QueryFailed(e) => {
            error!(topic_id = %topic_id, error = %e, "Failed to load topic");
            ApiResponse::internal_error()
        }
    }
}
