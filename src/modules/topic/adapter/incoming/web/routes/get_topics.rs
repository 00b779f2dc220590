use actix_web::{get, web, HttpResponse, Responder};
use tracing::{debug, error};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::{domain::entities::Topic, ports::incoming::use_cases::GetTopicsError},
    AppState,
};

/// List topics
///
/// Superusers see every topic; everyone else sees only their own. Oldest first.
#[utoipa::path(
    get,
    path = "/topics",
    tag = "topics",
    responses(
        (status = 200, description = "Visible topics", body = inline(SuccessResponse<Vec<Topic>>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/topics")]
pub async fn get_topics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.topic.get_list.execute(user.requester()).await {
        Ok(topics) => {
            debug!(user_id = %user.user_id, count = topics.len(), "Listed topics");
            ApiResponse::success(topics)
        }
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> HttpResponse {
    match err {
        GetTopicsError::QueryFailed(e) => {
            error!(error = %e, "Failed to list topics");
            ApiResponse::internal_error()
        }
    }
}
