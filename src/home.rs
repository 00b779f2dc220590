use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{api::schemas::SuccessResponse, shared::api::ApiResponse};

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeView {
    #[schema(example = "Learning Log")]
    pub name: String,
    pub description: String,
}

/// Landing page
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "Landing view", body = inline(SuccessResponse<HomeView>)),
    )
)]
#[get("/")]
pub async fn home_handler() -> impl Responder {
    ApiResponse::success(HomeView {
        name: "Learning Log".to_string(),
        description: "Keep a log of the topics you are learning about, one dated entry at a time."
            .to_string(),
    })
}
