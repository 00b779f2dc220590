use actix_web::{get, Responder};

use super::create_topic::TopicFormView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::{api::ApiResponse, form::FormErrors},
};

/// Blank topic form
#[utoipa::path(
    get,
    path = "/topics/new",
    tag = "topics",
    responses(
        (status = 200, description = "Empty form", body = inline(SuccessResponse<TopicFormView>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/topics/new")]
pub async fn new_topic_form_handler(_user: AuthenticatedUser) -> impl Responder {
    ApiResponse::success(TopicFormView {
        text: String::new(),
        errors: FormErrors::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::FakeTokenProvider;
    use actix_web::{test, App};
    use uuid::Uuid;

    #[actix_web::test]
    async fn test_new_topic_form_is_empty() {
        let app = test::init_service(
            App::new()
                .app_data(FakeTokenProvider::data())
                .service(new_topic_form_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/topics/new")
            .insert_header(FakeTokenProvider::bearer(Uuid::new_v4(), false))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["text"], "");
        assert_eq!(body["data"]["errors"], serde_json::json!({}));
    }
}
