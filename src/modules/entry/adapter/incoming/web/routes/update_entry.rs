use actix_web::{route, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    entry::application::domain::entry_form::EntryForm,
    shared::api::ApiResponse,
    AppState,
};

use super::edit_entry_form::{map_edit_entry_error, EditEntryView};

/// Update an entry
///
/// Accepted as PUT or as POST. On success redirects to the parent topic.
#[utoipa::path(
    method(put, post),
    path = "/entries/{entry_id}",
    tag = "entries",
    params(("entry_id" = Uuid, Path, description = "Entry id")),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Updated; Location: /topics/{topic_id}"),
        (status = 400, description = "Form errors", body = EditEntryView),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "No such entry", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[route("/entries/{entry_id}", method = "PUT", method = "POST")]
pub async fn update_entry_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<EntryForm>,
) -> impl Responder {
    let entry_id = path.into_inner();
    let form = body.into_inner();

    match data
        .entry
        .edit
        .execute(user.requester(), entry_id, form.clone())
        .await
    {
        Ok(entry) => {
            info!(entry_id = %entry.id, topic_id = %entry.topic_id, "Entry updated");
            ApiResponse::see_other(&format!("/topics/{}", entry.topic_id))
        }
        Err(err) => map_edit_entry_error(err, entry_id, form.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, App};

    use crate::{
        auth::application::domain::entities::UserId,
        tests::support::{
            app_state_builder::TestAppStateBuilder, in_memory::InMemoryStore,
            stubs::FakeTokenProvider,
        },
    };

    async fn send_update(
        store: &InMemoryStore,
        req: test::TestRequest,
        entry_id: Uuid,
        user: UserId,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store.clone()).build())
                .app_data(FakeTokenProvider::data())
                .app_data(crate::shared::api::custom_json_config())
                .service(update_entry_handler),
        )
        .await;

        let req = req
            .uri(&format!("/entries/{entry_id}"))
            .insert_header(FakeTokenProvider::bearer(user.value(), false))
            .set_json(&body)
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_update_entry_via_put_and_post() {
        let store = InMemoryStore::default();
        let owner = UserId::from(Uuid::new_v4());
        let topic = store.insert_topic(owner, "Chess");
        let entry = store.insert_entry(topic.id, "Opened with e4");

        let resp = send_update(
            &store,
            test::TestRequest::put(),
            entry.id,
            owner,
            serde_json::json!({ "text": "Opened with d4" }),
        )
        .await;
        assert_eq!(resp.status(), 303);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            format!("/topics/{}", topic.id).as_str()
        );
        assert_eq!(store.entry(entry.id).unwrap().text, "Opened with d4");

        let resp = send_update(
            &store,
            test::TestRequest::post(),
            entry.id,
            owner,
            serde_json::json!({ "text": "Opened with c4" }),
        )
        .await;
        assert_eq!(resp.status(), 303);

        let updated = store.entry(entry.id).unwrap();
        assert_eq!(updated.text, "Opened with c4");
        assert_eq!(updated.topic_id, topic.id);
        assert_eq!(updated.date_added, entry.date_added);
    }

    #[actix_web::test]
    async fn test_update_entry_blank_text_keeps_entry() {
        let store = InMemoryStore::default();
        let owner = UserId::from(Uuid::new_v4());
        let topic = store.insert_topic(owner, "Chess");
        let entry = store.insert_entry(topic.id, "Opened with e4");

        let resp = send_update(
            &store,
            test::TestRequest::put(),
            entry.id,
            owner,
            serde_json::json!({ "text": "" }),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["entry"]["text"], "Opened with e4");
        assert!(body["data"]["form"]["errors"]["text"].is_array());
        assert_eq!(store.entry(entry.id).unwrap().text, "Opened with e4");
    }

    #[actix_web::test]
    async fn test_update_entry_of_other_account_is_not_found() {
        let store = InMemoryStore::default();
        let topic = store.insert_topic(UserId::from(Uuid::new_v4()), "Chess");
        let entry = store.insert_entry(topic.id, "Opened with e4");

        let resp = send_update(
            &store,
            test::TestRequest::put(),
            entry.id,
            UserId::from(Uuid::new_v4()),
            serde_json::json!({ "text": "Vandalised" }),
        )
        .await;

        assert_eq!(resp.status(), 404);
        assert_eq!(store.entry(entry.id).unwrap().text, "Opened with e4");
    }
}
