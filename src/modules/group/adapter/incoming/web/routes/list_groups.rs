use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::responses::GroupResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::group::application::ports::incoming::use_cases::ListGroupsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the groups of a society, ordered by name
#[utoipa::path(
    get,
    path = "/api/societies/{id}/groups",
    tag = "groups",
    params(("id" = Uuid, Path, description = "Society id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Groups of the society", body = inline(SuccessResponse<Vec<GroupResponse>>)),
        (status = 404, description = "Society not found", body = ErrorResponse),
    )
)]
#[get("/api/societies/{id}/groups")]
pub async fn list_groups_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let society_id = path.into_inner();

    match data.group.list.execute(society_id).await {
        Ok(groups) => ApiResponse::success(
            groups
                .into_iter()
                .map(GroupResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListGroupsError::SocietyNotFound) => {
            ApiResponse::not_found("SOCIETY_NOT_FOUND", "Society not found")
        }
        Err(ListGroupsError::RepositoryError(msg)) => {
            error!(society_id = %society_id, error = %msg, "Group listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::application::domain::entities::Group;
    use crate::group::application::ports::incoming::use_cases::ListGroupsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data, StubTokenProvider};
    use crate::tests::support::group_fixtures::sample_group;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockListGroups {
        found: bool,
    }

    #[async_trait]
    impl ListGroupsUseCase for MockListGroups {
        async fn execute(&self, society_id: Uuid) -> Result<Vec<Group>, ListGroupsError> {
            if !self.found {
                return Err(ListGroupsError::SocietyNotFound);
            }
            Ok(vec![
                sample_group(society_id, "Hardware"),
                sample_group(society_id, "Software"),
            ])
        }
    }

    async fn call(found: bool) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_list_groups(MockListGroups { found })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid()))
                .service(list_groups_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/societies/{}/groups", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_groups_in_order() {
        let (status, json) = call(true).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["name"], "Hardware");
        assert_eq!(json["data"][1]["name"], "Software");
    }

    #[actix_web::test]
    async fn unknown_society_is_not_found() {
        let (status, json) = call(false).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "SOCIETY_NOT_FOUND");
    }
}
