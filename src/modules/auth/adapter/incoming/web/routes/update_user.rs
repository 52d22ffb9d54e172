use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::update_user::{
    UpdateUserCommand, UpdateUserCommandError, UpdateUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_response::UserResponse;

#[derive(Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "Ada King")]
    pub name: Option<String>,

    /// Omit to keep the current password
    pub password: Option<String>,
}

fn map_command_error(err: UpdateUserCommandError) -> HttpResponse {
    match &err {
        UpdateUserCommandError::Domain(domain) => ApiResponse::domain_error(domain),
        UpdateUserCommandError::WeakPassword(_) => {
            ApiResponse::bad_request("INVALID_PASSWORD", &err.to_string())
        }
    }
}

/// Update the caller's profile or password
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = "users",
    request_body = UpdateUserRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User updated", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Account disabled", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/users/me")]
pub async fn update_user_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match UpdateUserCommand::new(user.user_id, req.name, req.password) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(user_id = %user.user_id, error = %err, "Invalid user update");
            return map_command_error(err);
        }
    };
    let changes_password = command.changes_password();

    match data.update_user_use_case.execute(command).await {
        Ok(updated) => {
            info!(user_id = %updated.id, changes_password, "User updated");
            ApiResponse::success(UserResponse::from(updated))
        }
        Err(UpdateUserError::AccountDisabled) => {
            warn!(user_id = %user.user_id, "Update refused for disabled account");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account is disabled")
        }
        Err(UpdateUserError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Update for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(err) => {
            error!(user_id = %user.user_id, error = %err, "User update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::use_cases::update_user::IUpdateUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data, StubTokenProvider};
    use crate::tests::support::stubs::sample_user;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockUpdateUser {
        result: Result<(), UpdateUserError>,
    }

    #[async_trait]
    impl IUpdateUserUseCase for MockUpdateUser {
        async fn execute(&self, command: UpdateUserCommand) -> Result<User, UpdateUserError> {
            self.result.clone()?;
            let mut user = sample_user();
            user.id = command.user_id();
            user.name = "Renamed".to_string();
            Ok(user)
        }
    }

    async fn call(
        result: Result<(), UpdateUserError>,
        payload: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_update_user(MockUpdateUser { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid()))
                .service(update_user_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/users/me")
            .insert_header(bearer())
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn update_name_succeeds() {
        let (status, body) = call(Ok(()), serde_json::json!({ "name": "Renamed" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["name"], "Renamed");
        assert_eq!(
            body["data"]["id"],
            StubTokenProvider::DEFAULT_USER_ID.to_string()
        );
    }

    #[actix_web::test]
    async fn weak_password_is_rejected_before_use_case() {
        let (status, body) = call(
            Err(UpdateUserError::HashingFailed),
            serde_json::json!({ "password": "short" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "INVALID_PASSWORD");
    }

    #[actix_web::test]
    async fn hashing_failure_is_internal_error() {
        let (status, _) = call(
            Err(UpdateUserError::HashingFailed),
            serde_json::json!({ "password": "long-enough-secret" }),
        )
        .await;

        assert_eq!(status, 500);
    }

    #[actix_web::test]
    async fn disabled_account_is_forbidden() {
        let (status, body) = call(
            Err(UpdateUserError::AccountDisabled),
            serde_json::json!({ "name": "Renamed" }),
        )
        .await;

        assert_eq!(status, 403);
        assert_eq!(body["error"]["code"], "ACCOUNT_DISABLED");
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data(StubTokenProvider::valid()))
                .service(update_user_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/users/me")
            .set_json(serde_json::json!({ "name": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
