use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::set_user_status::{
    SetUserStatusCommand, SetUserStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::user_response::UserResponse;

#[derive(Deserialize, ToSchema)]
pub struct SetUserStatusRequest {
    /// One of ACTIVE, INACTIVE, SUSPENDED, IMPORTED
    #[schema(example = "SUSPENDED")]
    pub status: String,
}

/// Change a user's account status (SuperAdmin only)
#[utoipa::path(
    patch,
    path = "/api/users/{id}/status",
    tag = "users",
    params(("id" = Uuid, Path, description = "Target user id")),
    request_body = SetUserStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status changed", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 403, description = "Caller is not a SuperAdmin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[patch("/api/users/{id}/status")]
pub async fn set_user_status_handler(
    actor: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SetUserStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = UserId::from(path.into_inner());

    let command = match SetUserStatusCommand::new(actor.user_id, target, &req.status) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(target_id = %target, error = %err, "Rejected user status change");
            return ApiResponse::domain_error(&err);
        }
    };
    let status = command.status();

    match data.set_user_status_use_case.execute(command).await {
        Ok(user) => {
            info!(
                actor_id = %actor.user_id,
                target_id = %user.id,
                status = %status,
                "User status changed"
            );
            ApiResponse::success(UserResponse::from(user))
        }
        Err(SetUserStatusError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "SuperAdmin privilege required")
        }
        Err(SetUserStatusError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SetUserStatusError::RepositoryError(msg)) => {
            error!(target_id = %target, error = %msg, "User status change failed");
            ApiResponse::internal_error()
        }
    }
}
