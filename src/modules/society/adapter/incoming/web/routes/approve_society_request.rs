use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::responses::ApprovalResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::society::application::ports::incoming::use_cases::{
    ApproveSocietyRequestCommand, ApproveSocietyRequestError,
};
use crate::AppState;

/// Approve a pending society request (SuperAdmin only)
///
/// Creates the society and makes the requester its PRESIDENT.
#[utoipa::path(
    post,
    path = "/api/society-requests/{id}/approve",
    tag = "societies",
    params(("id" = Uuid, Path, description = "Society request id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Request approved", body = inline(SuccessResponse<ApprovalResponse>)),
        (status = 403, description = "Caller is not a SuperAdmin", body = ErrorResponse),
        (status = 404, description = "Request not found", body = ErrorResponse),
        (status = 409, description = "Already resolved or society name taken", body = ErrorResponse),
    )
)]
#[post("/api/society-requests/{id}/approve")]
pub async fn approve_society_request_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = ApproveSocietyRequestCommand {
        actor: user.user_id,
        request_id: path.into_inner(),
    };
    let request_id = command.request_id;

    match data.society.approve_request.execute(command).await {
        Ok(approved) => {
            info!(
                actor_id = %user.user_id,
                request_id = %request_id,
                society_id = %approved.society.id,
                "Society request approved"
            );
            ApiResponse::success(ApprovalResponse::from(approved))
        }
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "Society request approval refused");
            map_approve_error(err)
        }
    }
}

fn map_approve_error(err: ApproveSocietyRequestError) -> HttpResponse {
    match err {
        ApproveSocietyRequestError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "SuperAdmin privilege required")
        }
        ApproveSocietyRequestError::RequestNotFound => {
            ApiResponse::not_found("SOCIETY_REQUEST_NOT_FOUND", "Society request not found")
        }
        ApproveSocietyRequestError::AlreadyResolved(_) => {
            ApiResponse::conflict("ALREADY_RESOLVED", &err.to_string())
        }
        ApproveSocietyRequestError::DuplicateKey(_) => {
            ApiResponse::conflict("DUPLICATE_KEY", &err.to_string())
        }
        ApproveSocietyRequestError::RepositoryError(msg) => {
            error!(error = %msg, "Society request approval failed");
            ApiResponse::internal_error()
        }
    }
}
