use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::responses::SocietyRequestResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::society::application::ports::incoming::use_cases::{
    RejectSocietyRequestCommand, RejectSocietyRequestError,
};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectSocietyRequestBody {
    /// Required, must not be blank
    #[schema(example = "A society with the same purpose already exists")]
    pub rejection_reason: Option<String>,
}

/// Reject a pending society request (SuperAdmin only)
#[utoipa::path(
    post,
    path = "/api/society-requests/{id}/reject",
    tag = "societies",
    params(("id" = Uuid, Path, description = "Society request id")),
    request_body = RejectSocietyRequestBody,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Request rejected", body = inline(SuccessResponse<SocietyRequestResponse>)),
        (status = 400, description = "Missing rejection reason", body = ErrorResponse, example = json!({
            "success": false,
            "error": { "code": "MISSING_REQUIRED_FIELD", "message": "Missing required field 'rejection_reason'" }
        })),
        (status = 403, description = "Caller is not a SuperAdmin", body = ErrorResponse),
        (status = 404, description = "Request not found", body = ErrorResponse),
        (status = 409, description = "Request already resolved", body = ErrorResponse),
    )
)]
#[post("/api/society-requests/{id}/reject")]
pub async fn reject_society_request_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<RejectSocietyRequestBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request_id = path.into_inner();

    let command = match RejectSocietyRequestCommand::new(
        user.user_id,
        request_id,
        payload.into_inner().rejection_reason,
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(request_id = %request_id, error = %err, "Rejection without reason");
            return ApiResponse::domain_error(&err);
        }
    };

    match data.society.reject_request.execute(command).await {
        Ok(request) => {
            info!(actor_id = %user.user_id, request_id = %request.id, "Society request rejected");
            ApiResponse::success(SocietyRequestResponse::from(request))
        }
        Err(err) => map_reject_error(err),
    }
}

fn map_reject_error(err: RejectSocietyRequestError) -> HttpResponse {
    match err {
        RejectSocietyRequestError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "SuperAdmin privilege required")
        }
        RejectSocietyRequestError::RequestNotFound => {
            ApiResponse::not_found("SOCIETY_REQUEST_NOT_FOUND", "Society request not found")
        }
        RejectSocietyRequestError::AlreadyResolved(_) => {
            ApiResponse::conflict("ALREADY_RESOLVED", &err.to_string())
        }
        RejectSocietyRequestError::RepositoryError(msg) => {
            error!(error = %msg, "Society request rejection failed");
            ApiResponse::internal_error()
        }
    }
}
