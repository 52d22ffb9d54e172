use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::responses::SocietyResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::society::application::ports::incoming::use_cases::{
    SetSocietyStatusCommand, SetSocietyStatusError,
};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetSocietyStatusBody {
    /// One of ACTIVE, SUSPENDED, DELETED
    #[schema(example = "SUSPENDED")]
    pub status: String,
}

/// Change a society's status (SuperAdmin only)
#[utoipa::path(
    patch,
    path = "/api/societies/{id}/status",
    tag = "societies",
    params(("id" = Uuid, Path, description = "Society id")),
    request_body = SetSocietyStatusBody,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status changed", body = inline(SuccessResponse<SocietyResponse>)),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 403, description = "Caller is not a SuperAdmin", body = ErrorResponse),
        (status = 404, description = "Society not found", body = ErrorResponse),
        (status = 409, description = "Society is DELETED", body = ErrorResponse),
    )
)]
#[patch("/api/societies/{id}/status")]
pub async fn set_society_status_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<SetSocietyStatusBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let society_id = path.into_inner();

    let command = match SetSocietyStatusCommand::new(user.user_id, society_id, &payload.status) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(society_id = %society_id, error = %err, "Rejected society status");
            return ApiResponse::domain_error(&err);
        }
    };

    match data.society.set_status.execute(command).await {
        Ok(society) => {
            info!(
                actor_id = %user.user_id,
                society_id = %society.id,
                status = %society.status,
                "Society status changed"
            );
            ApiResponse::success(SocietyResponse::from(society))
        }
        Err(err) => map_set_status_error(err),
    }
}

fn map_set_status_error(err: SetSocietyStatusError) -> HttpResponse {
    match err {
        SetSocietyStatusError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "SuperAdmin privilege required")
        }
        SetSocietyStatusError::SocietyNotFound => {
            ApiResponse::not_found("SOCIETY_NOT_FOUND", "Society not found")
        }
        SetSocietyStatusError::InvalidTransition(domain) => ApiResponse::domain_error(&domain),
        SetSocietyStatusError::RepositoryError(msg) => {
            error!(error = %msg, "Society status change failed");
            ApiResponse::internal_error()
        }
    }
}
