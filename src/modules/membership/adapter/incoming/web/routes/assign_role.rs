use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::responses::SocietyRoleResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::membership::application::ports::incoming::use_cases::{
    AssignRoleCommand, AssignRoleError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignRoleBody {
    pub user_id: Uuid,
    #[schema(example = "Grace Hopper")]
    pub name: String,
    /// PRESIDENT, LEAD, CO-LEAD, GENERAL SECRETARY or MEMBER. Defaults to MEMBER.
    #[schema(example = "LEAD")]
    pub role: Option<String>,
    pub group_id: Option<Uuid>,
}

/// Assign or change a member's role in a society
#[utoipa::path(
    post,
    path = "/api/societies/{id}/roles",
    tag = "membership",
    params(("id" = Uuid, Path, description = "Society id")),
    request_body = AssignRoleBody,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Role assigned", body = inline(SuccessResponse<SocietyRoleResponse>)),
        (status = 400, description = "Invalid role or group", body = ErrorResponse),
        (status = 403, description = "Caller may not assign this role", body = ErrorResponse),
        (status = 404, description = "Society or user not found", body = ErrorResponse),
        (status = 409, description = "Society is deleted", body = ErrorResponse),
    )
)]
#[post("/api/societies/{id}/roles")]
pub async fn assign_role_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<AssignRoleBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let society_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match AssignRoleCommand::new(
        user.user_id,
        society_id,
        UserId::from(payload.user_id),
        payload.name,
        payload.role.as_deref(),
        payload.group_id,
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(society_id = %society_id, error = %err, "Invalid role assignment");
            return ApiResponse::domain_error(&err);
        }
    };

    match data.membership.assign_role.execute(command).await {
        Ok(role) => {
            info!(
                actor_id = %user.user_id,
                society_id = %society_id,
                member_id = %role.user_id,
                role = %role.role,
                "Society role assigned"
            );
            ApiResponse::success(SocietyRoleResponse::from(role))
        }
        Err(err) => map_assign_error(err),
    }
}

fn map_assign_error(err: AssignRoleError) -> HttpResponse {
    match err {
        AssignRoleError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to assign this role")
        }
        AssignRoleError::SocietyNotFound => {
            ApiResponse::not_found("SOCIETY_NOT_FOUND", "Society not found")
        }
        AssignRoleError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        AssignRoleError::SocietyDeleted => {
            ApiResponse::conflict("SOCIETY_DELETED", "Society is deleted")
        }
        AssignRoleError::GroupNotInSociety(_) => {
            ApiResponse::bad_request("GROUP_NOT_IN_SOCIETY", &err.to_string())
        }
        AssignRoleError::RepositoryError(msg) => {
            error!(error = %msg, "Role assignment failed");
            ApiResponse::internal_error()
        }
    }
}
