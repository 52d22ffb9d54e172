use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::responses::SocietyRoleResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::ListRolesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the role assignments of a society
#[utoipa::path(
    get,
    path = "/api/societies/{id}/roles",
    tag = "membership",
    params(("id" = Uuid, Path, description = "Society id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Role assignments", body = inline(SuccessResponse<Vec<SocietyRoleResponse>>)),
        (status = 404, description = "Society not found", body = ErrorResponse),
    )
)]
#[get("/api/societies/{id}/roles")]
pub async fn list_roles_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let society_id = path.into_inner();

    match data.membership.list_roles.execute(society_id).await {
        Ok(roles) => ApiResponse::success(
            roles
                .into_iter()
                .map(SocietyRoleResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListRolesError::SocietyNotFound) => {
            ApiResponse::not_found("SOCIETY_NOT_FOUND", "Society not found")
        }
        Err(ListRolesError::RepositoryError(msg)) => {
            error!(society_id = %society_id, error = %msg, "Role listing failed");
            ApiResponse::internal_error()
        }
    }
}
