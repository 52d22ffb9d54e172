use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::responses::GroupResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupCommand, CreateGroupError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupBody {
    #[schema(example = "Hardware")]
    pub name: String,
    pub description: Option<String>,
}

/// Create a group inside a society
#[utoipa::path(
    post,
    path = "/api/societies/{id}/groups",
    tag = "groups",
    params(("id" = Uuid, Path, description = "Society id")),
    request_body = CreateGroupBody,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Group created", body = inline(SuccessResponse<GroupResponse>)),
        (status = 400, description = "Missing group name", body = ErrorResponse),
        (status = 403, description = "Caller may not manage groups in this society", body = ErrorResponse),
        (status = 404, description = "Society not found", body = ErrorResponse),
        (status = 409, description = "Society deleted or group name taken", body = ErrorResponse),
    )
)]
#[post("/api/societies/{id}/groups")]
pub async fn create_group_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<CreateGroupBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let society_id = path.into_inner();
    let payload = payload.into_inner();

    let command =
        match CreateGroupCommand::new(user.user_id, society_id, payload.name, payload.description)
        {
            Ok(cmd) => cmd,
            Err(err) => {
                warn!(society_id = %society_id, error = %err, "Invalid group");
                return ApiResponse::domain_error(&err);
            }
        };

    match data.group.create.execute(command).await {
        Ok(group) => {
            info!(
                actor_id = %user.user_id,
                society_id = %society_id,
                group_id = %group.id,
                "Group created"
            );
            ApiResponse::created(GroupResponse::from(group))
        }
        Err(err) => map_create_group_error(err),
    }
}

fn map_create_group_error(err: CreateGroupError) -> HttpResponse {
    match err {
        CreateGroupError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "PRESIDENT, LEAD or GENERAL SECRETARY role required",
        ),
        CreateGroupError::SocietyNotFound => {
            ApiResponse::not_found("SOCIETY_NOT_FOUND", "Society not found")
        }
        CreateGroupError::SocietyDeleted => {
            ApiResponse::conflict("SOCIETY_DELETED", "Society is deleted")
        }
        CreateGroupError::DuplicateKey(_) => ApiResponse::conflict("DUPLICATE_KEY", &err.to_string()),
        CreateGroupError::RepositoryError(msg) => {
            error!(error = %msg, "Group creation failed");
            ApiResponse::internal_error()
        }
    }
}
