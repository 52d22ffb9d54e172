use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::responses::SocietyRequestResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::society::application::ports::incoming::use_cases::{
    CreateSocietyRequestCommand, CreateSocietyRequestError,
};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSocietyRequestBody {
    #[schema(example = "Chess Club")]
    pub society_name: String,
    #[schema(example = "Weekly blitz and puzzle nights")]
    pub description: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Ask for a new society to be created
#[utoipa::path(
    post,
    path = "/api/society-requests",
    tag = "societies",
    request_body = CreateSocietyRequestBody,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Request recorded as PENDING", body = inline(SuccessResponse<SocietyRequestResponse>)),
        (status = 400, description = "Missing society name", body = ErrorResponse),
        (status = 409, description = "Society name already in use", body = ErrorResponse),
    )
)]
#[post("/api/society-requests")]
pub async fn create_society_request_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateSocietyRequestBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreateSocietyRequestCommand::new(
        user.user_id,
        payload.society_name,
        payload.description,
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(user_id = %user.user_id, error = %err, "Invalid society request");
            return ApiResponse::domain_error(&err);
        }
    };

    match data.society.create_request.execute(command).await {
        Ok(request) => {
            info!(
                user_id = %user.user_id,
                request_id = %request.id,
                society_name = %request.society_name,
                "Society request created"
            );
            ApiResponse::created(SocietyRequestResponse::from(request))
        }
        Err(err) => map_create_request_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_request_error(err: CreateSocietyRequestError) -> HttpResponse {
    match err {
        CreateSocietyRequestError::DuplicateKey(name) => ApiResponse::conflict(
            "DUPLICATE_KEY",
            &format!("A society named '{}' already exists", name),
        ),
        CreateSocietyRequestError::RepositoryError(msg) => {
            error!(error = %msg, "Society request creation failed");
            ApiResponse::internal_error()
        }
    }
}
