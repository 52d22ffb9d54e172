use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::email::application::ports::incoming::use_cases::{
    BulkEmailReport, SendBulkEmailCommand, SendBulkEmailError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendBulkEmailBody {
    #[schema(example = "General meeting")]
    pub subject: String,
    /// HTML body
    #[schema(example = "<p>Friday, 6pm, room 101</p>")]
    pub body: String,
    /// Only email members holding this society role
    #[schema(example = "MEMBER")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FailedDeliveryResponse {
    pub email: String,
    pub reason: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkEmailResponse {
    pub sent: Vec<String>,
    pub failed: Vec<FailedDeliveryResponse>,
}

impl From<BulkEmailReport> for BulkEmailResponse {
    fn from(report: BulkEmailReport) -> Self {
        Self {
            sent: report.sent,
            failed: report
                .failed
                .into_iter()
                .map(|f| FailedDeliveryResponse {
                    email: f.email,
                    reason: f.reason,
                })
                .collect(),
        }
    }
}

/// Email the members of a society
#[utoipa::path(
    post,
    path = "/api/societies/{id}/emails",
    tag = "email",
    params(("id" = Uuid, Path, description = "Society id")),
    request_body = SendBulkEmailBody,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Batch finished; see sent and failed lists", body = inline(SuccessResponse<BulkEmailResponse>)),
        (status = 400, description = "Missing subject/body or unknown role", body = ErrorResponse),
        (status = 403, description = "Caller may not email this society", body = ErrorResponse),
        (status = 404, description = "Society not found", body = ErrorResponse),
        (status = 409, description = "Society is deleted", body = ErrorResponse),
    )
)]
#[post("/api/societies/{id}/emails")]
pub async fn send_bulk_email_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<SendBulkEmailBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let society_id = path.into_inner();
    let payload = payload.into_inner();

    let command = match SendBulkEmailCommand::new(
        user.user_id,
        society_id,
        payload.subject,
        payload.body,
        payload.role.as_deref(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            warn!(society_id = %society_id, error = %err, "Invalid bulk email");
            return ApiResponse::domain_error(&err);
        }
    };

    match data.email.send_bulk.execute(command).await {
        Ok(report) => {
            info!(
                actor_id = %user.user_id,
                society_id = %society_id,
                sent = report.sent.len(),
                failed = report.failed.len(),
                "Bulk email sent"
            );
            ApiResponse::success(BulkEmailResponse::from(report))
        }
        Err(err) => map_bulk_email_error(err),
    }
}

fn map_bulk_email_error(err: SendBulkEmailError) -> HttpResponse {
    match err {
        SendBulkEmailError::Forbidden => ApiResponse::forbidden(
            "FORBIDDEN",
            "PRESIDENT or GENERAL SECRETARY role required",
        ),
        SendBulkEmailError::SocietyNotFound => {
            ApiResponse::not_found("SOCIETY_NOT_FOUND", "Society not found")
        }
        SendBulkEmailError::SocietyDeleted => {
            ApiResponse::conflict("SOCIETY_DELETED", "Society is deleted")
        }
        SendBulkEmailError::RepositoryError(msg) => {
            error!(error = %msg, "Bulk email failed");
            ApiResponse::internal_error()
        }
    }
}
