use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "analytical-engine")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed session token, valid for seven days
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    #[schema(value_type = String, format = DateTime)]
    expires_at: DateTime<Utc>,

    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "Ada Lovelace")]
    name: String,

    #[schema(example = "ada@example.com")]
    email: String,

    #[schema(example = "Member")]
    role: String,

    #[schema(example = "ACTIVE")]
    status: String,

    password_reset_required: bool,
}

/// User login
///
/// Exchanges email and password for a session token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse, example = json!({
            "success": false,
            "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
        })),
        (status = 403, description = "Account disabled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let request = match LoginRequest::new(req.email, req.password) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "Rejected login request");
            return ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string());
        }
    };

    let email = request.email().to_string();
    info!(email = %email, "Login attempt");

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User logged in");
            ApiResponse::success(LoginResponse {
                token: response.token,
                expires_at: response.expires_at,
                user: LoginUserInfo {
                    id: response.user.id.to_string(),
                    name: response.user.name,
                    email: response.user.email,
                    role: response.user.role.as_str().to_string(),
                    status: response.user.status.as_str().to_string(),
                    password_reset_required: response.user.password_reset_required,
                },
            })
        }
        Err(LoginError::InvalidCredentials) => {
            warn!(email = %email, "Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginError::AccountDisabled) => {
            warn!(email = %email, "Login refused: account disabled");
            ApiResponse::forbidden("ACCOUNT_DISABLED", "This account is disabled")
        }
        Err(LoginError::IssuanceFailed(msg)) => {
            error!(email = %email, error = %msg, "Session token issuance failed");
            ApiResponse::internal_error()
        }
        Err(LoginError::QueryError(msg)) => {
            error!(email = %email, error = %msg, "Login lookup failed");
            ApiResponse::internal_error()
        }
    }
}
