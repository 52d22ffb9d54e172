use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, RegisterUserCommand, RegisterUserCommandError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_response::UserResponse;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    /// 8 to 128 characters
    #[schema(example = "analytical-engine")]
    pub password: String,

    /// Platform role, defaults to `Member`. `SuperAdmin` is refused.
    #[schema(example = "Member")]
    pub role: Option<String>,

    /// Account status, defaults to `ACTIVE`.
    #[schema(example = "ACTIVE")]
    pub status: Option<String>,
}

fn map_command_error(err: RegisterUserCommandError, email: &str) -> HttpResponse {
    warn!(email = %email, error = %err, "Invalid registration input");

    match &err {
        RegisterUserCommandError::Domain(domain) => ApiResponse::domain_error(domain),
        RegisterUserCommandError::InvalidEmailFormat => {
            ApiResponse::bad_request("INVALID_EMAIL", &err.to_string())
        }
        RegisterUserCommandError::WeakPassword(_) => {
            ApiResponse::bad_request("INVALID_PASSWORD", &err.to_string())
        }
        RegisterUserCommandError::PrivilegedRole => {
            ApiResponse::forbidden("ROLE_NOT_ALLOWED", &err.to_string())
        }
    }
}

fn map_create_user_error(err: CreateUserError, email: &str) -> HttpResponse {
    match err {
        CreateUserError::DuplicateKey(_) => {
            warn!(email = %email, "Email already registered");
            ApiResponse::conflict("DUPLICATE_KEY", "A user with this email already exists")
        }
        CreateUserError::HashingFailed => {
            error!(email = %email, "Registration aborted: password hashing failed");
            ApiResponse::internal_error()
        }
        CreateUserError::RepositoryError(msg) => {
            error!(email = %email, error = %msg, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserResponse>)),
        (status = 400, description = "Validation error", body = ErrorResponse, example = json!({
            "success": false,
            "error": { "code": "INVALID_ENUM_VALUE", "message": "Invalid value 'BANNED' for field 'status'" }
        })),
        (status = 403, description = "Role cannot be self-assigned", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse, example = json!({
            "success": false,
            "error": { "code": "DUPLICATE_KEY", "message": "A user with this email already exists" }
        })),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.trim().to_lowercase();

    info!(email = %email, "User registration attempt");

    let command = match RegisterUserCommand::new(
        req.name,
        req.email,
        req.password,
        req.role,
        req.status,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err, &email),
    };

    match data.register_user_use_case.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "User created successfully");
            ApiResponse::created(UserResponse::from(user))
        }
        Err(err) => map_create_user_error(err, &email),
    }
}
