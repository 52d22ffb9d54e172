use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RegisterUserRequest, SetUserStatusRequest, UpdateUserRequest, UserResponse,
};
use crate::email::adapter::incoming::web::routes::{
    BulkEmailResponse, FailedDeliveryResponse, SendBulkEmailBody,
};
use crate::group::adapter::incoming::web::routes::{CreateGroupBody, GroupResponse};
use crate::membership::adapter::incoming::web::routes::{AssignRoleBody, SocietyRoleResponse};
use crate::society::adapter::incoming::web::routes::{
    ApprovalResponse, CreateSocietyRequestBody, RejectSocietyRequestBody, SetSocietyStatusBody,
    SocietyRequestResponse, SocietyResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Society Portal API",
        version = "1.0.0",
        description = "Accounts, societies, groups, role assignments and member mailings",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::update_user_handler,
        crate::auth::adapter::incoming::web::routes::set_user_status_handler,

        // Society endpoints
        crate::society::adapter::incoming::web::routes::create_society_request_handler,
        crate::society::adapter::incoming::web::routes::approve_society_request_handler,
        crate::society::adapter::incoming::web::routes::reject_society_request_handler,
        crate::society::adapter::incoming::web::routes::set_society_status_handler,

        // Group endpoints
        crate::group::adapter::incoming::web::routes::create_group_handler,
        crate::group::adapter::incoming::web::routes::list_groups_handler,

        // Membership endpoints
        crate::membership::adapter::incoming::web::routes::assign_role_handler,
        crate::membership::adapter::incoming::web::routes::list_roles_handler,

        // Email endpoints
        crate::email::adapter::incoming::web::routes::send_bulk_email_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            UpdateUserRequest,
            SetUserStatusRequest,
            UserResponse,

            // Society DTOs
            CreateSocietyRequestBody,
            RejectSocietyRequestBody,
            SetSocietyStatusBody,
            SocietyRequestResponse,
            SocietyResponse,
            ApprovalResponse,

            // Group DTOs
            CreateGroupBody,
            GroupResponse,

            // Membership DTOs
            AssignRoleBody,
            SocietyRoleResponse,

            // Email DTOs
            SendBulkEmailBody,
            BulkEmailResponse,
            FailedDeliveryResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Profile and account status"),
        (name = "societies", description = "Society requests and lifecycle"),
        (name = "groups", description = "Sub-teams inside a society"),
        (name = "membership", description = "Per-society role assignments"),
        (name = "email", description = "Bulk mail to society members"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
