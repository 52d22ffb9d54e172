use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned by `ApiResponse::success` and `ApiResponse::created`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// `true` on success
    #[schema(example = true)]
    pub success: bool,
    /// Payload of the operation
    pub data: T,
}

/// Envelope returned for every 4xx and 5xx answer
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// `false` on failure
    #[schema(example = false)]
    pub success: bool,
    /// Machine-readable code plus message
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code such as `DUPLICATE_KEY` or `INVALID_ENUM_VALUE`
    #[schema(example = "SOCIETY_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Society not found")]
    pub message: String,
}
