use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::society::application::domain::entities::{Society, SocietyRequest};
use crate::society::application::ports::outgoing::ApprovedSocietyRequest;

#[derive(Debug, Serialize, ToSchema)]
pub struct SocietyRequestResponse {
    #[schema(example = "5b1e3c1a-8d0e-4f43-9d7b-6c2f0c7f7a10")]
    pub id: String,
    pub user_id: String,
    #[schema(example = "Chess Club")]
    pub society_name: String,
    pub description: Option<String>,
    #[schema(example = "PENDING")]
    pub status: String,
    pub rejection_reason: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<SocietyRequest> for SocietyRequestResponse {
    fn from(request: SocietyRequest) -> Self {
        Self {
            id: request.id.to_string(),
            user_id: request.user_id.to_string(),
            society_name: request.society_name,
            description: request.description,
            status: request.status.as_str().to_string(),
            rejection_reason: request.rejection_reason,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocietyResponse {
    pub id: String,
    #[schema(example = "Chess Club")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "ACTIVE")]
    pub status: String,
    pub created_by: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Society> for SocietyResponse {
    fn from(society: Society) -> Self {
        Self {
            id: society.id.to_string(),
            name: society.name,
            description: society.description,
            status: society.status.as_str().to_string(),
            created_by: society.created_by.to_string(),
            created_at: society.created_at,
            updated_at: society.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApprovalResponse {
    pub request: SocietyRequestResponse,
    pub society: SocietyResponse,
    /// Id of the PRESIDENT assignment created for the requester
    pub president_role_id: String,
}

impl From<ApprovedSocietyRequest> for ApprovalResponse {
    fn from(approved: ApprovedSocietyRequest) -> Self {
        Self {
            president_role_id: approved.president.id.to_string(),
            request: approved.request.into(),
            society: approved.society.into(),
        }
    }
}
