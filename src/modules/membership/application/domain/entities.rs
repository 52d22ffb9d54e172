use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::DomainError;

/// Role held by a user inside one society.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocietyRole {
    President,
    Lead,
    #[serde(rename = "CO-LEAD")]
    CoLead,
    #[serde(rename = "GENERAL SECRETARY")]
    GeneralSecretary,
    #[default]
    Member,
}

impl SocietyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocietyRole::President => "PRESIDENT",
            SocietyRole::Lead => "LEAD",
            SocietyRole::CoLead => "CO-LEAD",
            SocietyRole::GeneralSecretary => "GENERAL SECRETARY",
            SocietyRole::Member => "MEMBER",
        }
    }

    pub fn is_officer(&self) -> bool {
        !matches!(self, SocietyRole::Member)
    }

    /// Parses an optional client value, falling back to `MEMBER`.
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map(str::parse).transpose().map(Option::unwrap_or_default)
    }
}

impl FromStr for SocietyRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRESIDENT" => Ok(SocietyRole::President),
            "LEAD" => Ok(SocietyRole::Lead),
            "CO-LEAD" => Ok(SocietyRole::CoLead),
            "GENERAL SECRETARY" => Ok(SocietyRole::GeneralSecretary),
            "MEMBER" => Ok(SocietyRole::Member),
            other => Err(DomainError::invalid_enum("role", other)),
        }
    }
}

impl fmt::Display for SocietyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SocietyUserRole {
    pub id: Uuid,
    pub name: String,
    pub user_id: UserId,
    pub society_id: Uuid,
    pub role: SocietyRole,
    pub group_id: Option<Uuid>,
    pub assigned_by: UserId,
    pub assigned_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write model for an assignment. The store keeps one row per
/// `(user_id, society_id)` and updates it in place on a repeat.
#[derive(Debug, Clone)]
pub struct RoleAssignment {
    pub name: String,
    pub user_id: UserId,
    pub society_id: Uuid,
    pub role: SocietyRole,
    pub group_id: Option<Uuid>,
    pub assigned_by: UserId,
}
