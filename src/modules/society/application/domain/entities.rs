use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::DomainError;

//
// ──────────────────────────────────────────────────────────
// Society
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocietyStatus {
    #[default]
    Active,
    Suspended,
    Deleted,
}

impl SocietyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocietyStatus::Active => "ACTIVE",
            SocietyStatus::Suspended => "SUSPENDED",
            SocietyStatus::Deleted => "DELETED",
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, SocietyStatus::Deleted)
    }

    /// `DELETED` is terminal; every other move is allowed.
    pub fn transition_to(self, next: SocietyStatus) -> Result<SocietyStatus, DomainError> {
        if self.is_deleted() {
            return Err(DomainError::InvalidTransition {
                entity: "Society",
                from: self.as_str(),
                to: next.as_str(),
            });
        }
        Ok(next)
    }
}

impl FromStr for SocietyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(SocietyStatus::Active),
            "SUSPENDED" => Ok(SocietyStatus::Suspended),
            "DELETED" => Ok(SocietyStatus::Deleted),
            other => Err(DomainError::invalid_enum("status", other)),
        }
    }
}

impl fmt::Display for SocietyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Society {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: SocietyStatus,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Society Request
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocietyRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SocietyRequestTransitionError {
    #[error("Society request is already {0}")]
    AlreadyResolved(SocietyRequestStatus),
}

impl SocietyRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocietyRequestStatus::Pending => "PENDING",
            SocietyRequestStatus::Approved => "APPROVED",
            SocietyRequestStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SocietyRequestStatus::Pending)
    }

    pub fn transition(
        self,
        decision: &SocietyRequestDecision,
    ) -> Result<SocietyRequestStatus, SocietyRequestTransitionError> {
        if self.is_resolved() {
            return Err(SocietyRequestTransitionError::AlreadyResolved(self));
        }

        Ok(match decision {
            SocietyRequestDecision::Approve => SocietyRequestStatus::Approved,
            SocietyRequestDecision::Reject { .. } => SocietyRequestStatus::Rejected,
        })
    }
}

impl FromStr for SocietyRequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(SocietyRequestStatus::Pending),
            "APPROVED" => Ok(SocietyRequestStatus::Approved),
            "REJECTED" => Ok(SocietyRequestStatus::Rejected),
            other => Err(DomainError::invalid_enum("status", other)),
        }
    }
}

impl fmt::Display for SocietyRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome an administrator applies to a pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocietyRequestDecision {
    Approve,
    Reject { reason: String },
}

impl SocietyRequestDecision {
    /// A rejection must carry a non-blank reason.
    pub fn reject(reason: Option<String>) -> Result<Self, DomainError> {
        match reason.map(|r| r.trim().to_string()) {
            Some(reason) if !reason.is_empty() => Ok(SocietyRequestDecision::Reject { reason }),
            _ => Err(DomainError::MissingRequiredField("rejection_reason")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SocietyRequest {
    pub id: Uuid,
    pub user_id: UserId,
    pub society_name: String,
    pub description: Option<String>,
    pub status: SocietyRequestStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
