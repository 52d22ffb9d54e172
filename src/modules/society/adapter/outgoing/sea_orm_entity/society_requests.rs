use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::domain::DomainError;
use crate::society::application::domain::entities::SocietyRequest;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "society_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub society_name: String,
    pub description: Option<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Requester,
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for SocietyRequest {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(SocietyRequest {
            id: model.id,
            user_id: UserId::from(model.user_id),
            society_name: model.society_name,
            description: model.description,
            status: model.status.parse()?,
            rejection_reason: model.rejection_reason,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::society::application::domain::entities::SocietyRequestStatus;

    fn model(status: &str) -> Model {
        let now = chrono::Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            society_name: "Chess Club".to_string(),
            description: None,
            status: status.to_string(),
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn maps_known_status() {
        let request = SocietyRequest::try_from(model("APPROVED")).unwrap();
        assert_eq!(request.status, SocietyRequestStatus::Approved);
    }

    #[test]
    fn unknown_status_fails_to_map() {
        let err = SocietyRequest::try_from(model("WITHDRAWN")).unwrap_err();
        assert_eq!(err, DomainError::invalid_enum("status", "WITHDRAWN"));
    }
}
