use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::membership::application::domain::entities::SocietyUserRole;
use crate::shared::domain::DomainError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "society_user_roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub society_id: Uuid,
    pub role: String,
    pub group_id: Option<Uuid>,
    pub assigned_by: Uuid,
    pub assigned_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "crate::society::adapter::outgoing::sea_orm_entity::societies::Entity",
        from = "Column::SocietyId",
        to = "crate::society::adapter::outgoing::sea_orm_entity::societies::Column::Id"
    )]
    Society,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }

        Ok(self)
    }
}

impl TryFrom<Model> for SocietyUserRole {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(SocietyUserRole {
            id: model.id,
            name: model.name,
            user_id: UserId::from(model.user_id),
            society_id: model.society_id,
            role: model.role.parse()?,
            group_id: model.group_id,
            assigned_by: UserId::from(model.assigned_by),
            assigned_at: model.assigned_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
