use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::email::application::ports::outgoing::{
    Recipient, RecipientQuery, RecipientQueryError,
};
use crate::membership::adapter::outgoing::sea_orm_entity::society_user_roles::{
    Column as RoleColumn, Entity as RoleEntity,
};
use crate::membership::application::domain::entities::SocietyRole;

#[derive(Clone, Debug)]
pub struct RecipientQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipientQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipientQuery for RecipientQueryPostgres {
    async fn society_recipients(
        &self,
        society_id: Uuid,
        role: Option<SocietyRole>,
    ) -> Result<Vec<Recipient>, RecipientQueryError> {
        let mut roles = RoleEntity::find().filter(RoleColumn::SocietyId.eq(society_id));
        if let Some(role) = role {
            roles = roles.filter(RoleColumn::Role.eq(role.as_str()));
        }

        let assignments = roles
            .order_by_asc(RoleColumn::AssignedAt)
            .all(&*self.db)
            .await
            .map_err(|e| RecipientQueryError::DatabaseError(e.to_string()))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<Uuid> = assignments.iter().map(|a| a.user_id).collect();
        let emails: HashMap<Uuid, String> = UserEntity::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(|e| RecipientQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|u| (u.id, u.email))
            .collect();

        Ok(assignments
            .into_iter()
            .filter_map(|a| {
                emails.get(&a.user_id).map(|email| Recipient {
                    user_id: UserId::from(a.user_id),
                    name: a.name,
                    email: email.clone(),
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use crate::membership::adapter::outgoing::sea_orm_entity::society_user_roles::Model as RoleModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn role_row(user_id: Uuid, society_id: Uuid, role: &str) -> RoleModel {
        let now = Utc::now().fixed_offset();
        RoleModel {
            id: Uuid::new_v4(),
            name: "Member".to_string(),
            user_id,
            society_id,
            role: role.to_string(),
            group_id: None,
            assigned_by: Uuid::new_v4(),
            assigned_at: now,
            updated_at: now,
        }
    }

    fn user_row(id: Uuid, email: &str) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            name: "Member".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            status: "ACTIVE".to_string(),
            role: "Member".to_string(),
            email_verified: true,
            is_active: true,
            password_reset_required: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn joins_assignments_to_user_emails() {
        let society_id = Uuid::new_v4();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![
                    role_row(a, society_id, "LEAD"),
                    role_row(b, society_id, "LEAD"),
                ]])
                .append_query_results(vec![vec![
                    user_row(a, "a@example.com"),
                    user_row(b, "b@example.com"),
                ]])
                .into_connection(),
        );

        let query = RecipientQueryPostgres::new(db.clone());
        let recipients = query
            .society_recipients(society_id, Some(SocietyRole::Lead))
            .await
            .unwrap();

        assert_eq!(recipients.len(), 2);
        assert_eq!(recipients[0].email, "a@example.com");
        assert_eq!(recipients[1].user_id, UserId::from(b));

        drop(query);
        let log = format!(
            "{:?}",
            Arc::try_unwrap(db)
                .expect("query dropped")
                .into_transaction_log()
        );
        assert!(log.contains("LEAD"));
    }

    #[tokio::test]
    async fn empty_society_skips_user_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<RoleModel>::new()])
            .into_connection();

        let query = RecipientQueryPostgres::new(Arc::new(db));
        let recipients = query
            .society_recipients(Uuid::new_v4(), None)
            .await
            .unwrap();

        assert!(recipients.is_empty());
    }
}
