use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User};
use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_user(model: UserModel) -> Result<User, UserRepositoryError> {
        User::try_from(model).map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let now = chrono::Utc::now().fixed_offset();
        let email = user.email;

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(email.clone()),
            password_hash: Set(user.password_hash.into_inner()),
            status: Set(user.status.as_str().to_string()),
            role: Set(user.role.as_str().to_string()),
            email_verified: Set(false),
            is_active: Set(true),
            password_reset_required: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::DuplicateKey(email.clone());
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_user(inserted)
    }

    async fn save_user(&self, user: &User) -> Result<User, UserRepositoryError> {
        let existing = UserEntity::find_by_id(user.id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let hash_changed = existing.password_hash != user.password_hash.as_str();

        let mut active_user: UserActiveModel = existing.into();
        active_user.name = Set(user.name.clone());
        active_user.status = Set(user.status.as_str().to_string());
        active_user.role = Set(user.role.as_str().to_string());
        active_user.email_verified = Set(user.email_verified);
        active_user.is_active = Set(user.is_active);
        active_user.password_reset_required = Set(user.password_reset_required);
        if hash_changed {
            active_user.password_hash = Set(user.password_hash.as_str().to_string());
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Self::to_user(updated)
    }
}
