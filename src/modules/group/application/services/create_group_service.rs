use async_trait::async_trait;

use crate::group::application::domain::entities::Group;
use crate::group::application::ports::{
    incoming::use_cases::{CreateGroupCommand, CreateGroupError, CreateGroupUseCase},
    outgoing::{GroupRepository, GroupRepositoryError, NewGroup},
};
use crate::membership::application::domain::entities::SocietyRole;
use crate::membership::application::helpers::SocietyAccess;
use crate::society::application::ports::outgoing::SocietyQuery;

const GROUP_MANAGERS: [SocietyRole; 3] = [
    SocietyRole::President,
    SocietyRole::Lead,
    SocietyRole::GeneralSecretary,
];

#[derive(Clone)]
pub struct CreateGroupService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    access: SocietyAccess,
    society_query: Q,
    repository: R,
}

impl<Q, R> CreateGroupService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    pub fn new(access: SocietyAccess, society_query: Q, repository: R) -> Self {
        Self {
            access,
            society_query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> CreateGroupUseCase for CreateGroupService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, command: CreateGroupCommand) -> Result<Group, CreateGroupError> {
        let society = self
            .society_query
            .find_by_id(command.society_id())
            .await
            .map_err(|e| CreateGroupError::RepositoryError(e.to_string()))?
            .ok_or(CreateGroupError::SocietyNotFound)?;

        if society.status.is_deleted() {
            return Err(CreateGroupError::SocietyDeleted);
        }

        self.access
            .require_any(command.actor(), society.id, &GROUP_MANAGERS)
            .await?;

        let group = NewGroup {
            user_id: command.actor(),
            society_id: society.id,
            name: command.name().to_string(),
            description: command.description().map(str::to_string),
        };

        self.repository.create(group).await.map_err(|e| match e {
            GroupRepositoryError::DuplicateKey(name) => CreateGroupError::DuplicateKey(name),
            other => CreateGroupError::RepositoryError(other.to_string()),
        })
    }
}
