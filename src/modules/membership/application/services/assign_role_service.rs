use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::group::application::ports::outgoing::GroupQuery;
use crate::membership::application::domain::entities::{
    RoleAssignment, SocietyRole, SocietyUserRole,
};
use crate::membership::application::helpers::SocietyAccess;
use crate::membership::application::ports::{
    incoming::use_cases::{AssignRoleCommand, AssignRoleError, AssignRoleUseCase},
    outgoing::SocietyRoleRepository,
};
use crate::society::application::ports::outgoing::SocietyQuery;

#[derive(Clone)]
pub struct AssignRoleService<S, G, R>
where
    S: SocietyQuery + Send + Sync,
    G: GroupQuery + Send + Sync,
    R: SocietyRoleRepository + Send + Sync,
{
    access: SocietyAccess,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    society_query: S,
    group_query: G,
    repository: R,
}

impl<S, G, R> AssignRoleService<S, G, R>
where
    S: SocietyQuery + Send + Sync,
    G: GroupQuery + Send + Sync,
    R: SocietyRoleRepository + Send + Sync,
{
    pub fn new(
        access: SocietyAccess,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        society_query: S,
        group_query: G,
        repository: R,
    ) -> Self {
        Self {
            access,
            user_query,
            society_query,
            group_query,
            repository,
        }
    }

    async fn ensure_group_in_society(
        &self,
        command: &AssignRoleCommand,
    ) -> Result<(), AssignRoleError> {
        let Some(group_id) = command.group_id() else {
            return Ok(());
        };

        let group = self
            .group_query
            .find_by_id(group_id)
            .await
            .map_err(|e| AssignRoleError::RepositoryError(e.to_string()))?;

        match group {
            Some(group) if group.belongs_to(command.society_id()) => Ok(()),
            _ => Err(AssignRoleError::GroupNotInSociety(group_id)),
        }
    }
}

#[async_trait]
impl<S, G, R> AssignRoleUseCase for AssignRoleService<S, G, R>
where
    S: SocietyQuery + Send + Sync,
    G: GroupQuery + Send + Sync,
    R: SocietyRoleRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AssignRoleCommand,
    ) -> Result<SocietyUserRole, AssignRoleError> {
        let society = self
            .society_query
            .find_by_id(command.society_id())
            .await
            .map_err(|e| AssignRoleError::RepositoryError(e.to_string()))?
            .ok_or(AssignRoleError::SocietyNotFound)?;

        if society.status.is_deleted() {
            return Err(AssignRoleError::SocietyDeleted);
        }

        let standing = self
            .access
            .require_any(command.actor(), society.id, &[SocietyRole::President])
            .await?;

        if command.role() == SocietyRole::President && !standing.is_super_admin() {
            tracing::warn!(
                actor_id = %command.actor(),
                society_id = %society.id,
                "Only a SuperAdmin may grant PRESIDENT"
            );
            return Err(AssignRoleError::Forbidden);
        }

        self.user_query
            .find_by_id(command.user_id().value())
            .await
            .map_err(|e| AssignRoleError::RepositoryError(e.to_string()))?
            .ok_or(AssignRoleError::UserNotFound)?;

        self.ensure_group_in_society(&command).await?;

        let assignment = RoleAssignment {
            name: command.name().to_string(),
            user_id: command.user_id(),
            society_id: society.id,
            role: command.role(),
            group_id: command.group_id(),
            assigned_by: command.actor(),
        };

        self.repository
            .upsert(assignment)
            .await
            .map_err(|e| AssignRoleError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{User, UserId, UserRole};
    use crate::auth::application::helpers::PlatformAccess;
    use crate::group::application::ports::outgoing::{GroupRepository, NewGroup};
    use crate::society::application::domain::entities::SocietyStatus;
    use crate::tests::support::group_fixtures::InMemoryGroups;
    use crate::tests::support::membership_fixtures::{assignment, InMemoryRoles};
    use crate::tests::support::society_fixtures::{sample_society, InMemorySocieties};
    use crate::tests::support::stubs::{sample_user, InMemoryUsers};
    use uuid::Uuid;

    type Service = AssignRoleService<InMemorySocieties, InMemoryGroups, InMemoryRoles>;

    struct Setup {
        service: Service,
        roles: InMemoryRoles,
        groups: InMemoryGroups,
        actor: User,
        target: User,
        society_id: Uuid,
    }

    fn setup(platform_role: UserRole, society_status: SocietyStatus) -> Setup {
        let users = InMemoryUsers::default();
        let mut actor = sample_user();
        actor.role = platform_role;
        let mut target = sample_user();
        target.name = "Grace Hopper".to_string();
        users.insert(actor.clone());
        users.insert(target.clone());

        let societies = InMemorySocieties::default();
        let society = sample_society("Robotics", society_status);
        let society_id = society.id;
        societies.insert_society(society);

        let roles = InMemoryRoles::default();
        let groups = InMemoryGroups::default();
        let access = SocietyAccess::new(
            PlatformAccess::new(Arc::new(users.clone())),
            Arc::new(roles.clone()),
        );

        Setup {
            service: AssignRoleService::new(
                access,
                Arc::new(users),
                societies,
                groups.clone(),
                roles.clone(),
            ),
            roles,
            groups,
            actor,
            target,
            society_id,
        }
    }

    fn command(s: &Setup, role: Option<&str>, group_id: Option<Uuid>) -> AssignRoleCommand {
        AssignRoleCommand::new(
            s.actor.id,
            s.society_id,
            s.target.id,
            s.target.name.clone(),
            role,
            group_id,
        )
        .unwrap()
    }

    async fn add_group(groups: &InMemoryGroups, society_id: Uuid) -> Uuid {
        groups
            .create(NewGroup {
                user_id: UserId::from(Uuid::new_v4()),
                society_id,
                name: "Hardware".to_string(),
                description: None,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn president_assigns_member_by_default() {
        let s = setup(UserRole::Member, SocietyStatus::Active);
        s.roles
            .insert(assignment(s.actor.id, s.society_id, SocietyRole::President));

        let role = s.service.execute(command(&s, None, None)).await.unwrap();

        assert_eq!(role.role, SocietyRole::Member);
        assert_eq!(role.assigned_by, s.actor.id);
        assert_eq!(role.name, "Grace Hopper");
    }

    #[tokio::test]
    async fn repeat_assignment_updates_in_place() {
        let s = setup(UserRole::Member, SocietyStatus::Active);
        s.roles
            .insert(assignment(s.actor.id, s.society_id, SocietyRole::President));

        let first = s.service.execute(command(&s, None, None)).await.unwrap();
        let second = s
            .service
            .execute(command(&s, Some("GENERAL SECRETARY"), None))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.role, SocietyRole::GeneralSecretary);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(s.roles.len(), 2);
    }

    #[tokio::test]
    async fn president_cannot_grant_president() {
        let s = setup(UserRole::Member, SocietyStatus::Active);
        s.roles
            .insert(assignment(s.actor.id, s.society_id, SocietyRole::President));

        let result = s.service.execute(command(&s, Some("PRESIDENT"), None)).await;

        assert_eq!(result.unwrap_err(), AssignRoleError::Forbidden);
    }

    #[tokio::test]
    async fn super_admin_grants_president() {
        let s = setup(UserRole::SuperAdmin, SocietyStatus::Suspended);

        let role = s
            .service
            .execute(command(&s, Some("PRESIDENT"), None))
            .await
            .unwrap();

        assert_eq!(role.role, SocietyRole::President);
    }

    #[tokio::test]
    async fn lead_cannot_assign_roles() {
        let s = setup(UserRole::Member, SocietyStatus::Active);
        s.roles
            .insert(assignment(s.actor.id, s.society_id, SocietyRole::Lead));

        let result = s.service.execute(command(&s, Some("MEMBER"), None)).await;

        assert_eq!(result.unwrap_err(), AssignRoleError::Forbidden);
    }

    #[tokio::test]
    async fn group_of_other_society_is_rejected() {
        let s = setup(UserRole::SuperAdmin, SocietyStatus::Active);
        let foreign = add_group(&s.groups, Uuid::new_v4()).await;

        let result = s.service.execute(command(&s, None, Some(foreign))).await;

        assert_eq!(
            result.unwrap_err(),
            AssignRoleError::GroupNotInSociety(foreign)
        );
        assert_eq!(s.roles.len(), 0);
    }

    #[tokio::test]
    async fn group_of_same_society_is_kept() {
        let s = setup(UserRole::SuperAdmin, SocietyStatus::Active);
        let group_id = add_group(&s.groups, s.society_id).await;

        let role = s
            .service
            .execute(command(&s, Some("LEAD"), Some(group_id)))
            .await
            .unwrap();

        assert_eq!(role.group_id, Some(group_id));
    }

    #[tokio::test]
    async fn deleted_society_is_rejected() {
        let s = setup(UserRole::SuperAdmin, SocietyStatus::Deleted);

        let result = s.service.execute(command(&s, None, None)).await;

        assert_eq!(result.unwrap_err(), AssignRoleError::SocietyDeleted);
    }

    #[tokio::test]
    async fn unknown_target_user_is_not_found() {
        let s = setup(UserRole::SuperAdmin, SocietyStatus::Active);
        let cmd = AssignRoleCommand::new(
            s.actor.id,
            s.society_id,
            UserId::from(Uuid::new_v4()),
            "Ghost".to_string(),
            None,
            None,
        )
        .unwrap();

        let result = s.service.execute(cmd).await;

        assert_eq!(result.unwrap_err(), AssignRoleError::UserNotFound);
    }
}
