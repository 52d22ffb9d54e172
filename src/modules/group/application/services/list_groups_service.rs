use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::domain::entities::Group;
use crate::group::application::ports::{
    incoming::use_cases::{ListGroupsError, ListGroupsUseCase},
    outgoing::GroupQuery,
};
use crate::society::application::ports::outgoing::SocietyQuery;

#[derive(Debug, Clone)]
pub struct ListGroupsService<S, G>
where
    S: SocietyQuery + Send + Sync,
    G: GroupQuery + Send + Sync,
{
    society_query: S,
    group_query: G,
}

impl<S, G> ListGroupsService<S, G>
where
    S: SocietyQuery + Send + Sync,
    G: GroupQuery + Send + Sync,
{
    pub fn new(society_query: S, group_query: G) -> Self {
        Self {
            society_query,
            group_query,
        }
    }
}

#[async_trait]
impl<S, G> ListGroupsUseCase for ListGroupsService<S, G>
where
    S: SocietyQuery + Send + Sync,
    G: GroupQuery + Send + Sync,
{
    async fn execute(&self, society_id: Uuid) -> Result<Vec<Group>, ListGroupsError> {
        self.society_query
            .find_by_id(society_id)
            .await
            .map_err(|e| ListGroupsError::RepositoryError(e.to_string()))?
            .ok_or(ListGroupsError::SocietyNotFound)?;

        self.group_query
            .list_by_society(society_id)
            .await
            .map_err(|e| ListGroupsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::group::application::ports::outgoing::{GroupRepository, NewGroup};
    use crate::society::application::domain::entities::SocietyStatus;
    use crate::tests::support::group_fixtures::InMemoryGroups;
    use crate::tests::support::society_fixtures::{sample_society, InMemorySocieties};

    #[tokio::test]
    async fn lists_only_the_society_groups_by_name() {
        let societies = InMemorySocieties::default();
        let society = sample_society("Robotics", SocietyStatus::Active);
        let society_id = society.id;
        societies.insert_society(society);

        let groups = InMemoryGroups::default();
        for (society, name) in [
            (society_id, "Software"),
            (Uuid::new_v4(), "Elsewhere"),
            (society_id, "Hardware"),
        ] {
            groups
                .create(NewGroup {
                    user_id: UserId::from(Uuid::new_v4()),
                    society_id: society,
                    name: name.to_string(),
                    description: None,
                })
                .await
                .unwrap();
        }

        let service = ListGroupsService::new(societies, groups);
        let listed = service.execute(society_id).await.unwrap();

        let names: Vec<_> = listed.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Hardware", "Software"]);
    }

    #[tokio::test]
    async fn unknown_society_is_not_found() {
        let service =
            ListGroupsService::new(InMemorySocieties::default(), InMemoryGroups::default());

        let result = service.execute(Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err(), ListGroupsError::SocietyNotFound);
    }
}
