use async_trait::async_trait;

use crate::society::application::domain::entities::SocietyRequest;
use crate::society::application::ports::{
    incoming::use_cases::{
        CreateSocietyRequestCommand, CreateSocietyRequestError, CreateSocietyRequestUseCase,
    },
    outgoing::{
        NewSocietyRequest, SocietyQuery, SocietyRequestRepository, SocietyRequestRepositoryError,
    },
};

#[derive(Debug, Clone)]
pub struct CreateSocietyRequestService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: SocietyRequestRepository + Send + Sync,
{
    society_query: Q,
    repository: R,
}

impl<Q, R> CreateSocietyRequestService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: SocietyRequestRepository + Send + Sync,
{
    pub fn new(society_query: Q, repository: R) -> Self {
        Self {
            society_query,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> CreateSocietyRequestUseCase for CreateSocietyRequestService<Q, R>
where
    Q: SocietyQuery + Send + Sync,
    R: SocietyRequestRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateSocietyRequestCommand,
    ) -> Result<SocietyRequest, CreateSocietyRequestError> {
        let name = command.society_name().to_string();

        let taken = self
            .society_query
            .live_name_exists(&name)
            .await
            .map_err(|e| CreateSocietyRequestError::RepositoryError(e.to_string()))?;
        if taken {
            return Err(CreateSocietyRequestError::DuplicateKey(name));
        }

        let data = NewSocietyRequest {
            user_id: command.requester(),
            society_name: name,
            description: command.description().map(str::to_string),
        };

        self.repository
            .create_request(data)
            .await
            .map_err(|e| match e {
                SocietyRequestRepositoryError::DuplicateKey(name) => {
                    CreateSocietyRequestError::DuplicateKey(name)
                }
                other => CreateSocietyRequestError::RepositoryError(other.to_string()),
            })
    }
}
