use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    cascade::cascade_delete,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::delete_competition::{APIResponse, PathParams};
use herdbook_domain::{cascade::OwnerKind, Competition, ID};
use herdbook_infra::HerdbookContext;

pub async fn delete_competition_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteCompetitionUseCase {
        user_id: user.id,
        competition_id: path.competition_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|competition| HttpResponse::Ok().json(APIResponse::new(competition)))
        .map_err(HerdbookError::from)
}

/// Deletes the competition together with its reminders
#[derive(Debug)]
pub struct DeleteCompetitionUseCase {
    pub user_id: ID,
    pub competition_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Competition not found".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCompetitionUseCase {
    type Response = Competition;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCompetition";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        if ctx
            .repos
            .competitions
            .find(&self.competition_id, &self.user_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::NotFound);
        }

        cascade_delete(
            OwnerKind::Competition,
            &self.competition_id,
            &self.user_id,
            ctx,
        )
        .await
        .map_err(|_| UseCaseError::StorageError)?;

        ctx.repos
            .competitions
            .delete(&self.competition_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reminder::CreateCompetitionRemindersUseCase;
    use crate::shared::test_utils::{competition, setup_context_at};
    use herdbook_infra::ReminderQuery;

    #[actix_web::test]
    async fn removes_competition_reminders() {
        let ctx = setup_context_at(2025, 1, 1).await;
        let user_id = ID::new();
        let competition = competition(user_id, "Copa de Andalucía", "2025-06-01");
        ctx.repos.competitions.insert(&competition).await.unwrap();
        let mut create_reminders = CreateCompetitionRemindersUseCase {
            competition: &competition,
        };
        assert_eq!(create_reminders.execute(&ctx).await.unwrap().len(), 3);

        let mut usecase = DeleteCompetitionUseCase {
            user_id,
            competition_id: competition.id,
        };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx
            .repos
            .reminders
            .find_by(ReminderQuery::by_user(user_id))
            .await
            .unwrap()
            .is_empty());
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::NotFound);
    }
}
