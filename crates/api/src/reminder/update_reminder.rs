use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::update_reminder::{APIResponse, PathParams, RequestBody};
use herdbook_domain::{
    categories::{is_valid_interval, MAX_INTERVAL_DAYS},
    date::{parse_date, parse_time},
    Reminder, ID,
};
use herdbook_infra::HerdbookContext;

pub async fn update_reminder_controller(
    http_req: actix_web::HttpRequest,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = UpdateReminderUseCase {
        user_id: user.id,
        reminder_id: path.reminder_id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound,
    InvalidDate,
    InvalidTime,
    InvalidInterval(i64),
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Reminder not found".into()),
            UseCaseError::InvalidDate => {
                Self::BadClientData("Invalid date format. Use YYYY-MM-DD".into())
            }
            UseCaseError::InvalidTime => {
                Self::BadClientData("Invalid time format. Use HH:MM".into())
            }
            UseCaseError::InvalidInterval(days) => Self::BadClientData(format!(
                "interval_days must be between 1 and {} days, got: {}",
                MAX_INTERVAL_DAYS, days
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ctx
            .repos
            .reminders
            .find(&self.reminder_id, &self.user_id)
            .await
            .ok_or(UseCaseError::NotFound)?;

        let body = std::mem::take(&mut self.body);
        if let Some(date) = &body.reminder_date {
            reminder.due_date = parse_date(date).map_err(|_| UseCaseError::InvalidDate)?;
        }
        if let Some(time) = body.reminder_time {
            parse_time(&time).map_err(|_| UseCaseError::InvalidTime)?;
            reminder.due_time = time;
        }
        if let Some(title) = body.title {
            reminder.title = title;
        }
        if body.description.is_some() {
            reminder.description = body.description;
        }
        if let Some(entity_type) = body.entity_type {
            reminder.entity_type = entity_type;
        }
        if body.entity_id.is_some() {
            reminder.entity_id = body.entity_id;
        }
        if body.category.is_some() {
            reminder.category = body.category;
        }
        if let Some(priority) = body.priority {
            reminder.priority = priority;
        }
        if let Some(days) = body.interval_days {
            if !is_valid_interval(days) {
                return Err(UseCaseError::InvalidInterval(days));
            }
            reminder.interval_days = Some(days);
        }
        match body.is_completed {
            Some(true) if !reminder.is_completed => reminder.complete(ctx.today(), ctx.now()),
            Some(false) => {
                reminder.is_completed = false;
                reminder.completed_date = None;
            }
            _ => {}
        }
        reminder.updated_at = ctx.now();

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::setup_context_at;
    use chrono::NaiveDate;
    use herdbook_domain::{EntityType, Priority};

    #[actix_web::test]
    async fn moves_reminder() {
        let ctx = setup_context_at(2025, 3, 10).await;
        let user_id = ID::new();
        let reminder = Reminder::new(
            user_id,
            "Dentista".into(),
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
            EntityType::Horse,
            ctx.now(),
        );
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = UpdateReminderUseCase {
            user_id,
            reminder_id: reminder.id,
            body: RequestBody {
                reminder_date: Some("2025-03-25".into()),
                reminder_time: Some("09:30".into()),
                priority: Some(Priority::Urgent),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.due_date, NaiveDate::from_ymd_opt(2025, 3, 25).unwrap());
        assert_eq!(updated.due_time, "09:30");
        assert_eq!(updated.priority, Priority::Urgent);
        assert_eq!(updated.title, "Dentista");

        let mut usecase = UpdateReminderUseCase {
            user_id,
            reminder_id: reminder.id,
            body: RequestBody {
                reminder_time: Some("9h".into()),
                ..Default::default()
            },
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::InvalidTime);

        let mut usecase = UpdateReminderUseCase {
            user_id,
            reminder_id: reminder.id,
            body: RequestBody {
                interval_days: Some(9_000_000_000_000),
                ..Default::default()
            },
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidInterval(9_000_000_000_000)
        );
    }
}
