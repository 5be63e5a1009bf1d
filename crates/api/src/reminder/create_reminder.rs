use crate::error::HerdbookError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use herdbook_api_structs::create_reminder::{APIResponse, RequestBody};
use herdbook_domain::{
    categories::{is_valid_interval, MAX_INTERVAL_DAYS},
    date::{parse_date, parse_time},
    Priority, Reminder, ID,
};
use herdbook_infra::HerdbookContext;

pub async fn create_reminder_controller(
    http_req: actix_web::HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = CreateReminderUseCase {
        user_id: user.id,
        body: body.0,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(HerdbookError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: ID,
    pub body: RequestBody,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidData(String),
    InvalidDate,
    InvalidTime,
    StorageError,
}

impl From<UseCaseError> for HerdbookError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidData(msg) => Self::BadClientData(msg),
            UseCaseError::InvalidDate => {
                Self::BadClientData("Invalid date format. Use YYYY-MM-DD".into())
            }
            UseCaseError::InvalidTime => {
                Self::BadClientData("Invalid time format. Use HH:MM".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let body = std::mem::take(&mut self.body);
        if body.title.trim().is_empty() {
            return Err(UseCaseError::InvalidData("A reminder needs a title".into()));
        }
        let due_date = parse_date(&body.reminder_date).map_err(|_| UseCaseError::InvalidDate)?;
        if let Some(time) = &body.reminder_time {
            parse_time(time).map_err(|_| UseCaseError::InvalidTime)?;
        }
        if matches!(body.interval_days, Some(days) if !is_valid_interval(days)) {
            return Err(UseCaseError::InvalidData(format!(
                "interval_days must be between 1 and {} days",
                MAX_INTERVAL_DAYS
            )));
        }

        let mut reminder = Reminder::new(
            self.user_id,
            body.title,
            due_date,
            body.entity_type,
            ctx.now(),
        );
        if let Some(time) = body.reminder_time {
            reminder.due_time = time;
        }
        reminder.priority = match (body.priority, &body.category) {
            (Some(priority), _) => priority,
            (None, Some(category)) => Priority::for_category(category),
            (None, None) => Priority::default(),
        };
        reminder.description = body.description;
        reminder.entity_id = body.entity_id;
        reminder.category = body.category;
        reminder.is_automatic = body.is_automatic;
        reminder.competition_id = body.competition_id;
        reminder.interval_days = body.interval_days;
        if body.is_completed {
            reminder.complete(ctx.today(), ctx.now());
        }

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::setup_context_at;
    use herdbook_domain::EntityType;

    fn body(date: &str) -> RequestBody {
        RequestBody {
            title: "Renovar seguro".into(),
            reminder_date: date.into(),
            entity_type: EntityType::Rider,
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn priority_follows_category() {
        let ctx = setup_context_at(2025, 3, 10).await;

        let mut usecase = CreateReminderUseCase {
            user_id: ID::new(),
            body: RequestBody {
                category: Some("seguros".into()),
                ..body("2025-06-01")
            },
        };
        let reminder = usecase.execute(&ctx).await.unwrap();
        assert_eq!(reminder.priority, Priority::Important);
        assert_eq!(reminder.due_time, "18:00");

        let mut usecase = CreateReminderUseCase {
            user_id: ID::new(),
            body: RequestBody {
                category: Some("seguros".into()),
                priority: Some(Priority::Urgent),
                ..body("2025-06-01")
            },
        };
        let reminder = usecase.execute(&ctx).await.unwrap();
        assert_eq!(reminder.priority, Priority::Urgent);
    }

    #[actix_web::test]
    async fn rejects_bad_date_and_time() {
        let ctx = setup_context_at(2025, 3, 10).await;

        let mut usecase = CreateReminderUseCase {
            user_id: ID::new(),
            body: body("2025-13-01"),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::InvalidDate);

        let mut usecase = CreateReminderUseCase {
            user_id: ID::new(),
            body: RequestBody {
                reminder_time: Some("25:00".into()),
                ..body("2025-06-01")
            },
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::InvalidTime);
    }

    #[actix_web::test]
    async fn rejects_out_of_range_intervals() {
        let ctx = setup_context_at(2025, 3, 10).await;

        for interval_days in [0, MAX_INTERVAL_DAYS + 1, 9_000_000_000_000] {
            let mut usecase = CreateReminderUseCase {
                user_id: ID::new(),
                body: RequestBody {
                    interval_days: Some(interval_days),
                    ..body("2025-06-01")
                },
            };
            assert!(matches!(
                usecase.execute(&ctx).await,
                Err(UseCaseError::InvalidData(_))
            ));
        }
    }
}
