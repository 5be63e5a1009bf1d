use crate::error::HerdbookError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_reminder_intervals::APIResponse;
use herdbook_domain::categories::DEFAULT_REMINDER_INTERVALS;
use herdbook_infra::HerdbookContext;

pub async fn get_reminder_intervals_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(reminder_intervals()))
}

fn reminder_intervals() -> APIResponse {
    APIResponse {
        default_intervals: DEFAULT_REMINDER_INTERVALS
            .iter()
            .map(|(category, days)| (category.to_string(), *days))
            .collect(),
        categories: DEFAULT_REMINDER_INTERVALS
            .iter()
            .map(|(category, _)| category.to_string())
            .collect(),
    }
}
