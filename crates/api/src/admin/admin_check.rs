use crate::error::HerdbookError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpResponse};
use herdbook_api_structs::admin_check::APIResponse;
use herdbook_infra::HerdbookContext;

/// Tells any signed in user whether they are an admin
pub async fn admin_check_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse {
        is_admin: user.is_admin(&ctx.config.admin_emails),
    }))
}
