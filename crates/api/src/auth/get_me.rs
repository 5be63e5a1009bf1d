use crate::error::HerdbookError;
use crate::shared::auth::protect_route;
use actix_web::{web, HttpResponse};
use herdbook_api_structs::get_me::APIResponse;
use herdbook_infra::HerdbookContext;

pub async fn get_me_controller(
    http_req: actix_web::HttpRequest,
    ctx: web::Data<HerdbookContext>,
) -> Result<HttpResponse, HerdbookError> {
    let user = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
