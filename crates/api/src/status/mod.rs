use actix_web::{web, HttpResponse};
use herdbook_api_structs::{get_categories, get_health, get_service_health};
use herdbook_domain::categories::{
    COMPETITION_DISCIPLINES, HORSE_EXPENSE_CATEGORIES, RIDER_EXPENSE_CATEGORIES,
};
use herdbook_infra::HerdbookContext;
use std::collections::BTreeMap;
use tracing::error;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(get_service_health::APIResponse::new(
        "Herdbook API is up and running",
    ))
}

async fn health(ctx: web::Data<HerdbookContext>) -> HttpResponse {
    match ctx.repos.store.ping().await {
        Ok(_) => HttpResponse::Ok().json(get_health::APIResponse {
            status: "healthy".into(),
            database: "connected".into(),
        }),
        Err(e) => {
            error!("Health check failed: {:?}", e);
            HttpResponse::ServiceUnavailable().json(get_health::APIResponse {
                status: "unhealthy".into(),
                database: e.to_string(),
            })
        }
    }
}

fn keys(table: &[(&str, &str)]) -> Vec<String> {
    table.iter().map(|(key, _)| key.to_string()).collect()
}

fn names(table: &[(&str, &str)]) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(key, name)| (key.to_string(), name.to_string()))
        .collect()
}

async fn categories() -> HttpResponse {
    HttpResponse::Ok().json(get_categories::APIResponse {
        horse_categories: keys(&HORSE_EXPENSE_CATEGORIES),
        horse_names: names(&HORSE_EXPENSE_CATEGORIES),
        rider_categories: keys(&RIDER_EXPENSE_CATEGORIES),
        rider_names: names(&RIDER_EXPENSE_CATEGORIES),
        disciplines: keys(&COMPETITION_DISCIPLINES),
        discipline_names: names(&COMPETITION_DISCIPLINES),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
    cfg.route("/health", web::get().to(health));
    cfg.route("/categories", web::get().to(categories));
}
