mod delete_budget;
mod get_budget_status;
mod get_budgets;
mod upsert_budget;

use actix_web::web;
use delete_budget::delete_budget_controller;
use get_budget_status::get_budget_status_controller;
use get_budgets::get_budgets_controller;
use upsert_budget::upsert_budget_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/budgets", web::post().to(upsert_budget_controller));
    cfg.route("/budgets", web::get().to(get_budgets_controller));
    cfg.route(
        "/budgets/status",
        web::get().to(get_budget_status_controller),
    );
    cfg.route(
        "/budgets/{budget_id}",
        web::delete().to(delete_budget_controller),
    );
}
