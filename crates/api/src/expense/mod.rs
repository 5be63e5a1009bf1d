mod create_expense;
mod delete_expense;
mod get_expense;
mod get_expenses;
mod subscribers;
mod update_expense;

use actix_web::web;
use create_expense::create_expense_controller;
use delete_expense::delete_expense_controller;
use get_expense::get_expense_controller;
use get_expenses::get_expenses_controller;
use herdbook_domain::EntityType;
use update_expense::update_expense_controller;

/// Horse expenses are served under `/expenses` and rider expenses under
/// `/rider-expenses`. The scope tells the controllers which one they serve.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/expenses")
            .app_data(web::Data::new(EntityType::Horse))
            .configure(expense_routes),
    );
    cfg.service(
        web::scope("/rider-expenses")
            .app_data(web::Data::new(EntityType::Rider))
            .configure(expense_routes),
    );
}

fn expense_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_expense_controller));
    cfg.route("", web::get().to(get_expenses_controller));
    cfg.route("/{expense_id}", web::get().to(get_expense_controller));
    cfg.route("/{expense_id}", web::put().to(update_expense_controller));
    cfg.route("/{expense_id}", web::delete().to(delete_expense_controller));
}

fn owner_not_found(entity_type: EntityType) -> String {
    match entity_type {
        EntityType::Rider => "Rider not found".into(),
        _ => "Horse not found".into(),
    }
}

/// The horse or rider the expense is booked on has to belong to the user
async fn owner_exists(
    entity_type: EntityType,
    entity_id: &herdbook_domain::ID,
    user_id: &herdbook_domain::ID,
    ctx: &herdbook_infra::HerdbookContext,
) -> bool {
    match entity_type {
        EntityType::Rider => ctx.repos.riders.find(entity_id, user_id).await.is_some(),
        _ => ctx.repos.horses.find(entity_id, user_id).await.is_some(),
    }
}
