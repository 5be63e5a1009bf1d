mod complete_reminder;
mod create_competition_reminders;
mod create_expense_reminders;
mod create_reminder;
mod delete_reminder;
mod get_reminder_intervals;
mod get_reminders;
mod get_upcoming_reminders;
mod occurrences;
mod update_reminder;

use actix_web::web;
use complete_reminder::complete_reminder_controller;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_reminder_intervals::get_reminder_intervals_controller;
use get_reminders::get_reminders_controller;
use get_upcoming_reminders::get_upcoming_reminders_controller;
use update_reminder::update_reminder_controller;

pub use create_competition_reminders::CreateCompetitionRemindersUseCase;
pub use create_expense_reminders::CreateExpenseRemindersUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route("/reminders", web::get().to(get_reminders_controller));
    cfg.route(
        "/reminders/upcoming",
        web::get().to(get_upcoming_reminders_controller),
    );
    cfg.route(
        "/reminders/intervals",
        web::get().to(get_reminder_intervals_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}/complete",
        web::post().to(complete_reminder_controller),
    );
}
