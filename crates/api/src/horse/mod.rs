mod create_horse;
mod delete_horse;
mod get_horse;
mod get_horse_riders;
mod get_horses;
mod set_horse_reminder_intervals;
mod update_horse;

use actix_web::web;
use create_horse::create_horse_controller;
use delete_horse::delete_horse_controller;
use get_horse::get_horse_controller;
use get_horse_riders::get_horse_riders_controller;
use get_horses::get_horses_controller;
use set_horse_reminder_intervals::set_horse_reminder_intervals_controller;
use update_horse::update_horse_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/horses", web::post().to(create_horse_controller));
    cfg.route("/horses", web::get().to(get_horses_controller));
    cfg.route("/horses/{horse_id}", web::get().to(get_horse_controller));
    cfg.route("/horses/{horse_id}", web::put().to(update_horse_controller));
    cfg.route(
        "/horses/{horse_id}",
        web::delete().to(delete_horse_controller),
    );
    cfg.route(
        "/horses/{horse_id}/reminder-intervals",
        web::put().to(set_horse_reminder_intervals_controller),
    );
    cfg.route(
        "/horses/{horse_id}/riders",
        web::get().to(get_horse_riders_controller),
    );
}
