mod create_rider;
mod delete_rider;
mod get_rider;
mod get_rider_horses;
mod get_rider_palmares;
mod get_riders;
mod set_rider_reminder_intervals;
mod update_rider;

use actix_web::web;
use create_rider::create_rider_controller;
use delete_rider::delete_rider_controller;
use get_rider::get_rider_controller;
use get_rider_horses::get_rider_horses_controller;
use get_rider_palmares::get_rider_palmares_controller;
use get_riders::get_riders_controller;
use set_rider_reminder_intervals::set_rider_reminder_intervals_controller;
use update_rider::update_rider_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/riders", web::post().to(create_rider_controller));
    cfg.route("/riders", web::get().to(get_riders_controller));
    cfg.route("/riders/{rider_id}", web::get().to(get_rider_controller));
    cfg.route("/riders/{rider_id}", web::put().to(update_rider_controller));
    cfg.route(
        "/riders/{rider_id}",
        web::delete().to(delete_rider_controller),
    );
    cfg.route(
        "/riders/{rider_id}/reminder-intervals",
        web::put().to(set_rider_reminder_intervals_controller),
    );
    cfg.route(
        "/riders/{rider_id}/horses",
        web::get().to(get_rider_horses_controller),
    );
    cfg.route(
        "/riders/{rider_id}/palmares",
        web::get().to(get_rider_palmares_controller),
    );
}
