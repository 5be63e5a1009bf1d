mod create_palmares;
mod delete_palmares;
mod get_palmares;
mod get_palmares_list;
mod update_palmares;

use actix_web::web;
use create_palmares::create_palmares_controller;
use delete_palmares::delete_palmares_controller;
use get_palmares::get_palmares_controller;
use get_palmares_list::get_palmares_list_controller;
use update_palmares::update_palmares_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/palmares", web::post().to(create_palmares_controller));
    cfg.route("/palmares", web::get().to(get_palmares_list_controller));
    cfg.route(
        "/palmares/{palmares_id}",
        web::get().to(get_palmares_controller),
    );
    cfg.route(
        "/palmares/{palmares_id}",
        web::put().to(update_palmares_controller),
    );
    cfg.route(
        "/palmares/{palmares_id}",
        web::delete().to(delete_palmares_controller),
    );
}
