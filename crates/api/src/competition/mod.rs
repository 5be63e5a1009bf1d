mod create_competition;
mod delete_competition;
mod get_competition;
mod get_competitions;
mod subscribers;
mod update_competition;

use actix_web::web;
use create_competition::create_competition_controller;
use delete_competition::delete_competition_controller;
use get_competition::get_competition_controller;
use get_competitions::get_competitions_controller;
use update_competition::update_competition_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/competitions",
        web::post().to(create_competition_controller),
    );
    cfg.route("/competitions", web::get().to(get_competitions_controller));
    cfg.route(
        "/competitions/{competition_id}",
        web::get().to(get_competition_controller),
    );
    cfg.route(
        "/competitions/{competition_id}",
        web::put().to(update_competition_controller),
    );
    cfg.route(
        "/competitions/{competition_id}",
        web::delete().to(delete_competition_controller),
    );
}
