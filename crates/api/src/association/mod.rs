mod create_association;
mod delete_association;

use actix_web::web;
use create_association::create_association_controller;
use delete_association::delete_association_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/associations",
        web::post().to(create_association_controller),
    );
    cfg.route(
        "/associations",
        web::delete().to(delete_association_controller),
    );
}
