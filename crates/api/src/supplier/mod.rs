mod create_supplier;
mod delete_supplier;
mod get_supplier;
mod get_suppliers;
mod update_supplier;

use actix_web::web;
use create_supplier::create_supplier_controller;
use delete_supplier::delete_supplier_controller;
use get_supplier::get_supplier_controller;
use get_suppliers::get_suppliers_controller;
use update_supplier::update_supplier_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/suppliers", web::post().to(create_supplier_controller));
    cfg.route("/suppliers", web::get().to(get_suppliers_controller));
    cfg.route(
        "/suppliers/{supplier_id}",
        web::get().to(get_supplier_controller),
    );
    cfg.route(
        "/suppliers/{supplier_id}",
        web::put().to(update_supplier_controller),
    );
    cfg.route(
        "/suppliers/{supplier_id}",
        web::delete().to(delete_supplier_controller),
    );
}
