mod delete_account;
mod forgot_password;
mod get_me;
mod get_security_questions;
mod login;
mod register;
mod reset_password_with_security;
mod set_language;
mod verify_security_answer;

use actix_web::web;
use delete_account::delete_account_controller;
use forgot_password::forgot_password_controller;
use get_me::get_me_controller;
use get_security_questions::get_security_questions_controller;
use login::login_controller;
use register::register_controller;
use reset_password_with_security::reset_password_with_security_controller;
use set_language::set_language_controller;
use verify_security_answer::verify_security_answer_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register_controller));
    cfg.route("/auth/login", web::post().to(login_controller));
    cfg.route("/auth/me", web::get().to(get_me_controller));
    cfg.route(
        "/auth/delete-account",
        web::delete().to(delete_account_controller),
    );
    cfg.route("/auth/language", web::put().to(set_language_controller));
    cfg.route(
        "/auth/security-questions",
        web::get().to(get_security_questions_controller),
    );
    cfg.route(
        "/auth/forgot-password",
        web::post().to(forgot_password_controller),
    );
    cfg.route(
        "/auth/verify-security-answer",
        web::post().to(verify_security_answer_controller),
    );
    cfg.route(
        "/auth/reset-password-with-security",
        web::post().to(reset_password_with_security_controller),
    );
}
