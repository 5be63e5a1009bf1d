use actix_web::HttpResponse;
use herdbook_api_structs::get_security_questions::APIResponse;
use herdbook_domain::categories::SECURITY_QUESTIONS;

pub async fn get_security_questions_controller() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        questions: SECURITY_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}
