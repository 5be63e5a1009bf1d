use chrono::{DateTime, Utc};
use herdbook_domain::{Language, User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDTO {
    pub id: ID,
    pub email: String,
    pub name: String,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    pub has_security_question: bool,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            language: user.language,
            created_at: user.created_at,
            has_security_question: user.security_question.is_some(),
        }
    }
}
