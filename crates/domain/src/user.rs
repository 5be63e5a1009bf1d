use crate::shared::entity::ID;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Self::Es
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    /// Lower cased, unique among users
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    pub name: String,
    pub language: Language,
    pub security_question: Option<String>,
    /// Stored normalized, see `User::normalize_answer`
    pub security_answer: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn normalize_answer(answer: &str) -> String {
        answer.trim().to_lowercase()
    }

    pub fn answer_matches(&self, answer: &str) -> bool {
        match &self.security_answer {
            Some(stored) => Self::normalize_answer(stored) == Self::normalize_answer(answer),
            None => false,
        }
    }

    /// A user is an admin either by flag or by being listed in the
    /// configured admin emails.
    pub fn is_admin(&self, admin_emails: &[String]) -> bool {
        self.is_admin
            || admin_emails
                .iter()
                .any(|email| email.to_lowercase() == self.email)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn user(email: &str) -> User {
        User {
            id: Default::default(),
            email: User::normalize_email(email),
            password_hash: String::new(),
            name: "Ana".into(),
            language: Language::Es,
            security_question: Some("¿En qué ciudad naciste?".into()),
            security_answer: Some(User::normalize_answer(" Sevilla ")),
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn admin_by_flag_or_email() {
        let admins = vec!["Boss@Stable.es".to_string()];
        let mut u = user("boss@stable.es");
        assert!(u.is_admin(&admins));

        u.email = "rider@stable.es".into();
        assert!(!u.is_admin(&admins));
        u.is_admin = true;
        assert!(u.is_admin(&[]));
    }

    #[test]
    fn security_answer_is_case_and_whitespace_insensitive() {
        let u = user("ana@stable.es");
        assert!(u.answer_matches("SEVILLA"));
        assert!(u.answer_matches("  sevilla"));
        assert!(!u.answer_matches("Madrid"));
    }
}
