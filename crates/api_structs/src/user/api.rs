use crate::dtos::UserDTO;
use herdbook_domain::{Language, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct UserResponse {
    pub user: UserDTO,
}

impl UserResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserDTO::new(user),
        }
    }
}

/// A session token together with the user it was issued for
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserDTO,
}

impl TokenResponse {
    pub fn new(access_token: String, user: User) -> Self {
        Self {
            access_token,
            token_type: "bearer".into(),
            user: UserDTO::new(user),
        }
    }
}

pub mod register {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub email: String,
        pub password: String,
        pub name: String,
        #[serde(default)]
        pub language: Language,
        #[serde(default)]
        pub security_question: Option<String>,
        #[serde(default)]
        pub security_answer: Option<String>,
    }

    pub type APIResponse = TokenResponse;
}

pub mod login {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub email: String,
        pub password: String,
    }

    pub type APIResponse = TokenResponse;
}

pub mod get_me {
    use super::*;

    pub type APIResponse = UserResponse;
}

pub mod delete_account {
    pub type APIResponse = crate::MessageResponse;
}

pub mod set_language {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub language: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        pub language: Language,
    }
}

pub mod get_security_questions {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub questions: Vec<String>,
    }
}

pub mod forgot_password {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub email: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub email: String,
        pub security_question: String,
    }
}

pub mod verify_security_answer {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub email: String,
        pub security_answer: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub verified: bool,
        pub message: String,
    }
}

pub mod reset_password_with_security {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub email: String,
        pub security_answer: String,
        pub new_password: String,
    }

    pub type APIResponse = crate::MessageResponse;
}
