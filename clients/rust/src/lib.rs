mod admin;
mod auth;
mod base;
mod expense;
mod horse;
mod reminder;
mod rider;
mod status;

use admin::AdminClient;
use auth::AuthClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use expense::ExpenseClient;
use horse::HorseClient;
use reminder::ReminderClient;
use rider::RiderClient;
use status::StatusClient;
use std::sync::Arc;

pub use auth::RegisterInput;
pub use expense::CreateExpenseInput;
pub use herdbook_api_structs::create_reminder::RequestBody as CreateReminderInput;
pub use herdbook_api_structs::dtos::*;
pub use horse::CreateHorseInput;

pub use herdbook_domain::{EntityType, Language, Priority, ID};

/// Herdbook Server SDK
///
/// The SDK contains methods for interacting with the Herdbook server
/// API. Pass an empty access token for the public endpoints.
#[derive(Clone)]
pub struct HerdbookSDK {
    pub admin: AdminClient,
    pub auth: AuthClient,
    pub expense: ExpenseClient,
    pub horse: HorseClient,
    pub reminder: ReminderClient,
    pub rider: RiderClient,
    pub status: StatusClient,
}

impl HerdbookSDK {
    pub fn new<T: Into<String>>(address: String, access_token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_access_token(access_token.into());
        let base = Arc::new(base);

        Self {
            admin: AdminClient::new(base.clone()),
            auth: AuthClient::new(base.clone()),
            expense: ExpenseClient::new(base.clone()),
            horse: HorseClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            rider: RiderClient::new(base.clone()),
            status: StatusClient::new(base),
        }
    }
}
