mod admin;
mod association;
mod budget;
mod competition;
mod expense;
mod horse;
mod palmares;
mod reminder;
mod rider;
mod status;
mod supplier;
mod user;

pub mod dtos {
    pub use crate::admin::dtos::*;
    pub use crate::association::dtos::*;
    pub use crate::budget::dtos::*;
    pub use crate::competition::dtos::*;
    pub use crate::expense::dtos::*;
    pub use crate::horse::dtos::*;
    pub use crate::palmares::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::rider::dtos::*;
    pub use crate::supplier::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::admin::api::*;
pub use crate::association::api::*;
pub use crate::budget::api::*;
pub use crate::competition::api::*;
pub use crate::expense::api::*;
pub use crate::horse::api::*;
pub use crate::palmares::api::*;
pub use crate::reminder::api::*;
pub use crate::rider::api::*;
pub use crate::status::api::*;
pub use crate::supplier::api::*;
pub use crate::user::api::*;
