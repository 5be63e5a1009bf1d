use crate::dtos::RiderDTO;
use herdbook_domain::{AttachedDocument, ReminderIntervals, Rider, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct RiderResponse {
    pub rider: RiderDTO,
}

impl RiderResponse {
    pub fn new(rider: Rider) -> Self {
        Self {
            rider: RiderDTO::new(rider),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RidersResponse {
    pub riders: Vec<RiderDTO>,
}

impl RidersResponse {
    pub fn new(riders: Vec<Rider>) -> Self {
        Self {
            riders: riders.into_iter().map(RiderDTO::new).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RiderPathParams {
    pub rider_id: ID,
}

pub mod create_rider {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub photo: Option<String>,
        #[serde(default)]
        pub photos: Vec<String>,
        #[serde(default)]
        pub birth_date: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub territorial_license: Option<String>,
        #[serde(default)]
        pub national_license: Option<String>,
        #[serde(default)]
        pub documents: Vec<AttachedDocument>,
        #[serde(default)]
        pub reminder_intervals: Option<ReminderIntervals>,
    }

    pub type APIResponse = RiderResponse;
}

pub mod get_riders {
    use super::*;

    pub type APIResponse = RidersResponse;
}

pub mod get_rider {
    use super::*;

    pub type PathParams = RiderPathParams;
    pub type APIResponse = RiderResponse;
}

pub mod update_rider {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub photo: Option<String>,
        #[serde(default)]
        pub photos: Option<Vec<String>>,
        #[serde(default)]
        pub birth_date: Option<String>,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub territorial_license: Option<String>,
        #[serde(default)]
        pub national_license: Option<String>,
        #[serde(default)]
        pub documents: Option<Vec<AttachedDocument>>,
    }

    pub type PathParams = RiderPathParams;
    pub type APIResponse = RiderResponse;
}

pub mod delete_rider {
    use super::*;

    pub type PathParams = RiderPathParams;
    pub type APIResponse = RiderResponse;
}

pub mod set_rider_reminder_intervals {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub reminder_intervals: ReminderIntervals,
    }

    pub type PathParams = RiderPathParams;
    pub type APIResponse = RiderResponse;
}

pub mod get_rider_horses {
    use super::*;

    pub type PathParams = RiderPathParams;
    pub type APIResponse = crate::HorsesResponse;
}

pub mod get_rider_palmares {
    use super::*;

    pub type PathParams = RiderPathParams;
    pub type APIResponse = crate::PalmaresListResponse;
}
