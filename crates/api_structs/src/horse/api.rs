use crate::dtos::{HorseDTO, RiderDTO};
use herdbook_domain::{AttachedDocument, Horse, ReminderIntervals, Rider, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct HorseResponse {
    pub horse: HorseDTO,
}

impl HorseResponse {
    pub fn new(horse: Horse) -> Self {
        Self {
            horse: HorseDTO::new(horse),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HorsesResponse {
    pub horses: Vec<HorseDTO>,
}

impl HorsesResponse {
    pub fn new(horses: Vec<Horse>) -> Self {
        Self {
            horses: horses.into_iter().map(HorseDTO::new).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HorsePathParams {
    pub horse_id: ID,
}

pub mod create_horse {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        #[serde(default)]
        pub breed: Option<String>,
        #[serde(default)]
        pub birth_date: Option<String>,
        #[serde(default)]
        pub color: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub photo: Option<String>,
        #[serde(default)]
        pub photos: Vec<String>,
        #[serde(default)]
        pub stabling_location: Option<String>,
        #[serde(default)]
        pub territorial_license: Option<String>,
        #[serde(default)]
        pub national_license: Option<String>,
        #[serde(default)]
        pub owner: Option<String>,
        #[serde(default)]
        pub documents: Vec<AttachedDocument>,
        #[serde(default)]
        pub reminder_intervals: Option<ReminderIntervals>,
    }

    pub type APIResponse = HorseResponse;
}

pub mod get_horses {
    use super::*;

    pub type APIResponse = HorsesResponse;
}

pub mod get_horse {
    use super::*;

    pub type PathParams = HorsePathParams;
    pub type APIResponse = HorseResponse;
}

pub mod update_horse {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub breed: Option<String>,
        #[serde(default)]
        pub birth_date: Option<String>,
        #[serde(default)]
        pub color: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub photo: Option<String>,
        #[serde(default)]
        pub photos: Option<Vec<String>>,
        #[serde(default)]
        pub stabling_location: Option<String>,
        #[serde(default)]
        pub territorial_license: Option<String>,
        #[serde(default)]
        pub national_license: Option<String>,
        #[serde(default)]
        pub owner: Option<String>,
        #[serde(default)]
        pub documents: Option<Vec<AttachedDocument>>,
    }

    pub type PathParams = HorsePathParams;
    pub type APIResponse = HorseResponse;
}

pub mod delete_horse {
    use super::*;

    pub type PathParams = HorsePathParams;
    pub type APIResponse = HorseResponse;
}

pub mod set_horse_reminder_intervals {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub reminder_intervals: ReminderIntervals,
    }

    pub type PathParams = HorsePathParams;
    pub type APIResponse = HorseResponse;
}

pub mod get_horse_riders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub riders: Vec<RiderDTO>,
    }

    impl APIResponse {
        pub fn new(riders: Vec<Rider>) -> Self {
            Self {
                riders: riders.into_iter().map(RiderDTO::new).collect(),
            }
        }
    }

    pub type PathParams = HorsePathParams;
}
