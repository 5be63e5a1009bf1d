use crate::dtos::PalmaresDTO;
use herdbook_domain::{Palmares, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct PalmaresResponse {
    pub palmares: PalmaresDTO,
}

impl PalmaresResponse {
    pub fn new(palmares: Palmares) -> Self {
        Self {
            palmares: PalmaresDTO::new(palmares),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PalmaresListResponse {
    pub palmares: Vec<PalmaresDTO>,
}

impl PalmaresListResponse {
    pub fn new(palmares: Vec<Palmares>) -> Self {
        Self {
            palmares: palmares.into_iter().map(PalmaresDTO::new).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PalmaresPathParams {
    pub palmares_id: ID,
}

pub mod create_palmares {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub rider_id: ID,
        pub competition_name: String,
        pub date: String,
        pub discipline: String,
        #[serde(default)]
        pub place: Option<String>,
        #[serde(default)]
        pub city: Option<String>,
        #[serde(default)]
        pub country: Option<String>,
        #[serde(default)]
        pub location_link: Option<String>,
        #[serde(default)]
        pub custom_discipline: Option<String>,
        #[serde(default)]
        pub position: Option<String>,
        #[serde(default)]
        pub horse_id: Option<ID>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub prize: Option<String>,
    }

    pub type APIResponse = PalmaresResponse;
}

pub mod get_palmares_list {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub rider_id: Option<ID>,
        #[serde(default)]
        pub discipline: Option<String>,
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
    }

    pub type APIResponse = PalmaresListResponse;
}

pub mod get_palmares {
    use super::*;

    pub type PathParams = PalmaresPathParams;
    pub type APIResponse = PalmaresResponse;
}

pub mod update_palmares {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub rider_id: Option<ID>,
        #[serde(default)]
        pub competition_name: Option<String>,
        #[serde(default)]
        pub date: Option<String>,
        #[serde(default)]
        pub discipline: Option<String>,
        #[serde(default)]
        pub place: Option<String>,
        #[serde(default)]
        pub city: Option<String>,
        #[serde(default)]
        pub country: Option<String>,
        #[serde(default)]
        pub location_link: Option<String>,
        #[serde(default)]
        pub custom_discipline: Option<String>,
        #[serde(default)]
        pub position: Option<String>,
        #[serde(default)]
        pub horse_id: Option<ID>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub prize: Option<String>,
    }

    pub type PathParams = PalmaresPathParams;
    pub type APIResponse = PalmaresResponse;
}

pub mod delete_palmares {
    use super::*;

    pub type PathParams = PalmaresPathParams;
    pub type APIResponse = PalmaresResponse;
}
