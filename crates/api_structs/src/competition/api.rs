use crate::dtos::CompetitionDTO;
use herdbook_domain::{Competition, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct CompetitionResponse {
    pub competition: CompetitionDTO,
}

impl CompetitionResponse {
    pub fn new(competition: Competition) -> Self {
        Self {
            competition: CompetitionDTO::new(competition),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CompetitionPathParams {
    pub competition_id: ID,
}

pub mod create_competition {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        pub date: String,
        pub place: String,
        pub city: String,
        pub discipline: String,
        #[serde(default)]
        pub end_date: Option<String>,
        #[serde(default)]
        pub country: Option<String>,
        #[serde(default)]
        pub location_link: Option<String>,
        #[serde(default)]
        pub custom_discipline: Option<String>,
        #[serde(default)]
        pub level: Option<String>,
        #[serde(default)]
        pub organizer: Option<String>,
        #[serde(default)]
        pub entry_deadline: Option<String>,
        #[serde(default)]
        pub entry_fee: Option<f64>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub website: Option<String>,
        #[serde(default)]
        pub contact_phone: Option<String>,
        #[serde(default)]
        pub contact_email: Option<String>,
        #[serde(default)]
        pub accommodation_info: Option<String>,
        #[serde(default)]
        pub participating_horses: Vec<ID>,
        #[serde(default)]
        pub participating_riders: Vec<ID>,
    }

    pub type APIResponse = CompetitionResponse;
}

pub mod get_competitions {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub discipline: Option<String>,
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
        /// Only competitions from today on
        #[serde(default)]
        pub upcoming: Option<bool>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub competitions: Vec<CompetitionDTO>,
    }

    impl APIResponse {
        pub fn new(competitions: Vec<Competition>) -> Self {
            Self {
                competitions: competitions.into_iter().map(CompetitionDTO::new).collect(),
            }
        }
    }
}

pub mod get_competition {
    use super::*;

    pub type PathParams = CompetitionPathParams;
    pub type APIResponse = CompetitionResponse;
}

pub mod update_competition {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub date: Option<String>,
        #[serde(default)]
        pub place: Option<String>,
        #[serde(default)]
        pub city: Option<String>,
        #[serde(default)]
        pub discipline: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
        #[serde(default)]
        pub country: Option<String>,
        #[serde(default)]
        pub location_link: Option<String>,
        #[serde(default)]
        pub custom_discipline: Option<String>,
        #[serde(default)]
        pub level: Option<String>,
        #[serde(default)]
        pub organizer: Option<String>,
        #[serde(default)]
        pub entry_deadline: Option<String>,
        #[serde(default)]
        pub entry_fee: Option<f64>,
        #[serde(default)]
        pub notes: Option<String>,
        #[serde(default)]
        pub website: Option<String>,
        #[serde(default)]
        pub contact_phone: Option<String>,
        #[serde(default)]
        pub contact_email: Option<String>,
        #[serde(default)]
        pub accommodation_info: Option<String>,
        #[serde(default)]
        pub participating_horses: Option<Vec<ID>>,
        #[serde(default)]
        pub participating_riders: Option<Vec<ID>>,
    }

    pub type PathParams = CompetitionPathParams;
    pub type APIResponse = CompetitionResponse;
}

pub mod delete_competition {
    use super::*;

    pub type PathParams = CompetitionPathParams;
    pub type APIResponse = CompetitionResponse;
}
