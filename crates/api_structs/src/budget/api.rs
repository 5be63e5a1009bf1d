use crate::dtos::{BudgetDTO, BudgetStatusDTO};
use herdbook_domain::{Budget, EntityType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct BudgetResponse {
    pub budget: BudgetDTO,
}

impl BudgetResponse {
    pub fn new(budget: Budget) -> Self {
        Self {
            budget: BudgetDTO::new(budget),
        }
    }
}

pub mod upsert_budget {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub entity_type: EntityType,
        #[serde(default)]
        pub entity_id: Option<ID>,
        #[serde(default)]
        pub category: Option<String>,
        pub month: u32,
        pub year: i32,
        pub amount: f64,
    }

    pub type APIResponse = BudgetResponse;
}

pub mod get_budgets {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub entity_type: Option<EntityType>,
        #[serde(default)]
        pub entity_id: Option<ID>,
        #[serde(default)]
        pub month: Option<u32>,
        #[serde(default)]
        pub year: Option<i32>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub budgets: Vec<BudgetDTO>,
    }

    impl APIResponse {
        pub fn new(budgets: Vec<Budget>) -> Self {
            Self {
                budgets: budgets.into_iter().map(BudgetDTO::new).collect(),
            }
        }
    }
}

pub mod get_budget_status {
    use super::*;

    /// Month and year default to the current month
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub entity_type: Option<EntityType>,
        #[serde(default)]
        pub month: Option<u32>,
        #[serde(default)]
        pub year: Option<i32>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub month: u32,
        pub year: i32,
        pub entity_type: EntityType,
        pub status: Vec<BudgetStatusDTO>,
        pub total_budgeted: f64,
        pub total_actual: f64,
    }
}

pub mod delete_budget {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub budget_id: ID,
    }

    pub type APIResponse = BudgetResponse;
}
