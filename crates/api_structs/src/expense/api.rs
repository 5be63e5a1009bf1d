use crate::dtos::ExpenseDTO;
use herdbook_domain::{Expense, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ExpenseResponse {
    pub expense: ExpenseDTO,
}

impl ExpenseResponse {
    pub fn new(expense: Expense) -> Self {
        Self {
            expense: ExpenseDTO::new(expense),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExpensePathParams {
    pub expense_id: ID,
}

fn default_true() -> bool {
    true
}

pub mod create_expense {
    use super::*;

    /// `horse_id` is expected on `/expenses`, `rider_id` on `/rider-expenses`
    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub horse_id: Option<ID>,
        #[serde(default)]
        pub rider_id: Option<ID>,
        pub category: String,
        pub amount: f64,
        pub date: String,
        #[serde(default)]
        pub custom_category: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub provider: Option<String>,
        #[serde(default)]
        pub supplier_id: Option<ID>,
        #[serde(default)]
        pub invoice_photo: Option<String>,
        #[serde(default)]
        pub invoice_photos: Vec<String>,
        #[serde(default)]
        pub is_recurring: bool,
        #[serde(default = "default_true")]
        pub create_reminder: bool,
    }

    pub type APIResponse = ExpenseResponse;
}

pub mod get_expenses {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub horse_id: Option<ID>,
        #[serde(default)]
        pub rider_id: Option<ID>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub supplier_id: Option<ID>,
        #[serde(default)]
        pub start_date: Option<String>,
        #[serde(default)]
        pub end_date: Option<String>,
        #[serde(default)]
        pub limit: Option<i64>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub expenses: Vec<ExpenseDTO>,
    }

    impl APIResponse {
        pub fn new(expenses: Vec<Expense>) -> Self {
            Self {
                expenses: expenses.into_iter().map(ExpenseDTO::new).collect(),
            }
        }
    }
}

pub mod get_expense {
    use super::*;

    pub type PathParams = ExpensePathParams;
    pub type APIResponse = ExpenseResponse;
}

pub mod update_expense {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub horse_id: Option<ID>,
        #[serde(default)]
        pub rider_id: Option<ID>,
        #[serde(default)]
        pub category: Option<String>,
        #[serde(default)]
        pub amount: Option<f64>,
        #[serde(default)]
        pub date: Option<String>,
        #[serde(default)]
        pub custom_category: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub provider: Option<String>,
        #[serde(default)]
        pub supplier_id: Option<ID>,
        #[serde(default)]
        pub invoice_photo: Option<String>,
        #[serde(default)]
        pub invoice_photos: Option<Vec<String>>,
        #[serde(default)]
        pub is_recurring: Option<bool>,
        #[serde(default)]
        pub create_reminder: Option<bool>,
    }

    pub type PathParams = ExpensePathParams;
    pub type APIResponse = ExpenseResponse;
}

pub mod delete_expense {
    use super::*;

    pub type PathParams = ExpensePathParams;
    pub type APIResponse = ExpenseResponse;
}
