use crate::{APIResponse, BaseClient};
use herdbook_api_structs::*;
use herdbook_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ExpenseClient {
    base: Arc<BaseClient>,
}

pub struct CreateExpenseInput {
    pub horse_id: ID,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub create_reminder: bool,
}

impl ExpenseClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateExpenseInput) -> APIResponse<create_expense::APIResponse> {
        let body = create_expense::RequestBody {
            horse_id: Some(input.horse_id),
            rider_id: None,
            category: input.category,
            amount: input.amount,
            date: input.date,
            custom_category: None,
            description: None,
            provider: None,
            supplier_id: None,
            invoice_photo: None,
            invoice_photos: Vec::new(),
            is_recurring: false,
            create_reminder: input.create_reminder,
        };
        self.base
            .post(body, "expenses".into(), StatusCode::CREATED)
            .await
    }

    pub async fn list_for_horse(&self, horse_id: ID) -> APIResponse<get_expenses::APIResponse> {
        self.base
            .get(format!("expenses?horse_id={}", horse_id), StatusCode::OK)
            .await
    }

    pub async fn get(&self, expense_id: ID) -> APIResponse<get_expense::APIResponse> {
        self.base
            .get(format!("expenses/{}", expense_id), StatusCode::OK)
            .await
    }
}
