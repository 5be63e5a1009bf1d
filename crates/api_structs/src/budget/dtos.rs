use chrono::{DateTime, Utc};
use herdbook_domain::{Budget, BudgetStatus, EntityType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BudgetDTO {
    pub id: ID,
    pub entity_type: EntityType,
    pub entity_id: Option<ID>,
    pub category: Option<String>,
    pub month: u32,
    pub year: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BudgetDTO {
    pub fn new(budget: Budget) -> Self {
        Self {
            id: budget.id,
            entity_type: budget.entity_type,
            entity_id: budget.entity_id,
            category: budget.category,
            month: budget.month,
            year: budget.year,
            amount: budget.amount,
            created_at: budget.created_at,
            updated_at: budget.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BudgetStatusDTO {
    pub budget: BudgetDTO,
    pub actual: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub over_budget: bool,
}

impl BudgetStatusDTO {
    pub fn new(status: BudgetStatus) -> Self {
        Self {
            budget: BudgetDTO::new(status.budget),
            actual: status.actual,
            remaining: status.remaining,
            percentage: status.percentage,
            over_budget: status.over_budget,
        }
    }
}
