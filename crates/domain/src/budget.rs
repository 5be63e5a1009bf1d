use crate::{entity_type::EntityType, expense::Expense, shared::entity::ID};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Planned spending for a month. Without `entity_id` the budget covers
/// every entity of `entity_type`, without `category` every category.
#[derive(Debug, Clone)]
pub struct Budget {
    pub id: ID,
    pub user_id: ID,
    pub entity_type: EntityType,
    pub entity_id: Option<ID>,
    pub category: Option<String>,
    pub month: u32,
    pub year: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub actual: f64,
    pub remaining: f64,
    /// Share of the budget spent, rounded to one decimal
    pub percentage: f64,
    pub over_budget: bool,
}

#[derive(Default)]
struct Spent {
    total: f64,
    by_category: HashMap<String, f64>,
}

/// Compares every budget with the expenses booked in its month. The
/// expenses are expected to already be restricted to that month.
pub fn compute_budget_status(budgets: Vec<Budget>, expenses: &[Expense]) -> Vec<BudgetStatus> {
    let mut by_entity: HashMap<ID, Spent> = HashMap::new();
    let mut by_category: HashMap<&str, f64> = HashMap::new();
    let mut total = 0.0;

    for expense in expenses {
        let spent = by_entity.entry(expense.entity_id).or_default();
        spent.total += expense.amount;
        *spent
            .by_category
            .entry(expense.category.clone())
            .or_default() += expense.amount;
        *by_category.entry(expense.category.as_str()).or_default() += expense.amount;
        total += expense.amount;
    }

    budgets
        .into_iter()
        .map(|budget| {
            let actual = match (&budget.entity_id, &budget.category) {
                (Some(entity_id), Some(category)) => by_entity
                    .get(entity_id)
                    .and_then(|spent| spent.by_category.get(category).copied())
                    .unwrap_or_default(),
                (Some(entity_id), None) => by_entity
                    .get(entity_id)
                    .map(|spent| spent.total)
                    .unwrap_or_default(),
                (None, Some(category)) => by_category
                    .get(category.as_str())
                    .copied()
                    .unwrap_or_default(),
                (None, None) => total,
            };
            let percentage = if budget.amount > 0.0 {
                (actual / budget.amount * 1000.0).round() / 10.0
            } else {
                0.0
            };

            BudgetStatus {
                actual,
                remaining: budget.amount - actual,
                percentage,
                over_budget: actual > budget.amount,
                budget,
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn budget(entity_id: Option<ID>, category: Option<&str>, amount: f64) -> Budget {
        Budget {
            id: Default::default(),
            user_id: Default::default(),
            entity_type: EntityType::Horse,
            entity_id,
            category: category.map(String::from),
            month: 3,
            year: 2025,
            amount,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn expense(entity_id: ID, category: &str, amount: f64) -> Expense {
        Expense {
            id: Default::default(),
            user_id: Default::default(),
            entity_type: EntityType::Horse,
            entity_id,
            category: category.into(),
            custom_category: None,
            amount,
            date: "2025-03-10".into(),
            description: None,
            provider: None,
            supplier_id: None,
            invoice_photo: None,
            invoice_photos: vec![],
            is_recurring: false,
            create_reminder: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn matches_budgets_on_entity_and_category() {
        let horse_a = ID::new();
        let horse_b = ID::new();
        let expenses = vec![
            expense(horse_a, "herrador", 60.0),
            expense(horse_a, "pupilaje", 300.0),
            expense(horse_b, "herrador", 55.0),
        ];
        let budgets = vec![
            budget(Some(horse_a), Some("herrador"), 50.0),
            budget(Some(horse_a), None, 400.0),
            budget(None, Some("herrador"), 200.0),
            budget(None, None, 1000.0),
            budget(Some(ID::new()), None, 0.0),
        ];

        let status = compute_budget_status(budgets, &expenses);

        assert_eq!(status[0].actual, 60.0);
        assert!(status[0].over_budget);
        assert_eq!(status[0].percentage, 120.0);
        assert_eq!(status[1].actual, 360.0);
        assert_eq!(status[1].remaining, 40.0);
        assert_eq!(status[2].actual, 115.0);
        assert_eq!(status[2].percentage, 57.5);
        assert_eq!(status[3].actual, 415.0);
        assert!(!status[3].over_budget);
        assert_eq!(status[4].actual, 0.0);
        assert_eq!(status[4].percentage, 0.0);
    }
}
