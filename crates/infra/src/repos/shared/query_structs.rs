use herdbook_domain::{bson::doc, bson::Document, date, EntityType, ID};

/// Range over `YYYY-MM-DD` strings. `start` and `end` are inclusive,
/// `before` is exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
    pub before: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self {
            start,
            end,
            before: None,
        }
    }

    pub fn starting(start: String) -> Self {
        Self::new(Some(start), None)
    }

    /// Every date of the given month. None for an invalid month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let (start, before) = date::month_bounds(year, month)?;
        Some(Self {
            start: Some(start),
            end: None,
            before: Some(before),
        })
    }

    /// Adds the range condition on `field`, if the range is bounded
    pub fn apply(&self, field: &str, filter: &mut Document) {
        let mut cond = Document::new();
        if let Some(start) = &self.start {
            cond.insert("$gte", start.clone());
        }
        if let Some(end) = &self.end {
            cond.insert("$lte", end.clone());
        }
        if let Some(before) = &self.before {
            cond.insert("$lt", before.clone());
        }
        if !cond.is_empty() {
            filter.insert(field, cond);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpenseQuery {
    pub user_id: ID,
    pub entity_id: Option<ID>,
    pub category: Option<String>,
    pub supplier_id: Option<ID>,
    pub dates: DateRange,
    pub limit: Option<i64>,
}

impl ExpenseQuery {
    pub fn by_user(user_id: ID) -> Self {
        Self {
            user_id,
            entity_id: None,
            category: None,
            supplier_id: None,
            dates: Default::default(),
            limit: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReminderQuery {
    pub user_id: ID,
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<ID>,
    pub is_completed: Option<bool>,
    pub dates: DateRange,
    pub limit: Option<i64>,
}

impl ReminderQuery {
    pub fn by_user(user_id: ID) -> Self {
        Self {
            user_id,
            entity_type: None,
            entity_id: None,
            is_completed: None,
            dates: Default::default(),
            limit: None,
        }
    }
}

/// Identifies automatic reminders that would duplicate each other
#[derive(Debug, Clone)]
pub struct AutomaticReminderKey {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub entity_id: Option<ID>,
    pub category: String,
    pub due_date: String,
}

/// Pre-notices announcing the reminder due on `parent_due_date`
#[derive(Debug, Clone)]
pub struct PreNoticeKey {
    pub user_id: ID,
    pub entity_id: Option<ID>,
    pub category: Option<String>,
    pub parent_due_date: String,
}

#[derive(Debug, Clone)]
pub struct CompetitionQuery {
    pub user_id: ID,
    pub discipline: Option<String>,
    pub dates: DateRange,
}

#[derive(Debug, Clone)]
pub struct PalmaresQuery {
    pub user_id: ID,
    pub rider_id: Option<ID>,
    pub discipline: Option<String>,
    pub dates: DateRange,
}

#[derive(Debug, Clone)]
pub struct BudgetQuery {
    pub user_id: ID,
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<ID>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Identifies the one budget an upsert replaces
#[derive(Debug, Clone)]
pub struct BudgetKey {
    pub user_id: ID,
    pub entity_type: EntityType,
    pub entity_id: Option<ID>,
    pub category: Option<String>,
    pub month: u32,
    pub year: i32,
}

pub fn optional_id(id: &Option<ID>) -> herdbook_domain::bson::Bson {
    match id {
        Some(id) => id.as_string().into(),
        None => herdbook_domain::bson::Bson::Null,
    }
}

pub fn user_filter(user_id: &ID) -> Document {
    doc! { "user_id": user_id.as_string() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn applies_date_ranges() {
        let mut filter = Document::new();
        DateRange::default().apply("date", &mut filter);
        assert!(filter.is_empty());

        DateRange::new(Some("2025-01-01".into()), Some("2025-01-31".into()))
            .apply("date", &mut filter);
        assert_eq!(
            filter,
            doc! { "date": { "$gte": "2025-01-01", "$lte": "2025-01-31" } }
        );

        let mut filter = Document::new();
        DateRange::month(2024, 12)
            .unwrap()
            .apply("date", &mut filter);
        assert_eq!(
            filter,
            doc! { "date": { "$gte": "2024-12-01", "$lt": "2025-01-01" } }
        );
        assert!(DateRange::month(2024, 13).is_none());
    }
}
