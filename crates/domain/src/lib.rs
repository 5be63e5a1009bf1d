mod association;
pub mod backup;
mod budget;
pub mod cascade;
pub mod categories;
mod competition;
pub mod date;
mod entity_type;
mod expense;
mod horse;
pub mod metrics;
mod palmares;
pub mod reminder;
mod rider;
mod shared;
mod supplier;
mod user;

pub use association::HorseRiderAssociation;
pub use backup::{BackupChunk, BackupInitiator, BackupKind, BackupSnapshot};
pub use budget::{compute_budget_status, Budget, BudgetStatus};
pub use categories::ReminderIntervals;
pub use competition::{Competition, DEFAULT_COUNTRY};
pub use entity_type::EntityType;
pub use expense::Expense;
pub use horse::{AttachedDocument, Horse};
pub use metrics::{DatabaseUsage, MetricsRecord, UsageStatus};
pub use palmares::Palmares;
pub use reminder::{Occurrence, Priority, Reminder, ReminderSubject};
pub use rider::Rider;
pub use shared::entity::{InvalidIDError, ID};
pub use supplier::Supplier;
pub use user::{Language, User};

pub use chrono_tz::Tz;
pub use mongodb::bson;
