mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    AutomaticReminderKey, BudgetKey, BudgetQuery, CompetitionQuery, DateRange, ExpenseQuery,
    FindQuery, IDocumentStore, PalmaresQuery, PreNoticeKey, ReminderQuery, Repos, SortOrder,
    StoreStats,
};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

#[derive(Clone)]
pub struct HerdbookContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

struct ContextParams {
    pub mongodb_connection_string: Option<String>,
    pub mongodb_db_name: String,
}

impl HerdbookContext {
    async fn create(params: ContextParams) -> Self {
        let repos = match params.mongodb_connection_string {
            Some(connection_string) => {
                Repos::create_mongodb(&connection_string, &params.mongodb_db_name)
                    .await
                    .expect("Mongo db credentials must be set and valid")
            }
            None => {
                info!("MONGODB_CONNECTION_STRING is not set, using the in memory store");
                Repos::create_inmemory()
            }
        };
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// The calendar date "today" is in the configured timezone
    pub fn today(&self) -> chrono::NaiveDate {
        herdbook_domain::date::today_in(self.sys.get_timestamp_millis(), &self.config.timezone)
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::TimeZone;
        chrono::Utc
            .timestamp_millis_opt(self.sys.get_timestamp_millis())
            .single()
            .unwrap_or_default()
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> HerdbookContext {
    HerdbookContext::create(ContextParams {
        mongodb_connection_string: std::env::var("MONGODB_CONNECTION_STRING")
            .ok()
            .filter(|c| !c.is_empty()),
        mongodb_db_name: std::env::var("MONGODB_NAME").unwrap_or_else(|_| "herdbook".into()),
    })
    .await
}
