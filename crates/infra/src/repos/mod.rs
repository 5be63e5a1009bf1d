mod association;
mod backup;
mod budget;
mod competition;
mod expense;
mod horse;
mod metrics;
mod palmares;
mod reminder;
mod rider;
pub(crate) mod shared;
mod supplier;
mod user;

use association::{IAssociationRepo, MongoAssociationRepo};
use backup::{IBackupRepo, MongoBackupRepo};
use budget::{IBudgetRepo, MongoBudgetRepo};
use competition::{ICompetitionRepo, MongoCompetitionRepo};
use expense::{IExpenseRepo, MongoExpenseRepo};
use herdbook_domain::EntityType;
use horse::{IHorseRepo, MongoHorseRepo};
use metrics::{IMetricsRepo, MongoMetricsRepo};
use mongodb::{options::ClientOptions, Client};
use palmares::{IPalmaresRepo, MongoPalmaresRepo};
use reminder::{IReminderRepo, MongoReminderRepo};
use rider::{IRiderRepo, MongoRiderRepo};
use shared::{inmemory_repo::InMemoryStore, store::MongoStore};
use std::sync::Arc;
use supplier::{ISupplierRepo, MongoSupplierRepo};
use tracing::info;
use user::{IUserRepo, MongoUserRepo};

pub use mongodb::bson::oid::ObjectId;
pub use shared::query_structs::*;
pub use shared::store::{FindQuery, IDocumentStore, SortOrder, StoreStats};

#[derive(Clone)]
pub struct Repos {
    /// Raw collection access for cascades, backups and metrics
    pub store: Arc<dyn IDocumentStore>,
    pub users: Arc<dyn IUserRepo>,
    pub horses: Arc<dyn IHorseRepo>,
    pub riders: Arc<dyn IRiderRepo>,
    pub suppliers: Arc<dyn ISupplierRepo>,
    pub horse_expenses: Arc<dyn IExpenseRepo>,
    pub rider_expenses: Arc<dyn IExpenseRepo>,
    pub competitions: Arc<dyn ICompetitionRepo>,
    pub palmares: Arc<dyn IPalmaresRepo>,
    pub budgets: Arc<dyn IBudgetRepo>,
    pub associations: Arc<dyn IAssociationRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
    pub backups: Arc<dyn IBackupRepo>,
    pub metrics: Arc<dyn IMetricsRepo>,
}

impl Repos {
    pub async fn create_mongodb(
        connection_string: &str,
        db_name: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);
        let store = Arc::new(MongoStore::new(&db));

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        store.ping().await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self::with_store(store))
    }

    pub fn create_inmemory() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    fn with_store(store: Arc<dyn IDocumentStore>) -> Self {
        Self {
            users: Arc::new(MongoUserRepo::new(store.clone())),
            horses: Arc::new(MongoHorseRepo::new(store.clone())),
            riders: Arc::new(MongoRiderRepo::new(store.clone())),
            suppliers: Arc::new(MongoSupplierRepo::new(store.clone())),
            horse_expenses: Arc::new(MongoExpenseRepo::new(store.clone(), EntityType::Horse)),
            rider_expenses: Arc::new(MongoExpenseRepo::new(store.clone(), EntityType::Rider)),
            competitions: Arc::new(MongoCompetitionRepo::new(store.clone())),
            palmares: Arc::new(MongoPalmaresRepo::new(store.clone())),
            budgets: Arc::new(MongoBudgetRepo::new(store.clone())),
            associations: Arc::new(MongoAssociationRepo::new(store.clone())),
            reminders: Arc::new(MongoReminderRepo::new(store.clone())),
            backups: Arc::new(MongoBackupRepo::new(store.clone())),
            metrics: Arc::new(MongoMetricsRepo::new(store.clone())),
            store,
        }
    }

    /// Repository for the expenses of the given entity type
    pub fn expenses(&self, entity_type: EntityType) -> Arc<dyn IExpenseRepo> {
        match entity_type {
            EntityType::Rider => self.rider_expenses.clone(),
            _ => self.horse_expenses.clone(),
        }
    }
}
