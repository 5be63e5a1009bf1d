mod mongo;

use crate::repos::shared::query_structs::PalmaresQuery;
use herdbook_domain::{Palmares, ID};
pub use mongo::MongoPalmaresRepo;

#[async_trait::async_trait]
pub trait IPalmaresRepo: Send + Sync {
    async fn insert(&self, palmares: &Palmares) -> anyhow::Result<()>;
    async fn save(&self, palmares: &Palmares) -> anyhow::Result<()>;
    async fn find(&self, palmares_id: &ID, user_id: &ID) -> Option<Palmares>;
    /// Most recent first
    async fn find_by(&self, query: PalmaresQuery) -> anyhow::Result<Vec<Palmares>>;
    async fn delete(&self, palmares_id: &ID, user_id: &ID) -> Option<Palmares>;
}
