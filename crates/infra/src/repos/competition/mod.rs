mod mongo;

use crate::repos::shared::query_structs::CompetitionQuery;
use herdbook_domain::{Competition, ID};
pub use mongo::MongoCompetitionRepo;

#[async_trait::async_trait]
pub trait ICompetitionRepo: Send + Sync {
    async fn insert(&self, competition: &Competition) -> anyhow::Result<()>;
    async fn save(&self, competition: &Competition) -> anyhow::Result<()>;
    async fn find(&self, competition_id: &ID, user_id: &ID) -> Option<Competition>;
    /// Soonest first
    async fn find_by(&self, query: CompetitionQuery) -> anyhow::Result<Vec<Competition>>;
    async fn delete(&self, competition_id: &ID, user_id: &ID) -> Option<Competition>;
}

#[cfg(test)]
mod tests {
    use crate::{repos::shared::query_structs::DateRange, setup_context, CompetitionQuery};
    use chrono::Utc;
    use herdbook_domain::{Competition, ID};

    fn competition(user_id: ID, name: &str, date: &str, discipline: &str) -> Competition {
        Competition {
            id: Default::default(),
            user_id,
            name: name.into(),
            date: date.into(),
            end_date: None,
            place: "Hipódromo".into(),
            city: "Sevilla".into(),
            country: Some("España".into()),
            location_link: None,
            discipline: discipline.into(),
            custom_discipline: None,
            level: None,
            organizer: None,
            entry_deadline: None,
            entry_fee: Some(60.0),
            notes: None,
            website: None,
            contact_phone: None,
            contact_email: None,
            accommodation_info: None,
            participating_horses: vec![ID::new()],
            participating_riders: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn lists_upcoming_competitions_in_date_order() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        for c in [
            competition(user_id, "CSN Jerez", "2025-06-20", "salto"),
            competition(user_id, "Copa Doma", "2025-05-10", "doma_clasica"),
            competition(user_id, "Invierno", "2024-12-01", "salto"),
        ] {
            ctx.repos.competitions.insert(&c).await.unwrap();
        }

        let res = ctx
            .repos
            .competitions
            .find_by(CompetitionQuery {
                user_id,
                discipline: None,
                dates: DateRange::starting("2025-01-01".into()),
            })
            .await
            .unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].name, "Copa Doma");
        assert_eq!(res[1].participating_horses.len(), 1);

        let res = ctx
            .repos
            .competitions
            .find_by(CompetitionQuery {
                user_id,
                discipline: Some("salto".into()),
                dates: Default::default(),
            })
            .await
            .unwrap();
        assert_eq!(res.len(), 2);
    }
}
