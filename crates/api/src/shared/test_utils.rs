use chrono::{TimeZone, Utc};
use herdbook_domain::{
    Competition, EntityType, Expense, Horse, Language, Palmares, Rider, User, ID,
};
use herdbook_infra::{setup_context, HerdbookContext, StaticTimeSys};
use std::sync::Arc;

/// In memory context frozen at noon UTC of the given day
pub async fn setup_context_at(year: i32, month: u32, day: u32) -> HerdbookContext {
    let mut ctx = setup_context().await;
    let now = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
    ctx.sys = Arc::new(StaticTimeSys(now.timestamp_millis()));
    ctx.config.password_hash_cost = 4;
    ctx
}

pub async fn insert_user(ctx: &HerdbookContext, email: &str) -> User {
    let user = User {
        id: Default::default(),
        email: User::normalize_email(email),
        password_hash: bcrypt::hash("caballo123", 4).unwrap(),
        name: "Lucía".into(),
        language: Language::Es,
        security_question: Some("¿En qué ciudad naciste?".into()),
        security_answer: Some(User::normalize_answer("Sevilla")),
        is_admin: false,
        created_at: ctx.now(),
        updated_at: ctx.now(),
    };
    ctx.repos.users.insert(&user).await.unwrap();
    user
}

pub async fn insert_horse(ctx: &HerdbookContext, user_id: &ID, name: &str) -> Horse {
    let horse = Horse {
        id: Default::default(),
        user_id: *user_id,
        name: name.into(),
        breed: None,
        birth_date: None,
        color: None,
        notes: None,
        photo: None,
        photos: Vec::new(),
        stabling_location: None,
        territorial_license: None,
        national_license: None,
        owner: None,
        documents: Vec::new(),
        reminder_intervals: Default::default(),
        created_at: ctx.now(),
        updated_at: ctx.now(),
    };
    ctx.repos.horses.insert(&horse).await.unwrap();
    horse
}

pub async fn insert_rider(ctx: &HerdbookContext, user_id: &ID, name: &str) -> Rider {
    let rider = Rider {
        id: Default::default(),
        user_id: *user_id,
        name: name.into(),
        photo: None,
        photos: Vec::new(),
        birth_date: None,
        phone: None,
        email: None,
        notes: None,
        territorial_license: None,
        national_license: None,
        documents: Vec::new(),
        reminder_intervals: Default::default(),
        created_at: ctx.now(),
        updated_at: ctx.now(),
    };
    ctx.repos.riders.insert(&rider).await.unwrap();
    rider
}

pub async fn insert_palmares(
    ctx: &HerdbookContext,
    user_id: &ID,
    rider_id: &ID,
    date: &str,
) -> Palmares {
    let palmares = Palmares {
        id: Default::default(),
        user_id: *user_id,
        rider_id: *rider_id,
        competition_name: "Trofeo de Primavera".into(),
        date: date.into(),
        place: None,
        city: Some("Jerez".into()),
        country: None,
        location_link: None,
        discipline: "salto".into(),
        custom_discipline: None,
        position: Some("2".into()),
        horse_id: None,
        category: None,
        notes: None,
        prize: None,
        created_at: ctx.now(),
        updated_at: ctx.now(),
    };
    ctx.repos.palmares.insert(&palmares).await.unwrap();
    palmares
}

pub async fn insert_expense(
    ctx: &HerdbookContext,
    entity_type: EntityType,
    user_id: &ID,
    entity_id: &ID,
    category: &str,
    amount: f64,
    date: &str,
) -> Expense {
    let expense = Expense {
        id: Default::default(),
        user_id: *user_id,
        entity_type,
        entity_id: *entity_id,
        category: category.into(),
        custom_category: None,
        amount,
        date: date.into(),
        description: None,
        provider: None,
        supplier_id: None,
        invoice_photo: None,
        invoice_photos: Vec::new(),
        is_recurring: false,
        create_reminder: true,
        created_at: ctx.now(),
        updated_at: ctx.now(),
    };
    ctx.repos.expenses(entity_type).insert(&expense).await.unwrap();
    expense
}

/// Competition in Sevilla, not stored
pub fn competition(user_id: ID, name: &str, date: &str) -> Competition {
    Competition {
        id: Default::default(),
        user_id,
        name: name.into(),
        date: date.into(),
        end_date: None,
        place: "Club Hípico Pineda".into(),
        city: "Sevilla".into(),
        country: Some("España".into()),
        location_link: None,
        discipline: "salto".into(),
        custom_discipline: None,
        level: None,
        organizer: None,
        entry_deadline: None,
        entry_fee: None,
        notes: None,
        website: None,
        contact_phone: None,
        contact_email: None,
        accommodation_info: None,
        participating_horses: Vec::new(),
        participating_riders: Vec::new(),
        created_at: Default::default(),
        updated_at: Default::default(),
    }
}
