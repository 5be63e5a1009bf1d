mod helpers;

use herdbook_sdk::{
    APIErrorVariant, CreateExpenseInput, CreateHorseInput, CreateReminderInput, EntityType,
    HerdbookSDK, Language, RegisterInput,
};
use helpers::setup::spawn_app;

fn horse_input(name: &str) -> CreateHorseInput {
    CreateHorseInput {
        name: name.into(),
        breed: Some("PRE".into()),
        reminder_intervals: None,
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
    let categories = sdk
        .status
        .categories()
        .await
        .expect("Expected to list categories");
    assert!(categories.horse_categories.contains(&"herrador".to_string()));
    assert!(categories.disciplines.contains(&"salto".to_string()));
}

#[actix_web::main]
#[test]
async fn test_register_and_login() {
    let (_, sdk, address) = spawn_app().await;
    let input = || RegisterInput {
        email: "Ana@Example.com".into(),
        password: "caballo123".into(),
        name: "Ana".into(),
        language: Language::Es,
        security_question: None,
        security_answer: None,
    };
    let res = sdk
        .auth
        .register(input())
        .await
        .expect("Expected to register user");
    assert_eq!(res.user.email, "ana@example.com");
    assert_eq!(res.token_type, "bearer");

    let err = sdk.auth.register(input()).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    let login = sdk
        .auth
        .login("ana@example.com", "caballo123")
        .await
        .expect("Expected to log in");
    let user_sdk = HerdbookSDK::new(address, login.access_token);
    let me = user_sdk.auth.me().await.expect("Expected to get me");
    assert_eq!(me.user.id, res.user.id);

    let err = sdk
        .auth
        .login("ana@example.com", "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Unauthorized);
}

#[actix_web::main]
#[test]
async fn test_protected_routes_need_a_token() {
    let (_, sdk, address) = spawn_app().await;
    let err = sdk.horse.list().await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Unauthorized);

    let bad_token = HerdbookSDK::new(address, "not-a-token");
    let err = bad_token.auth.me().await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Unauthorized);
}

#[actix_web::main]
#[test]
async fn test_horse_crud() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.registered_sdk("horses@example.com").await;

    let horse = sdk
        .horse
        .create(horse_input("Tornado"))
        .await
        .expect("Expected to create horse")
        .horse;
    assert_eq!(horse.name, "Tornado");

    let horses = sdk.horse.list().await.expect("Expected to list horses");
    assert_eq!(horses.horses.len(), 1);

    let fetched = sdk.horse.get(horse.id).await.expect("Expected horse");
    assert_eq!(fetched.horse.id, horse.id);

    assert!(sdk.horse.delete(horse.id).await.is_ok());
    let err = sdk.horse.get(horse.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_records_are_private_to_their_owner() {
    let (app, _, _) = spawn_app().await;
    let owner = app.registered_sdk("owner@example.com").await;
    let other = app.registered_sdk("other@example.com").await;

    let horse = owner
        .horse
        .create(horse_input("Luna"))
        .await
        .expect("Expected to create horse")
        .horse;

    let err = other.horse.get(horse.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
    assert!(other
        .horse
        .list()
        .await
        .expect("Expected to list horses")
        .horses
        .is_empty());
}

#[actix_web::main]
#[test]
async fn test_associate_rider_with_horse() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.registered_sdk("stable@example.com").await;

    let horse = sdk
        .horse
        .create(horse_input("Brisa"))
        .await
        .expect("Expected to create horse")
        .horse;
    let rider = sdk
        .rider
        .create("Lucía")
        .await
        .expect("Expected to create rider")
        .rider;

    assert!(sdk.horse.associate_rider(horse.id, rider.id).await.is_ok());
    let err = sdk
        .horse
        .associate_rider(horse.id, rider.id)
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Conflict);

    let riders = sdk.horse.riders(horse.id).await.expect("Expected riders");
    assert_eq!(riders.riders.len(), 1);
    assert_eq!(riders.riders[0].id, rider.id);

    let horses = sdk.rider.horses(rider.id).await.expect("Expected horses");
    assert_eq!(horses.horses.len(), 1);
    assert_eq!(horses.horses[0].id, horse.id);
}

#[actix_web::main]
#[test]
async fn test_expense_creates_maintenance_reminder() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.registered_sdk("expenses@example.com").await;

    let horse = sdk
        .horse
        .create(horse_input("Canela"))
        .await
        .expect("Expected to create horse")
        .horse;
    let expense = sdk
        .expense
        .create(CreateExpenseInput {
            horse_id: horse.id,
            category: "herrador".into(),
            amount: 80.0,
            date: "2025-03-01".into(),
            create_reminder: true,
        })
        .await
        .expect("Expected to create expense")
        .expense;
    assert_eq!(expense.horse_id, Some(horse.id));

    let expenses = sdk
        .expense
        .list_for_horse(horse.id)
        .await
        .expect("Expected to list expenses");
    assert_eq!(expenses.expenses.len(), 1);

    let reminders = sdk.reminder.list().await.expect("Expected reminders");
    let farrier = reminders
        .reminders
        .iter()
        .find(|r| r.category.as_deref() == Some("herrador") && !r.is_preaviso)
        .expect("Expected a farrier reminder");
    assert_eq!(farrier.reminder_date.to_string(), "2025-04-15");
    assert_eq!(farrier.entity_id, Some(horse.id));
    assert!(farrier.is_automatic);

    let err = sdk
        .expense
        .create(CreateExpenseInput {
            horse_id: horse.id,
            category: "golf".into(),
            amount: 10.0,
            date: "2025-03-01".into(),
            create_reminder: true,
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_complete_manual_reminder() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.registered_sdk("reminders@example.com").await;

    let reminder = sdk
        .reminder
        .create(CreateReminderInput {
            title: "Renovar seguro".into(),
            reminder_date: "2025-05-01".into(),
            entity_type: EntityType::Horse,
            ..Default::default()
        })
        .await
        .expect("Expected to create reminder")
        .reminder;
    assert_eq!(reminder.reminder_time, "18:00");

    let completed = sdk
        .reminder
        .complete(reminder.id, true)
        .await
        .expect("Expected to complete reminder");
    assert_eq!(completed.completed_id, reminder.id);
    assert!(completed.next_reminder.is_none());

    assert!(sdk.reminder.delete(reminder.id).await.is_ok());
    let err = sdk.reminder.delete(reminder.id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_admin_routes_need_admin() {
    let (app, _, _) = spawn_app().await;
    let sdk = app.registered_sdk("rider@example.com").await;

    let check = sdk.admin.check().await.expect("Expected admin check");
    assert!(!check.is_admin);

    let err = sdk.admin.create_backup().await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Forbidden);
    let err = sdk.admin.backups().await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Forbidden);
}
