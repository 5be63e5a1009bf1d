use herdbook_api::Application;
use herdbook_infra::{setup_context, Config};
use herdbook_sdk::{HerdbookSDK, Language, RegisterInput};

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    /// Registers a fresh user and returns an SDK acting on its behalf
    pub async fn registered_sdk(&self, email: &str) -> HerdbookSDK {
        let sdk = HerdbookSDK::new(self.address.clone(), "");
        let res = sdk
            .auth
            .register(RegisterInput {
                email: email.into(),
                password: "caballo123".into(),
                name: "Jinete".into(),
                language: Language::Es,
                security_question: None,
                security_answer: None,
            })
            .await
            .expect("Expected to register user");
        HerdbookSDK::new(self.address.clone(), res.access_token)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, HerdbookSDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port
    ctx.config.password_hash_cost = 4;

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        address: address.clone(),
    };
    let sdk = HerdbookSDK::new(address.clone(), "");
    (app, sdk, address)
}
