use crate::error::HerdbookError;
use actix_web::HttpRequest;
use herdbook_domain::{User, ID};
use herdbook_infra::HerdbookContext;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // Id of the user the token was issued for
    iat: i64,    // Issued at (as UTC timestamp in seconds)
    exp: i64,    // Expiration time (as UTC timestamp in seconds)
}

fn now_secs(ctx: &HerdbookContext) -> i64 {
    ctx.sys.get_timestamp_millis() / 1000
}

/// Issues a session token for the user, valid for `jwt_lifetime_secs`
pub fn create_token(user_id: &ID, ctx: &HerdbookContext) -> Result<String, HerdbookError> {
    let iat = now_secs(ctx);
    let claims = Claims {
        sub: user_id.as_string(),
        iat,
        exp: iat + ctx.config.jwt_lifetime_secs,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(ctx.config.jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        error!("Unable to create session token: {:?}", e);
        HerdbookError::InternalError
    })
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .replace("Bearer", "")
        .replace("bearer", "")
        .trim()
        .to_string()
}

/// Expiry is checked against the context clock instead of the system clock
fn decode_token(token: &str, ctx: &HerdbookContext) -> anyhow::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(ctx.config.jwt_secret.as_bytes()),
        &validation,
    )?
    .claims;

    if claims.exp <= now_secs(ctx) {
        return Err(anyhow::Error::msg("Token has expired"));
    }
    Ok(claims)
}

async fn auth_user_req(req: &HttpRequest, ctx: &HerdbookContext) -> Option<User> {
    let token = req.headers().get("authorization")?;
    let token = parse_authtoken_header(token.to_str().ok()?);
    let claims = decode_token(&token, ctx).ok()?;
    let user_id = claims.sub.parse::<ID>().ok()?;
    ctx.repos.users.find(&user_id).await
}

/// Resolves the user behind the bearer token of the request
pub async fn protect_route(req: &HttpRequest, ctx: &HerdbookContext) -> Result<User, HerdbookError> {
    match auth_user_req(req, ctx).await {
        Some(user) => Ok(user),
        None => Err(HerdbookError::Unauthorized(
            "Unable to find user from credentials".into(),
        )),
    }
}

/// Like `protect_route`, but the user also has to be an admin
pub async fn protect_admin_route(
    req: &HttpRequest,
    ctx: &HerdbookContext,
) -> Result<User, HerdbookError> {
    let user = protect_route(req, ctx).await?;
    if user.is_admin(&ctx.config.admin_emails) {
        Ok(user)
    } else {
        Err(HerdbookError::Forbidden("Admin access required".into()))
    }
}

pub fn hash_password(password: &str, ctx: &HerdbookContext) -> Result<String, HerdbookError> {
    bcrypt::hash(password, ctx.config.password_hash_cost).map_err(|e| {
        error!("Unable to hash password: {:?}", e);
        HerdbookError::InternalError
    })
}

/// A malformed stored hash never verifies
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;
    use chrono::Utc;
    use herdbook_domain::Language;
    use herdbook_infra::{setup_context, StaticTimeSys};
    use std::sync::Arc;

    async fn setup_user(ctx: &HerdbookContext, email: &str) -> User {
        let user = User {
            id: Default::default(),
            email: email.into(),
            password_hash: String::new(),
            name: "Marta".into(),
            language: Language::Es,
            security_question: None,
            security_answer: None,
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        ctx.repos.users.insert(&user).await.unwrap();
        user
    }

    fn request_with_token(token: &str) -> HttpRequest {
        TestRequest::default()
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_http_request()
    }

    #[actix_web::test]
    async fn decodes_valid_token_for_existing_user() {
        let ctx = setup_context().await;
        let user = setup_user(&ctx, "marta@example.com").await;
        let token = create_token(&user.id, &ctx).unwrap();

        let res = protect_route(&request_with_token(&token), &ctx).await;
        assert_eq!(res.unwrap().id, user.id);
    }

    #[actix_web::test]
    async fn rejects_expired_token() {
        let mut ctx = setup_context().await;
        let user = setup_user(&ctx, "marta@example.com").await;
        ctx.sys = Arc::new(StaticTimeSys(1_700_000_000_000));
        let token = create_token(&user.id, &ctx).unwrap();

        let expired_at = 1_700_000_000_000 + ctx.config.jwt_lifetime_secs * 1000;
        ctx.sys = Arc::new(StaticTimeSys(expired_at));
        assert!(protect_route(&request_with_token(&token), &ctx).await.is_err());
    }

    #[actix_web::test]
    async fn rejects_token_signed_with_other_secret() {
        let mut ctx = setup_context().await;
        let user = setup_user(&ctx, "marta@example.com").await;
        let token = create_token(&user.id, &ctx).unwrap();

        ctx.config.jwt_secret = "another-secret".into();
        assert!(protect_route(&request_with_token(&token), &ctx).await.is_err());
    }

    #[actix_web::test]
    async fn rejects_token_of_deleted_user() {
        let ctx = setup_context().await;
        let user = setup_user(&ctx, "marta@example.com").await;
        let token = create_token(&user.id, &ctx).unwrap();
        ctx.repos.users.delete(&user.id).await.unwrap();

        assert!(protect_route(&request_with_token(&token), &ctx).await.is_err());
    }

    #[actix_web::test]
    async fn rejects_garbage_token_and_missing_header() {
        let ctx = setup_context().await;
        assert!(protect_route(&request_with_token("sajfosajfposajfopaso12"), &ctx)
            .await
            .is_err());

        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());
    }

    #[actix_web::test]
    async fn admin_route_requires_admin() {
        let mut ctx = setup_context().await;
        let user = setup_user(&ctx, "boss@example.com").await;
        let token = create_token(&user.id, &ctx).unwrap();

        let res = protect_admin_route(&request_with_token(&token), &ctx).await;
        assert!(matches!(res, Err(HerdbookError::Forbidden(_))));

        ctx.config.admin_emails = vec!["boss@example.com".into()];
        let res = protect_admin_route(&request_with_token(&token), &ctx).await;
        assert!(res.is_ok());
    }

    #[actix_web::test]
    async fn hashes_and_verifies_passwords() {
        let mut ctx = setup_context().await;
        ctx.config.password_hash_cost = 4;
        let hash = hash_password("caballo123", &ctx).unwrap();
        assert!(verify_password("caballo123", &hash));
        assert!(!verify_password("caballo124", &hash));
        assert!(!verify_password("caballo123", "not-a-hash"));
    }
}
