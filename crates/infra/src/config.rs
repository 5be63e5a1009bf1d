use herdbook_domain::Tz;
use herdbook_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret used to sign the session tokens. Tokens do not survive a
    /// restart when this is generated.
    pub jwt_secret: String,
    /// Lifetime of a session token in seconds
    pub jwt_lifetime_secs: i64,
    /// Users with these emails are admins regardless of their `is_admin` flag
    pub admin_emails: Vec<String>,
    /// Timezone of the daily triggers and of what counts as "today"
    pub timezone: Tz,
    /// Who receives the daily usage report
    pub report_recipient: Option<String>,
    /// bcrypt cost used when hashing passwords
    pub password_hash_cost: u32,
}

impl Config {
    pub fn new() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("Did not find JWT_SECRET environment variable. Going to create one, sessions will not survive a restart.");
                create_random_secret(32)
            }
        };
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };
        let admin_emails = std::env::var("ADMIN_EMAILS")
            .map(|emails| parse_emails(&emails))
            .unwrap_or_default();
        let default_timezone = chrono_tz::Europe::Madrid;
        let timezone = match std::env::var("SCHEDULER_TIMEZONE") {
            Ok(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given SCHEDULER_TIMEZONE: {} is not valid, falling back to: {}.",
                        tz, default_timezone
                    );
                    default_timezone
                }
            },
            Err(_) => default_timezone,
        };
        let report_recipient = std::env::var("REPORT_RECIPIENT")
            .ok()
            .filter(|r| !r.is_empty());
        if report_recipient.is_none() {
            info!("Did not find REPORT_RECIPIENT environment variable. Daily reports will only be logged.");
        }

        Self {
            port,
            jwt_secret,
            jwt_lifetime_secs: 60 * 60 * 24 * 7, // 7 days
            admin_emails,
            timezone,
            report_recipient,
            password_hash_cost: 12,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_emails(emails: &str) -> Vec<String> {
    emails
        .split(',')
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_admin_emails() {
        assert_eq!(
            parse_emails(" Admin@Example.com, ,ops@example.com"),
            vec!["admin@example.com".to_string(), "ops@example.com".to_string()]
        );
        assert!(parse_emails("").is_empty());
    }
}
