use crate::shared::entity::ID;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Storage quota of the hosted database plan
pub const DATABASE_LIMIT_MB: f64 = 512.0;
/// Days of `MetricsRecord` history that are kept
pub const METRICS_RETENTION_DAYS: i64 = 30;

const WARNING_PERCENTAGE: f64 = 70.0;
const CRITICAL_PERCENTAGE: f64 = 90.0;

/// One daily sample of database usage
#[derive(Debug, Clone)]
pub struct MetricsRecord {
    pub id: ID,
    pub timestamp: DateTime<Utc>,
    pub database_mb: f64,
    pub documents_count: u64,
    pub users_count: u64,
    pub horses_count: u64,
    pub riders_count: u64,
}

impl MetricsRecord {
    /// Records with a timestamp before this are pruned
    pub fn retention_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(METRICS_RETENTION_DAYS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageStatus {
    Ok,
    Warning,
    Critical,
}

impl Display for UsageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatabaseUsage {
    pub used_mb: f64,
    pub limit_mb: f64,
    /// Rounded to two decimals
    pub percentage: f64,
    pub status: UsageStatus,
}

impl DatabaseUsage {
    pub fn new(used_mb: f64) -> Self {
        let percentage = used_mb / DATABASE_LIMIT_MB * 100.0;
        let status = if percentage > CRITICAL_PERCENTAGE {
            UsageStatus::Critical
        } else if percentage > WARNING_PERCENTAGE {
            UsageStatus::Warning
        } else {
            UsageStatus::Ok
        };

        Self {
            used_mb,
            limit_mb: DATABASE_LIMIT_MB,
            percentage: round2(percentage),
            status,
        }
    }

    pub fn alert(&self) -> Option<String> {
        match self.status {
            UsageStatus::Ok => None,
            UsageStatus::Warning => Some(format!(
                "Base de datos al {}% de capacidad. Considera limpiar datos.",
                self.percentage.round()
            )),
            UsageStatus::Critical => Some(format!(
                "Base de datos al {}% de capacidad. ¡Acción requerida!",
                self.percentage.round()
            )),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    round2(bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn usage_thresholds() {
        assert_eq!(DatabaseUsage::new(100.0).status, UsageStatus::Ok);
        assert_eq!(DatabaseUsage::new(300.0).status, UsageStatus::Ok);
        assert_eq!(DatabaseUsage::new(400.0).status, UsageStatus::Warning);
        assert_eq!(DatabaseUsage::new(470.0).status, UsageStatus::Critical);
        assert!(DatabaseUsage::new(10.0).alert().is_none());
        assert!(DatabaseUsage::new(500.0)
            .alert()
            .unwrap()
            .contains("Acción requerida"));
    }

    #[test]
    fn converts_bytes_to_megabytes() {
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(1024 * 1024 * 3 / 2), 1.5);
        assert_eq!(bytes_to_mb(1234), 0.0);
    }
}
