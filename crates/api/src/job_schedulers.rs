use crate::{
    admin::{CollectMetricsUseCase, CreateBackupUseCase, SendDailyReportUseCase},
    shared::usecase::{execute, UseCase},
};
use actix_web::rt::time::sleep;
use chrono::{Duration as ChronoDuration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use herdbook_domain::BackupInitiator;
use herdbook_infra::HerdbookContext;
use std::{fmt::Debug, time::Duration};
use tracing::info;

/// Millis from `now_millis` until the next time the wall clock in `tz`
/// shows `at`. A time skipped by a DST change runs an hour later.
pub fn get_start_delay(now_millis: i64, tz: &Tz, at: NaiveTime) -> i64 {
    let now = match Utc.timestamp_millis_opt(now_millis).single() {
        Some(now) => now.with_timezone(tz),
        None => return 0,
    };

    let mut date = now.date_naive();
    loop {
        let local = date.and_time(at);
        let next = tz
            .from_local_datetime(&local)
            .earliest()
            .or_else(|| {
                tz.from_local_datetime(&(local + ChronoDuration::hours(1)))
                    .earliest()
            });
        match next {
            Some(next) if next > now => return (next - now).num_milliseconds(),
            _ => date += ChronoDuration::days(1),
        }
    }
}

fn daily_at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Runs the use case built by `usecase` every day at `at` in the
/// configured timezone
fn start_daily_job<U, F>(ctx: HerdbookContext, at: NaiveTime, usecase: F)
where
    U: UseCase + 'static,
    U::Error: Debug,
    F: Fn() -> U + 'static,
{
    actix_web::rt::spawn(async move {
        loop {
            let now = ctx.sys.get_timestamp_millis();
            let delay = get_start_delay(now, &ctx.config.timezone, at);
            info!(
                "Next {} run in {} minutes",
                U::NAME,
                delay / (1000 * 60)
            );
            sleep(Duration::from_millis(delay as u64)).await;

            let _ = execute(usecase(), &ctx).await;
        }
    });
}

pub fn start_backup_job(ctx: HerdbookContext) {
    start_daily_job(ctx, daily_at(3, 0), || CreateBackupUseCase {
        initiator: BackupInitiator::Scheduler,
    });
}

pub fn start_metrics_job(ctx: HerdbookContext) {
    start_daily_job(ctx, daily_at(3, 30), || CollectMetricsUseCase);
}

pub fn start_daily_report_job(ctx: HerdbookContext) {
    start_daily_job(ctx, daily_at(10, 0), || SendDailyReportUseCase);
}
