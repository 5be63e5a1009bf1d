use super::collect_metrics::CollectMetricsUseCase;
use crate::shared::usecase::UseCase;
use herdbook_domain::{metrics::round2, BackupSnapshot, DatabaseUsage, MetricsRecord};
use herdbook_infra::{HerdbookContext, Notification};
use tracing::info;

/// Summarizes the latest metrics and backup for the report recipient
#[derive(Debug)]
pub struct SendDailyReportUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NotifierError,
}

fn render_report(
    metrics: &MetricsRecord,
    last_backup: Option<&BackupSnapshot>,
    backup_count: usize,
) -> String {
    let usage = DatabaseUsage::new(metrics.database_mb);
    let mut lines = vec![
        format!("Fecha: {}", metrics.timestamp.format("%d/%m/%Y %H:%M UTC")),
        format!(
            "Base de datos: {} MB de {} MB ({}%, {})",
            round2(usage.used_mb),
            usage.limit_mb,
            usage.percentage,
            usage.status
        ),
        format!("Documentos: {}", metrics.documents_count),
        format!(
            "Usuarios: {}, caballos: {}, jinetes: {}",
            metrics.users_count, metrics.horses_count, metrics.riders_count
        ),
    ];
    match last_backup {
        Some(backup) => lines.push(format!(
            "Backups: {}, el último del {} ({} MB)",
            backup_count,
            backup.created_at.format("%d/%m/%Y %H:%M UTC"),
            backup.size_mb
        )),
        None => lines.push("Backups: ninguno".into()),
    }
    if let Some(alert) = usage.alert() {
        lines.push(format!("Alerta: {}", alert));
    }
    lines.join("\n")
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDailyReportUseCase {
    type Response = Notification;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDailyReport";

    async fn execute(&mut self, ctx: &HerdbookContext) -> Result<Self::Response, Self::Error> {
        let metrics = match ctx.repos.metrics.latest().await {
            Some(metrics) => metrics,
            None => CollectMetricsUseCase
                .execute(ctx)
                .await
                .map_err(|_| UseCaseError::StorageError)?,
        };
        let backups = ctx
            .repos
            .backups
            .list_snapshots(None)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let notification = Notification {
            recipient: ctx.config.report_recipient.clone().unwrap_or_default(),
            subject: format!(
                "Herdbook - Informe diario {}",
                ctx.today().format("%d/%m/%Y")
            ),
            body: render_report(&metrics, backups.first(), backups.len()),
        };
        ctx.notifier
            .send(&notification)
            .await
            .map_err(|_| UseCaseError::NotifierError)?;

        info!("Daily report sent");
        Ok(notification)
    }
}
