mod admin_check;
mod collect_metrics;
mod create_backup;
mod get_backups;
mod restore_backup;
mod send_daily_report;

use actix_web::web;
use admin_check::admin_check_controller;
use create_backup::create_backup_controller;
use get_backups::get_backups_controller;
use restore_backup::restore_backup_controller;

pub use collect_metrics::CollectMetricsUseCase;
pub use create_backup::CreateBackupUseCase;
pub use send_daily_report::SendDailyReportUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/check", web::get().to(admin_check_controller));
    cfg.route("/admin/backup", web::post().to(create_backup_controller));
    cfg.route("/admin/backups", web::get().to(get_backups_controller));
    cfg.route(
        "/admin/restore/{backup_id}",
        web::post().to(restore_backup_controller),
    );
}
