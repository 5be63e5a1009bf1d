mod admin;
mod association;
mod auth;
mod budget;
mod competition;
mod error;
mod expense;
mod horse;
mod job_schedulers;
mod palmares;
mod reminder;
mod rider;
mod shared;
mod status;
mod supplier;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use herdbook_infra::HerdbookContext;
use job_schedulers::{start_backup_job, start_daily_report_job, start_metrics_job};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    admin::configure_routes(cfg);
    association::configure_routes(cfg);
    auth::configure_routes(cfg);
    budget::configure_routes(cfg);
    competition::configure_routes(cfg);
    expense::configure_routes(cfg);
    horse::configure_routes(cfg);
    palmares::configure_routes(cfg);
    reminder::configure_routes(cfg);
    rider::configure_routes(cfg);
    status::configure_routes(cfg);
    supplier::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: HerdbookContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: HerdbookContext) {
        start_backup_job(context.clone());
        start_metrics_job(context.clone());
        start_daily_report_job(context);
    }

    async fn configure_server(context: HerdbookContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
