use std::{process, sync::Arc};

use tokio::{fs, io::AsyncWriteExt};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;
use vitrine::{
    application::{
        error::AppError, feedback::FeedbackService, portfolio::PortfolioService,
        render::RenderedDocument,
    },
    config,
    domain::portfolio::PortfolioConfig,
    infra::{
        error::InfraError,
        http::{self, HttpState},
        store::JsonFileStore,
        telemetry,
    },
};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Render(args) => run_render(settings, args).await,
    }
}

fn build_services(settings: &config::Settings) -> (Arc<PortfolioService>, Arc<FeedbackService>) {
    let store = Arc::new(JsonFileStore::from_settings(&settings.storage));
    (
        Arc::new(PortfolioService::new(store.clone())),
        Arc::new(FeedbackService::new(store)),
    )
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let (portfolio, feedback) = build_services(&settings);
    let router = http::build_router(HttpState {
        portfolio,
        feedback,
    });

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target: "vitrine::server",
        addr = %settings.server.addr,
        data_dir = %settings.storage.data_dir.display(),
        "preview server listening"
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    info!(target: "vitrine::server", "preview server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(
            target: "vitrine::server",
            error = %err,
            "failed to listen for shutdown signal"
        );
        std::future::pending::<()>().await;
    }
}

async fn run_render(settings: config::Settings, args: config::RenderArgs) -> Result<(), AppError> {
    let (portfolio, _) = build_services(&settings);

    let document: RenderedDocument = match args.input.as_ref() {
        Some(path) => {
            let raw = fs::read_to_string(path).await.map_err(|err| {
                AppError::from(InfraError::configuration(format!(
                    "failed to read `{}`: {err}",
                    path.display()
                )))
            })?;
            let config = PortfolioConfig::from_json(&raw)?;
            portfolio.preview(&config)?
        }
        None => portfolio.preview_current().await?,
    };

    let output = if args.source {
        document.source
    } else {
        document.visual
    };

    match args.output.as_ref() {
        Some(path) => {
            fs::write(path, output.as_bytes())
                .await
                .map_err(|err| AppError::from(InfraError::from(err)))?;
            info!(
                target: "vitrine::render",
                path = %path.display(),
                bytes = output.len(),
                "document written"
            );
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(output.as_bytes())
                .await
                .map_err(|err| AppError::from(InfraError::from(err)))?;
            stdout
                .flush()
                .await
                .map_err(|err| AppError::from(InfraError::from(err)))?;
        }
    }

    Ok(())
}
