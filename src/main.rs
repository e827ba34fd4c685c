//! HealSumm HTTP server entrypoint.
//!
//! `--health-check` probes `/healthz` and exits; `--batch` processes the
//! articles directory once, writes the results and exits.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use healsumm::config::Config;
use healsumm::evaluation::EvaluationContext;
use healsumm::gateway::{HandlerState, create_router_with_state};
use healsumm::generation::{Backend, BackendConfig, SummaryController};
use healsumm::pipeline::Pipeline;
use healsumm::storage::{ArticleSource, DirectorySource, ResultStore};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let backend_config = BackendConfig::from_env()?;
    let backend = Backend::from_config(&backend_config)?;

    let context = EvaluationContext::with_optional_lexicon(config.domain_lexicon.as_deref());
    let pipeline = Pipeline::new(SummaryController::new(backend), Arc::new(context))
        .with_concurrency(config.batch_concurrency);

    let store = ResultStore::new(config.results_dir.clone());
    store.ensure_dirs()?;
    let articles = DirectorySource::new(config.articles_dir.clone());

    if std::env::args().any(|arg| arg == "--batch") {
        return run_batch(&pipeline, &store, &articles).await;
    }

    let addr: SocketAddr = config.socket_addr().parse()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        backend = %backend_config.kind,
        model = %backend_config.model,
        "HealSumm starting"
    );

    let state = HandlerState::new(pipeline, store, articles);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HealSumm shutdown complete");
    Ok(())
}

async fn run_batch(
    pipeline: &Pipeline<Backend>,
    store: &ResultStore,
    source: &DirectorySource,
) -> anyhow::Result<()> {
    let articles = source.load()?;
    if articles.is_empty() {
        bail!("No .txt files in {}", source.dir().display());
    }

    let report = pipeline.process_batch(&articles).await?;
    store.save_all(&report.records)?;
    store.save_evaluation_csv(&report.records)?;

    for record in &report.records {
        println!(
            "{:<32} words={:<4} target={:<8} fkgl={:<6} coverage={:<6} risk={}{}",
            record.article_id,
            record.word_count,
            record.target_range,
            record.fkgl,
            record.entity_coverage,
            record.risk_level,
            if record.escalate { " (escalate)" } else { "" },
        );
    }
    for skipped in &report.skipped {
        println!("{:<32} skipped: {}", skipped.article_id, skipped.reason);
    }

    tracing::info!(
        processed = report.count(),
        skipped = report.skipped.len(),
        results = %store.summaries_path().display(),
        "Batch results written"
    );
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("HEALSUMM_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8000);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
