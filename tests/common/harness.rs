//! In-process HTTP server backed by [`MockBackend`].

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use healsumm::MockBackend;
use healsumm::evaluation::EvaluationContext;
use healsumm::gateway::{HandlerState, create_router_with_state};
use healsumm::generation::SummaryController;
use healsumm::pipeline::Pipeline;
use healsumm::storage::{DirectorySource, ResultStore};

#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    pub backend: MockBackend,
    /// `(file stem, text)` pairs written to the articles directory.
    pub articles: Vec<(&'static str, &'static str)>,
    /// Domain terms; when set a lexicon file is written and loaded.
    pub lexicon_terms: Option<Vec<&'static str>>,
    pub concurrency: usize,
}

pub struct TestServer {
    addr: SocketAddr,
    temp_dir: TempDir,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.temp_dir.path().join("results")
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.temp_dir.path().join("articles")
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if tokio::time::timeout(Duration::from_secs(2), &mut self.handle)
            .await
            .is_err()
        {
            self.handle.abort();
        }
    }
}

fn write_lexicon(dir: &Path, terms: &[&str]) -> PathBuf {
    let path = dir.join("lexicon.txt");
    fs::write(&path, terms.join("\n")).expect("Failed to write lexicon");
    path
}

pub async fn spawn_test_server(config: TestServerConfig) -> anyhow::Result<TestServer> {
    let temp_dir = TempDir::new()?;

    let articles_dir = temp_dir.path().join("articles");
    if !config.articles.is_empty() {
        fs::create_dir_all(&articles_dir)?;
        for (stem, text) in &config.articles {
            fs::write(articles_dir.join(format!("{stem}.txt")), text)?;
        }
    }

    let lexicon = config
        .lexicon_terms
        .as_ref()
        .map(|terms| write_lexicon(temp_dir.path(), terms));
    let context = EvaluationContext::with_optional_lexicon(lexicon.as_deref());

    let pipeline = Pipeline::new(SummaryController::new(config.backend), Arc::new(context))
        .with_concurrency(config.concurrency);

    let store = ResultStore::new(temp_dir.path().join("results"));
    store.ensure_dirs()?;

    let state = HandlerState::new(pipeline, store, DirectorySource::new(articles_dir));
    let app = create_router_with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    Ok(TestServer {
        addr,
        temp_dir,
        shutdown_tx: Some(shutdown_tx),
        handle,
    })
}
