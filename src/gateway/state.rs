use std::sync::Arc;

use crate::generation::GenerationBackend;
use crate::pipeline::Pipeline;
use crate::storage::{DirectorySource, ResultStore};

pub struct HandlerState<B: GenerationBackend + 'static> {
    pub pipeline: Arc<Pipeline<B>>,

    pub store: Arc<ResultStore>,

    pub articles: Arc<DirectorySource>,
}

impl<B: GenerationBackend + 'static> Clone for HandlerState<B> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            store: Arc::clone(&self.store),
            articles: Arc::clone(&self.articles),
        }
    }
}

impl<B: GenerationBackend + 'static> HandlerState<B> {
    pub fn new(pipeline: Pipeline<B>, store: ResultStore, articles: DirectorySource) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            store: Arc::new(store),
            articles: Arc::new(articles),
        }
    }

    /// Backend kind reported by `/ready`.
    pub fn backend_kind(&self) -> &'static str {
        self.pipeline.controller().backend().kind()
    }
}
