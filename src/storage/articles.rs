use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::{StorageError, StorageResult};
use crate::pipeline::Article;

const ARTICLE_EXTENSION: &str = "txt";

/// Supplies the articles for a batch run.
pub trait ArticleSource: Send + Sync {
    fn load(&self) -> StorageResult<Vec<Article>>;
}

/// Reads `*.txt` files from a directory; see [`load_articles`].
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArticleSource for DirectorySource {
    fn load(&self) -> StorageResult<Vec<Article>> {
        load_articles(&self.dir)
    }
}

/// Reads every `*.txt` file in `dir`, sorted by file name.
///
/// The article id is the file stem and the text is trimmed. A missing
/// directory yields no articles.
pub fn load_articles(dir: &Path) -> StorageResult<Vec<Article>> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "Articles directory missing");
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| StorageError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == ARTICLE_EXTENSION)
        })
        .collect();
    paths.sort();

    let mut articles = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|e| StorageError::io(&path, e))?;
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        articles.push(Article::new(id, text.trim()));
    }

    info!(dir = %dir.display(), count = articles.len(), "Loaded articles");
    Ok(articles)
}
