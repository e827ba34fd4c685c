use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read lexicon {path}: {source}")]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon {path} contains no terms")]
    EmptyLexicon { path: PathBuf },

    #[error("no usable lexicon terms supplied")]
    NoTerms,

    #[error("failed to compile lexicon pattern: {0}")]
    Pattern(#[from] regex::Error),
}
