//! Result persistence and article loading.
//!
//! - [`ResultStore`]: `summaries.json` (pretty JSON array of
//!   [`ResultRecord`](crate::pipeline::ResultRecord)) and `evaluation.csv`.
//! - [`load_articles`] / [`DirectorySource`]: batch input from a directory of
//!   `*.txt` files.

pub mod articles;
pub mod csv;
pub mod error;
pub mod results;


pub use articles::{ArticleSource, DirectorySource, load_articles};
pub use csv::{EVALUATION_COLUMNS, evaluation_csv};
pub use error::{StorageError, StorageResult};
pub use results::ResultStore;

/// JSON results file name inside the results directory.
pub const SUMMARIES_FILE: &str = "summaries.json";

/// CSV export file name inside the results directory.
pub const EVALUATION_FILE: &str = "evaluation.csv";
