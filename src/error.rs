use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the data core.
///
/// Row-level problems (an unparsable date, a non-numeric amount) are *not*
/// errors: the loader drops or floors those rows per its tolerance policy
/// and only logs a count. The variants here are the two conditions a caller
/// actually has to react to, plus export failures.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source file is missing, unreadable, or not parseable as tabular
    /// data at all. Fatal; there is no retry.
    #[error("cannot read data source {path}: {source}")]
    DataSource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The current filter selection matched zero rows. Whether this aborts
    /// the render pass or shows an empty state is the caller's policy.
    #[error("no records match the current filters")]
    EmptyResult,

    /// Serializing a table to CSV failed.
    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),
}

impl DataError {
    pub(crate) fn data_source(path: &std::path::Path, source: csv::Error) -> Self {
        DataError::DataSource {
            path: path.to_path_buf(),
            source,
        }
    }
}
