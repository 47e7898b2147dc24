use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssetsError {
    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid assets JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid assets document: {0}")]
    Shape(String),
}
