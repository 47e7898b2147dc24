//! Assets file adapter: read a restore `project.assets.json` and build the lock file model.
//!
//! This crate is allowed to do filesystem IO. Everything past reading the bytes lives in
//! [`parse`] and works on strings.

#![forbid(unsafe_code)]

mod error;
mod parse;
mod version;

use camino::Utf8Path;
use lockdiag_domain::model::LockFileModel;

pub use error::AssetsError;
pub use parse::parse_assets_json;
pub use version::normalize_version;

/// Fuzz-friendly API. These functions never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as an assets document, discarding the model.
    pub fn parse_assets_json(text: &str) -> Result<(), crate::AssetsError> {
        let _ = crate::parse::parse_assets_json(text)?;
        Ok(())
    }

    /// Normalize an arbitrary version string.
    pub fn normalize_version(raw: &str) -> String {
        crate::version::normalize_version(raw)
    }
}

/// Read and parse the assets file at `path`.
pub fn read_assets_file(path: &Utf8Path) -> Result<LockFileModel, AssetsError> {
    let text = std::fs::read_to_string(path).map_err(|source| AssetsError::Read {
        path: path.to_owned(),
        source,
    })?;
    let model = parse_assets_json(&text)?;
    tracing::debug!(
        path = %path,
        targets = model.targets.len(),
        logs = model.log_messages.len(),
        "read assets file"
    );
    Ok(model)
}
