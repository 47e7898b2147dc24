use crate::error::AssetsError;
use crate::version::normalize_version;
use lockdiag_domain::model::{LockFileModel, RawLogEntry, ResolvedLibrary, TargetGraph};
use lockdiag_types::{LogCode, LogLevel};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct AssetsDocument {
    #[serde(default)]
    targets: BTreeMap<String, Value>,
    #[serde(default)]
    logs: Option<Vec<Value>>,
}

/// Parse the text of an assets file.
///
/// Only `targets` and `logs` are read; other sections are ignored. Each log entry is read on its
/// own: entries without a code are skipped, other malformed fields degrade to their defaults.
pub fn parse_assets_json(text: &str) -> Result<LockFileModel, AssetsError> {
    let doc: AssetsDocument = serde_json::from_str(text)?;

    let mut targets = Vec::with_capacity(doc.targets.len());
    for (name, body) in doc.targets {
        targets.push(parse_target(name, body)?);
    }

    let log_messages = doc
        .logs
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter_map(|(index, value)| log_entry(index, value))
        .collect();

    Ok(LockFileModel {
        targets,
        log_messages,
    })
}

fn parse_target(name: String, body: Value) -> Result<TargetGraph, AssetsError> {
    let libraries = match body {
        Value::Object(map) => map,
        Value::Null => Default::default(),
        _ => {
            return Err(AssetsError::Shape(format!("target `{name}` is not an object")));
        }
    };

    let mut graph = TargetGraph::new(name);
    for key in libraries.keys() {
        match key.split_once('/') {
            Some((lib, version)) if !lib.is_empty() => graph.insert_library(ResolvedLibrary {
                name: lib.to_string(),
                version: normalize_version(version),
            }),
            _ => tracing::warn!(
                target_graph = %graph.name,
                key = %key,
                "skipping library key without a version"
            ),
        }
    }
    Ok(graph)
}

fn log_entry(index: usize, value: &Value) -> Option<RawLogEntry> {
    let Some(code) = value.get("code").and_then(Value::as_str) else {
        tracing::warn!(index, "skipping log entry without a code");
        return None;
    };

    let level = str_field(value, "level")
        .and_then(LogLevel::parse)
        .unwrap_or(LogLevel::Information);
    let target_graph_ids = value
        .get("targetGraphs")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Some(RawLogEntry {
        code: LogCode::parse(code),
        level,
        message: str_field(value, "message").unwrap_or_default().to_string(),
        file_path: str_field(value, "filePath").map(str::to_string),
        start_line: position(value, "startLineNumber"),
        start_column: position(value, "startColumnNumber"),
        end_line: position(value, "endLineNumber"),
        end_column: position(value, "endColumnNumber"),
        library_id: str_field(value, "libraryId").map(str::to_string),
        target_graph_ids,
    })
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Non-negative position that fits in `u32`, else 0.
fn position(value: &Value, key: &str) -> u32 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}
