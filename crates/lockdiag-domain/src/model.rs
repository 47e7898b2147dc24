use lockdiag_types::{LogCode, LogLevel};
use std::collections::BTreeMap;

/// One record of the restore log, as read from the lock file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLogEntry {
    pub code: LogCode,
    pub level: LogLevel,
    pub message: String,
    pub file_path: Option<String>,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
    pub library_id: Option<String>,
    /// Target graphs the entry applies to, in the order the restore wrote them.
    pub target_graph_ids: Vec<String>,
}

impl RawLogEntry {
    pub fn new(code: LogCode, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            code,
            level,
            message: message.into(),
            file_path: None,
            start_line: 0,
            start_column: 0,
            end_line: 0,
            end_column: 0,
            library_id: None,
            target_graph_ids: Vec::new(),
        }
    }

    /// Library id, treating an empty string as absent.
    pub fn library_id(&self) -> Option<&str> {
        self.library_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedLibrary {
    pub name: String,
    /// Already normalized by whoever built the target graph.
    pub version: String,
}

impl ResolvedLibrary {
    /// `{name}/{version}`, the form used for parent package attribution.
    pub fn package_id(&self) -> String {
        format!("{}/{}", self.name, self.version)
    }
}

/// A named dependency-resolution context (typically one per target framework).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetGraph {
    pub name: String,
    /// Keyed by lower-cased library name.
    libraries: BTreeMap<String, ResolvedLibrary>,
}

impl TargetGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            libraries: BTreeMap::new(),
        }
    }

    pub fn with_library(mut self, name: &str, version: &str) -> Self {
        self.insert_library(ResolvedLibrary {
            name: name.to_string(),
            version: version.to_string(),
        });
        self
    }

    /// Later inserts of the same (case-insensitive) name win.
    pub fn insert_library(&mut self, library: ResolvedLibrary) {
        self.libraries
            .insert(library.name.to_ascii_lowercase(), library);
    }

    /// Library ids match library names case-insensitively.
    pub fn resolve_library(&self, library_id: &str) -> Option<&ResolvedLibrary> {
        self.libraries.get(&library_id.to_ascii_lowercase())
    }

    pub fn libraries(&self) -> impl Iterator<Item = &ResolvedLibrary> {
        self.libraries.values()
    }
}

/// Lookup capability from target graph id to target graph.
pub trait TargetGraphLookup {
    fn target_graph(&self, id: &str) -> Option<&TargetGraph>;
}

/// In-memory lock file: the target graphs plus the restore log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LockFileModel {
    pub targets: Vec<TargetGraph>,
    pub log_messages: Vec<RawLogEntry>,
}

impl TargetGraphLookup for LockFileModel {
    fn target_graph(&self, id: &str) -> Option<&TargetGraph> {
        self.targets.iter().find(|t| t.name == id)
    }
}

impl<L: TargetGraphLookup + ?Sized> TargetGraphLookup for &L {
    fn target_graph(&self, id: &str) -> Option<&TargetGraph> {
        (**self).target_graph(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_library_ignores_case() {
        let graph = TargetGraph::new("net8.0").with_library("Newtonsoft.Json", "13.0.3");
        let lib = graph.resolve_library("newtonsoft.json").expect("library");
        assert_eq!(lib.package_id(), "Newtonsoft.Json/13.0.3");
        assert!(graph.resolve_library("System.Text.Json").is_none());
    }

    #[test]
    fn lock_file_lookup_matches_exact_target_name() {
        let lock_file = LockFileModel {
            targets: vec![TargetGraph::new(".NETCoreApp,Version=v1.0")],
            log_messages: Vec::new(),
        };
        assert!(lock_file.target_graph(".NETCoreApp,Version=v1.0").is_some());
        assert!(lock_file.target_graph(".NETFramework,Version=v4.6.1").is_none());
    }

    #[test]
    fn empty_library_id_is_absent() {
        let mut entry = RawLogEntry::new(LogCode::parse("NU1000"), LogLevel::Warning, "m");
        entry.library_id = Some(String::new());
        assert!(entry.library_id().is_none());
    }
}
