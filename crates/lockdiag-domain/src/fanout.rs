use crate::model::{RawLogEntry, TargetGraphLookup};

/// Attribution of one emitted diagnostic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FanOut {
    /// Target graph name, empty when the entry applies to no target graph.
    pub parent_target: String,
    /// `{name}/{version}`, empty when there is no library id or the graph lacks the library.
    pub parent_package: String,
}

/// Expand an entry into one attribution per resolvable target graph, in `target_graph_ids`
/// order.
///
/// Ids that do not resolve are skipped. When nothing resolves the result is a single
/// unattributed instance, so the output is never empty.
pub fn expand<G: TargetGraphLookup + ?Sized>(entry: &RawLogEntry, graphs: &G) -> Vec<FanOut> {
    let library_id = entry.library_id();

    let expanded: Vec<FanOut> = entry
        .target_graph_ids
        .iter()
        .filter_map(|id| graphs.target_graph(id))
        .map(|graph| FanOut {
            parent_target: graph.name.clone(),
            parent_package: library_id
                .and_then(|id| graph.resolve_library(id))
                .map(|lib| lib.package_id())
                .unwrap_or_default(),
        })
        .collect();

    if expanded.is_empty() {
        vec![FanOut::default()]
    } else {
        expanded
    }
}
