//! Collection indexing: the first pipeline stage.

use std::collections::BTreeMap;

use directus_typegen_core::{Collection, SchemaSnapshot};

/// Builds the name-keyed collection map from a snapshot.
///
/// Entries lacking a declared name are skipped. Fields are ingested in
/// declared order with their defaults resolved; no relation links exist yet
/// at this stage. The input is not mutated. The map's ordering is
/// incidental — the renderer imposes the final ordering.
pub fn index_collections(snapshot: &SchemaSnapshot) -> BTreeMap<String, Collection> {
    snapshot
        .collections
        .iter()
        .filter_map(Collection::from_raw)
        .map(|collection| (collection.name.clone(), collection))
        .collect()
}
