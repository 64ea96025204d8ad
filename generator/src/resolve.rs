//! Relation resolution: attaches directional links to both sides of every
//! relation record.

use std::collections::BTreeMap;

use directus_typegen_core::{Collection, RelationKind, RelationLink, RelationRecord};

use crate::diagnostics::GenerationDiagnostics;

/// Walks the relation records and attaches a [`RelationLink`] to the correct
/// field on each side.
///
/// The one-side alias field receives a `Many` link (it holds multiple
/// related rows); the many-side foreign-key field receives a `One` link.
/// Records without extended metadata are malformed: they produce a warning
/// and no link. A side whose target collection or field is not in the
/// indexed set is dropped silently — resolution is independent per side.
/// Self-relations set both links on the same collection without recursion.
pub fn resolve_relations(
    collections: &mut BTreeMap<String, Collection>,
    relations: &[RelationRecord],
    diagnostics: &mut GenerationDiagnostics,
) {
    for record in relations {
        let Some(meta) = record.meta.as_ref() else {
            diagnostics.malformed_records += 1;
            tracing::warn!(
                collection = %record.collection,
                field = %record.field,
                "relation record has no extended metadata; skipping"
            );
            diagnostics.warn(format!(
                "Relation on field '{}' in collection '{}' has no meta. \
                 Maybe missing a relation inside directus_relations table.",
                record.field, record.collection
            ));
            continue;
        };
        let Some(one_collection) = meta.one_collection.as_deref() else {
            continue;
        };

        // Foreign-key names are resolved up front, before any side is
        // mutated, so self-relations see a consistent view.
        let many_fk = meta
            .many_collection
            .as_deref()
            .and_then(|name| collections.get(name))
            .map(|collection| collection.primary.clone())
            .unwrap_or_else(|| "id".to_string());
        let one_fk = record
            .schema
            .as_ref()
            .and_then(|schema| schema.foreign_key_column.clone())
            .or_else(|| {
                collections
                    .get(one_collection)
                    .map(|collection| collection.primary.clone())
            })
            .unwrap_or_else(|| "id".to_string());

        // One side: the alias field listing the many related rows.
        if let Some(one_field) = meta.one_field.as_deref() {
            let link = RelationLink {
                kind: RelationKind::Many,
                related: meta.many_collection.clone(),
                foreign_key: many_fk,
            };
            attach(collections, one_collection, one_field, link, diagnostics);
        }

        // Many side: the foreign-key field pointing at a single row.
        if let Some(many_collection) = meta.many_collection.as_deref() {
            if let Some(many_field) = meta.many_field.as_deref() {
                let link = RelationLink {
                    kind: RelationKind::One,
                    related: Some(one_collection.to_string()),
                    foreign_key: one_fk,
                };
                attach(collections, many_collection, many_field, link, diagnostics);
            }
        }
    }
}

fn attach(
    collections: &mut BTreeMap<String, Collection>,
    collection: &str,
    field: &str,
    link: RelationLink,
    diagnostics: &mut GenerationDiagnostics,
) {
    let target = collections
        .get_mut(collection)
        .and_then(|collection| collection.field_mut(field));
    match target {
        Some(field) => {
            field.relation = Some(link);
            diagnostics.resolved_sides += 1;
        }
        None => {
            // Dangling reference: the target lives outside the indexed set.
            diagnostics.dropped_sides += 1;
        }
    }
}
