//! System collection overlay: decides how (and whether) each collection is
//! emitted.

use directus_typegen_core::{
    Collection, FieldDescriptor, SYSTEM_TYPE_PREFIX, naming,
};

use crate::classify::ImportSet;

/// Emission plan for one collection.
#[derive(Debug)]
pub enum CollectionPlan<'a> {
    /// Built-in collection with no project-added fields: not emitted at all,
    /// the host catalog already ships its shape.
    Skip,
    /// Built-in collection with project-added fields: emitted as an
    /// extension of the imported base type, body restricted to the
    /// non-system fields.
    Extension {
        type_name: String,
        base_alias: String,
        fields: Vec<&'a FieldDescriptor>,
    },
    /// Project collection, emitted in full.
    Plain {
        type_name: String,
        fields: Vec<&'a FieldDescriptor>,
    },
}

/// Plans one collection's emission.
///
/// For built-in collections the stripped PascalCase singular becomes the
/// local type name and the host base type is registered for import under a
/// `Base`-prefixed alias. System-flagged fields never reach the emitted
/// body.
pub fn plan_collection<'a>(
    collection: &'a Collection,
    imports: &mut ImportSet,
) -> CollectionPlan<'a> {
    if !collection.is_system() {
        return CollectionPlan::Plain {
            type_name: naming::type_name_for(&collection.name),
            fields: collection.fields.iter().collect(),
        };
    }

    if !collection.has_custom_fields() {
        return CollectionPlan::Skip;
    }

    let full = naming::type_name_for(&collection.name);
    let type_name = match full.strip_prefix(SYSTEM_TYPE_PREFIX) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => full,
    };
    let base_alias = format!("Base{type_name}");
    imports.reference_aliased(&type_name, &base_alias);

    CollectionPlan::Extension {
        fields: collection
            .fields
            .iter()
            .filter(|field| !field.system)
            .collect(),
        type_name,
        base_alias,
    }
}
