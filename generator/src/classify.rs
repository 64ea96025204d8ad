//! Field classification: computes the TypeScript expression for one field.

use std::collections::BTreeMap;

use directus_typegen_core::{
    BASE_TYPES_MODULE, Collection, FieldDescriptor, PRIMARY_KEY_TYPE, RelationKind,
    SYSTEM_COLLECTION_PREFIX, SYSTEM_TYPE_PREFIX, naming,
};

/// Host base types referenced during one generation run.
///
/// Owned by the run: constructed fresh per call, so successive or concurrent
/// generations can never leak referenced names into each other. `PrimaryKey`
/// is referenced from the start since every collection's key field renders
/// as it.
#[derive(Debug, Clone)]
pub struct ImportSet {
    /// Exported name → local alias (for overlay-renamed base types).
    entries: BTreeMap<String, Option<String>>,
}

impl ImportSet {
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(PRIMARY_KEY_TYPE.to_string(), None);
        Self { entries }
    }

    /// Registers a plain reference to a host base type. Never downgrades an
    /// existing aliased entry.
    pub fn reference(&mut self, name: &str) {
        self.entries.entry(name.to_string()).or_insert(None);
    }

    /// Registers an aliased reference (`name as alias`), upgrading any
    /// existing plain entry for the same name.
    pub fn reference_aliased(&mut self, name: &str, alias: &str) {
        self.entries
            .insert(name.to_string(), Some(alias.to_string()));
    }

    /// Renders the import header line: names deduplicated and sorted
    /// ascending, alias syntax where registered.
    pub fn import_line(&self, terminator: &str) -> String {
        let names: Vec<String> = self
            .entries
            .iter()
            .map(|(name, alias)| match alias {
                Some(alias) => format!("{name} as {alias}"),
                None => name.clone(),
            })
            .collect();
        format!(
            "import {{ {} }} from '{BASE_TYPES_MODULE}'{terminator}",
            names.join(", ")
        )
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the type expression for one field.
///
/// Policies, in order:
///
/// 1. The field matching the collection's primary key always renders as the
///    canonical key type, whatever its declared primitive type.
/// 2. Fields without a relation render their scalar classification.
/// 3. `Many`-side fields render as an array of key-or-partial entries
///    (`(Author['id'] | Partial<Author>)[]`), or `any[]` when the related
///    collection is unknown.
/// 4. `One`-side fields render the key-or-partial union without the array,
///    or `any` when unknown.
/// 5. Nullable fields append ` | null` to whatever the above produced.
pub fn classify_field(
    collection: &Collection,
    field: &FieldDescriptor,
    collections: &BTreeMap<String, Collection>,
    imports: &mut ImportSet,
) -> String {
    if field.name == collection.primary {
        return PRIMARY_KEY_TYPE.to_string();
    }

    let mut expression = match field.relation.as_ref() {
        None => field.scalar.ts_type().to_string(),
        Some(link) => match link.related.as_deref() {
            Some(related) => {
                let entry = related_entry_type(related, &link.foreign_key, collections, imports);
                match link.kind {
                    RelationKind::Many => format!("({entry})[]"),
                    RelationKind::One => entry,
                }
            }
            None => match link.kind {
                RelationKind::Many => "any[]".to_string(),
                RelationKind::One => "any".to_string(),
            },
        },
    };

    if field.nullable {
        expression.push_str(" | null");
    }
    expression
}

/// The key-or-partial union for a known related collection:
/// `TypeName['fk'] | Partial<TypeName>`.
///
/// System collections reference the host base type with the system prefix
/// stripped, registering it for import — aliased when the overlay emits a
/// local extension under the stripped name.
fn related_entry_type(
    related: &str,
    foreign_key: &str,
    collections: &BTreeMap<String, Collection>,
    imports: &mut ImportSet,
) -> String {
    let full = naming::type_name_for(related);
    let type_name = if related.starts_with(SYSTEM_COLLECTION_PREFIX) {
        let stripped = match full.strip_prefix(SYSTEM_TYPE_PREFIX) {
            Some(rest) if !rest.is_empty() => rest.to_string(),
            _ => full,
        };
        let overlaid = collections
            .get(related)
            .is_some_and(|collection| collection.has_custom_fields());
        if overlaid {
            imports.reference_aliased(&stripped, &format!("Base{stripped}"));
        } else {
            imports.reference(&stripped);
        }
        stripped
    } else {
        full
    };
    format!("{type_name}['{foreign_key}'] | Partial<{type_name}>")
}
