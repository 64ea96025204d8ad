//! Rendering: deterministic, formatted type text from the resolved
//! collection map.

use std::collections::BTreeMap;

use directus_typegen_core::{Collection, FieldDescriptor, naming};

use crate::classify::{ImportSet, classify_field};
use crate::overlay::{CollectionPlan, plan_collection};

/// Formatting options, read once per call and immutable during the run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Indentation width in space characters.
    pub spaces: usize,
    /// Use a single tab character per indent level instead of spaces.
    pub use_tabs: bool,
    /// Append a statement terminator to each emitted line.
    pub trailing_semicolons: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            spaces: 2,
            use_tabs: false,
            trailing_semicolons: false,
        }
    }
}

impl GenerateOptions {
    fn indent(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.spaces)
        }
    }

    fn terminator(&self) -> &'static str {
        if self.trailing_semicolons { ";" } else { "" }
    }
}

/// The name of the rollup directory type mapping every surviving collection
/// to its generated type.
pub const ROLLUP_TYPE_NAME: &str = "CustomDirectusTypes";

/// Renders the full document: import header, one type block per surviving
/// collection in ascending name order, and the rollup type.
///
/// Within a block, plain fields appear in schema order followed by relation
/// fields in ascending field-name order; a field consumed by a relation
/// link never appears twice. Output is byte-stable for a fixed input.
pub fn render_document(
    collections: &BTreeMap<String, Collection>,
    options: &GenerateOptions,
) -> String {
    let indent = options.indent();
    let terminator = options.terminator();
    let mut imports = ImportSet::new();
    let mut body = String::new();
    let mut rollup_members: Vec<String> = Vec::new();

    // BTreeMap iteration order is the required ascending collection order.
    for (name, collection) in collections {
        let (type_name, base_alias, fields) = match plan_collection(collection, &mut imports) {
            CollectionPlan::Skip => continue,
            CollectionPlan::Extension {
                type_name,
                base_alias,
                fields,
            } => (type_name, Some(base_alias), fields),
            CollectionPlan::Plain { type_name, fields } => (type_name, None, fields),
        };

        let suffix = if collection.singleton { "" } else { "[]" };
        rollup_members.push(format!(
            "{}: {type_name}{suffix}",
            naming::member_name(&naming::to_singular(name))
        ));

        match base_alias {
            Some(base) => body.push_str(&format!("export type {type_name} = {base} & {{\n")),
            None => body.push_str(&format!("export type {type_name} = {{\n")),
        }

        let (plain, mut related): (Vec<&FieldDescriptor>, Vec<&FieldDescriptor>) =
            fields.into_iter().partition(|field| field.relation.is_none());
        related.sort_by(|a, b| a.name.cmp(&b.name));

        for field in plain.into_iter().chain(related) {
            let expression = classify_field(collection, field, collections, &mut imports);
            body.push_str(&format!(
                "{indent}{}: {expression}{terminator}\n",
                naming::member_name(&field.name)
            ));
        }

        body.push_str(&format!("}}{terminator}\n\n"));
    }

    let mut rollup = format!("export type {ROLLUP_TYPE_NAME} = {{\n");
    for member in &rollup_members {
        rollup.push_str(&format!("{indent}{member}{terminator}\n"));
    }
    rollup.push_str(&format!("}}{terminator}\n"));

    format!("{}\n\n{body}{rollup}", imports.import_line(terminator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::GenerationDiagnostics;
    use crate::index::index_collections;
    use crate::resolve::resolve_relations;
    use directus_typegen_core::{RawCollection, RawField, RelationRecord, SchemaSnapshot};

    fn render(snapshot: &SchemaSnapshot, options: &GenerateOptions) -> String {
        let mut collections = index_collections(snapshot);
        let mut diagnostics = GenerationDiagnostics::default();
        resolve_relations(&mut collections, &snapshot.relations, &mut diagnostics);
        render_document(&collections, options)
    }

    #[test]
    fn test_empty_snapshot_renders_import_and_empty_rollup() {
        let text = render(&SchemaSnapshot::default(), &GenerateOptions::default());
        assert_eq!(
            text,
            "import { PrimaryKey } from '@directus/types'\n\n\
             export type CustomDirectusTypes = {\n}\n"
        );
    }

    #[test]
    fn test_collections_sorted_and_fields_ordered() {
        let snapshot = SchemaSnapshot {
            collections: vec![
                RawCollection::new("zines")
                    .with_field(RawField::new("id", Some("integer")))
                    .with_field(RawField::new("title", Some("string"))),
                RawCollection::new("articles")
                    .with_field(RawField::new("id", Some("integer")))
                    .with_field(RawField::new("title", Some("string")))
                    .with_field(RawField::new("summary", Some("text"))),
            ],
            relations: Vec::new(),
        };
        let text = render(&snapshot, &GenerateOptions::default());

        let articles = text.find("export type Article = {").unwrap();
        let zines = text.find("export type Zine = {").unwrap();
        assert!(articles < zines);

        // Plain fields stay in schema order, not alphabetical.
        let title = text.find("  title: string").unwrap();
        let summary = text.find("  summary: string").unwrap();
        assert!(title < summary);
    }

    #[test]
    fn test_relation_fields_follow_plain_fields_sorted_by_name() {
        let snapshot = SchemaSnapshot {
            collections: vec![
                RawCollection::new("articles")
                    .with_field(RawField::new("id", Some("integer")))
                    .with_field(RawField::new("zz_editor", Some("integer")))
                    .with_field(RawField::new("aa_author", Some("integer")))
                    .with_field(RawField::new("title", Some("string"))),
                RawCollection::new("authors")
                    .with_field(RawField::new("id", Some("integer"))),
            ],
            relations: vec![
                RelationRecord::new("authors", "", "articles", "zz_editor"),
                RelationRecord::new("authors", "", "articles", "aa_author"),
            ],
        };
        let text = render(&snapshot, &GenerateOptions::default());

        let title = text.find("title: string").unwrap();
        let author = text.find("aa_author:").unwrap();
        let editor = text.find("zz_editor:").unwrap();
        assert!(title < author, "plain fields come first:\n{text}");
        assert!(author < editor, "relation fields sorted by name:\n{text}");
    }

    #[test]
    fn test_singleton_rollup_member_is_not_an_array() {
        let snapshot = SchemaSnapshot {
            collections: vec![
                RawCollection::new("settings")
                    .singleton()
                    .with_field(RawField::new("id", Some("integer"))),
                RawCollection::new("articles")
                    .with_field(RawField::new("id", Some("integer"))),
            ],
            relations: Vec::new(),
        };
        let text = render(&snapshot, &GenerateOptions::default());
        assert!(text.contains("  article: Article[]\n"));
        assert!(text.contains("  setting: Setting\n"));
    }

    #[test]
    fn test_tabs_replace_space_indentation_only() {
        let snapshot = SchemaSnapshot {
            collections: vec![
                RawCollection::new("articles")
                    .with_field(RawField::new("id", Some("integer")))
                    .with_field(RawField::new("title", Some("string"))),
            ],
            relations: Vec::new(),
        };
        let spaces = render(&snapshot, &GenerateOptions::default());
        let tabs = render(
            &snapshot,
            &GenerateOptions {
                use_tabs: true,
                ..GenerateOptions::default()
            },
        );
        assert_eq!(spaces.replace("\n  ", "\n\t"), tabs);
    }

    #[test]
    fn test_trailing_semicolons() {
        let snapshot = SchemaSnapshot {
            collections: vec![
                RawCollection::new("articles")
                    .with_field(RawField::new("id", Some("integer"))),
            ],
            relations: Vec::new(),
        };
        let text = render(
            &snapshot,
            &GenerateOptions {
                trailing_semicolons: true,
                ..GenerateOptions::default()
            },
        );
        assert!(text.contains("from '@directus/types';\n"));
        assert!(text.contains("  id: PrimaryKey;\n"));
        assert!(text.contains("};\n"));
        assert!(text.contains("  article: Article[];\n"));
    }

    #[test]
    fn test_hyphenated_member_names_are_quoted() {
        let snapshot = SchemaSnapshot {
            collections: vec![
                RawCollection::new("articles")
                    .with_field(RawField::new("id", Some("integer")))
                    .with_field(RawField::new("content-type", Some("string"))),
            ],
            relations: Vec::new(),
        };
        let text = render(&snapshot, &GenerateOptions::default());
        assert!(text.contains("  'content-type': string\n"));
    }

    #[test]
    fn test_system_extension_block() {
        let snapshot = SchemaSnapshot {
            collections: vec![
                RawCollection::new("directus_users")
                    .with_field(RawField::new("id", Some("uuid")).system())
                    .with_field(RawField::new("email", Some("string")).system())
                    .with_field(RawField::new("nickname", Some("string")).nullable()),
                RawCollection::new("directus_roles")
                    .with_field(RawField::new("id", Some("uuid")).system()),
            ],
            relations: Vec::new(),
        };
        let text = render(&snapshot, &GenerateOptions::default());

        assert!(text.contains("import { PrimaryKey, User as BaseUser } from '@directus/types'"));
        assert!(text.contains("export type User = BaseUser & {\n  nickname: string | null\n}"));
        // Only project-added fields appear in the extension body.
        assert!(!text.contains("email"));
        // Roles carry no custom fields and vanish entirely.
        assert!(!text.contains("Role"));
        assert!(text.contains("  directus_user: User[]\n"));
    }
}
