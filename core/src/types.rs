//! Schema snapshot and collection type definitions.
//!
//! Two layers live here. The raw layer ([`SchemaSnapshot`], [`RawCollection`],
//! [`RawField`], [`RelationRecord`]) mirrors the loosely structured JSON a
//! Directus instance reports for its schema, with every optional member
//! modeled as an `Option`. The ingested layer ([`Collection`],
//! [`FieldDescriptor`], [`RelationLink`]) is what the generator pipeline
//! operates on: optional-field defaults are resolved once, at the boundary
//! between the two.

use serde::{Deserialize, Serialize};

/// Name prefix identifying collections predefined by the host platform.
pub const SYSTEM_COLLECTION_PREFIX: &str = "directus_";

/// Type-name prefix produced by the system collection prefix
/// (`directus_users` → `DirectusUser`), stripped when referencing host base
/// types.
pub const SYSTEM_TYPE_PREFIX: &str = "Directus";

/// Module the host base types are imported from.
pub const BASE_TYPES_MODULE: &str = "@directus/types";

/// The canonical identifier type shared by every generated collection.
pub const PRIMARY_KEY_TYPE: &str = "PrimaryKey";

/// Classification of a field's primitive type tag.
///
/// The snapshot reports database-flavored tags (`integer`, `bigInteger`,
/// `uuid`, ...); rendering only cares about which TypeScript primitive they
/// collapse to.
///
/// # Examples
///
/// ```
/// use directus_typegen_core::ScalarKind;
///
/// assert_eq!(ScalarKind::from_raw(Some("bigInteger")), ScalarKind::Integer);
/// assert_eq!(ScalarKind::from_raw(Some("csv")), ScalarKind::Structured);
/// assert_eq!(ScalarKind::from_raw(None), ScalarKind::Unknown);
/// assert_eq!(ScalarKind::Unknown.ts_type(), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalarKind {
    /// Whole-number types (`integer`, `bigInteger`).
    Integer,
    /// Fractional numeric types (`float`, `decimal`).
    Decimal,
    /// Boolean.
    Boolean,
    /// Structured payloads with no static shape (`json`, `csv`).
    Structured,
    /// String-backed types (`hash`, `string`, `text`, `timestamp`, `uuid`)
    /// and the fallback for unrecognized tags.
    Text,
    /// No type tag declared at all (the default).
    #[default]
    Unknown,
}

impl ScalarKind {
    /// Classifies a raw type tag. Unrecognized tags fall back to [`Text`];
    /// an absent tag is [`Unknown`].
    ///
    /// [`Text`]: ScalarKind::Text
    /// [`Unknown`]: ScalarKind::Unknown
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unknown,
            Some("integer" | "bigInteger") => Self::Integer,
            Some("float" | "decimal") => Self::Decimal,
            Some("boolean") => Self::Boolean,
            Some("json" | "csv") => Self::Structured,
            Some("hash" | "string" | "text" | "timestamp" | "uuid") => Self::Text,
            Some(_) => Self::Text,
        }
    }

    /// The TypeScript primitive this kind renders as.
    pub fn ts_type(self) -> &'static str {
        match self {
            Self::Integer | Self::Decimal => "number",
            Self::Boolean => "boolean",
            Self::Structured | Self::Unknown => "unknown",
            Self::Text => "string",
        }
    }
}

/// A full schema snapshot: collections plus relation records.
///
/// Both members default to empty so that partial snapshots deserialize
/// without error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Collections in declaration order.
    #[serde(default)]
    pub collections: Vec<RawCollection>,
    /// Relation records linking fields across (or within) collections.
    #[serde(default)]
    pub relations: Vec<RelationRecord>,
}

/// A collection as reported by the snapshot.
///
/// # Examples
///
/// ```
/// use directus_typegen_core::{RawCollection, RawField};
///
/// let articles = RawCollection::new("articles")
///     .with_field(RawField::new("id", Some("integer")))
///     .with_field(RawField::new("title", Some("string")));
/// assert_eq!(articles.primary, "id");
/// assert_eq!(articles.fields.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCollection {
    /// Collection name; entries without one are skipped by the indexer.
    #[serde(default)]
    pub collection: Option<String>,
    /// Primary key field name.
    #[serde(default = "default_primary")]
    pub primary: String,
    /// Whether the collection holds a single record.
    #[serde(default)]
    pub singleton: bool,
    /// Optional manual sort field.
    #[serde(default)]
    pub sort_field: Option<String>,
    /// Optional note attached in the data studio.
    #[serde(default)]
    pub note: Option<String>,
    /// Accountability mode for activity tracking.
    #[serde(default)]
    pub accountability: Option<String>,
    /// Fields in declared schema order.
    #[serde(default)]
    pub fields: Vec<RawField>,
}

fn default_primary() -> String {
    "id".to_string()
}

impl RawCollection {
    /// Creates a named collection with primary key `id` and no fields.
    pub fn new(name: &str) -> Self {
        Self {
            collection: Some(name.to_string()),
            primary: default_primary(),
            singleton: false,
            sort_field: None,
            note: None,
            accountability: None,
            fields: Vec::new(),
        }
    }

    /// Sets the primary key field name.
    pub fn with_primary(mut self, primary: &str) -> Self {
        self.primary = primary.to_string();
        self
    }

    /// Marks the collection as a singleton.
    pub fn singleton(mut self) -> Self {
        self.singleton = true;
        self
    }

    /// Appends a field, preserving declaration order.
    pub fn with_field(mut self, field: RawField) -> Self {
        self.fields.push(field);
        self
    }
}

/// A field as reported by the snapshot, including the optional enrichment
/// blocks (`meta.system`, `schema.foreign_key_column`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawField {
    /// Field name.
    pub field: String,
    /// Primitive type tag (`integer`, `uuid`, ...), absent for alias fields.
    #[serde(rename = "type", default)]
    pub data_type: Option<String>,
    /// Whether the column accepts NULL.
    #[serde(default)]
    pub nullable: Option<bool>,
    /// Field metadata from the host.
    #[serde(default)]
    pub meta: Option<FieldMeta>,
    /// Column-level details from the host.
    #[serde(default)]
    pub schema: Option<FieldOverview>,
}

impl RawField {
    /// Creates a field with the given name and optional type tag.
    pub fn new(name: &str, data_type: Option<&str>) -> Self {
        Self {
            field: name.to_string(),
            data_type: data_type.map(String::from),
            nullable: None,
            meta: None,
            schema: None,
        }
    }

    /// Marks the field as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = Some(true);
        self
    }

    /// Flags the field as host-system managed.
    pub fn system(mut self) -> Self {
        self.meta = Some(FieldMeta { system: true });
        self
    }
}

/// Field metadata block; only the system flag matters for generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMeta {
    /// True for fields the host platform manages itself.
    #[serde(default)]
    pub system: bool,
}

/// Column-level field details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldOverview {
    /// Column referenced on the related collection, when this field backs a
    /// foreign key.
    #[serde(default)]
    pub foreign_key_column: Option<String>,
}

/// A raw relation record.
///
/// The owning `collection`/`field` pair names the foreign-key column (the
/// many side). Extended metadata names both sides of the link; records
/// without it are malformed and skipped with a warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationRecord {
    /// Collection owning the foreign-key field.
    #[serde(default)]
    pub collection: String,
    /// Foreign-key field name on the owning collection.
    #[serde(default)]
    pub field: String,
    /// Column-level relation details.
    #[serde(default)]
    pub schema: Option<RelationOverview>,
    /// Extended metadata describing both sides of the relation.
    #[serde(default)]
    pub meta: Option<RelationMeta>,
}

impl RelationRecord {
    /// Creates a record with full extended metadata.
    pub fn new(
        one_collection: &str,
        one_field: &str,
        many_collection: &str,
        many_field: &str,
    ) -> Self {
        Self {
            collection: many_collection.to_string(),
            field: many_field.to_string(),
            schema: None,
            meta: Some(RelationMeta {
                one_collection: Some(one_collection.to_string()),
                one_field: Some(one_field.to_string()),
                many_collection: Some(many_collection.to_string()),
                many_field: Some(many_field.to_string()),
            }),
        }
    }

    /// Creates a record lacking extended metadata (a malformed record).
    pub fn without_meta(collection: &str, field: &str) -> Self {
        Self {
            collection: collection.to_string(),
            field: field.to_string(),
            schema: None,
            meta: None,
        }
    }
}

/// Column-level relation details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationOverview {
    /// Referenced column on the one-side collection.
    #[serde(default)]
    pub foreign_key_column: Option<String>,
}

/// Extended relation metadata. Every member is optional in the wire form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationMeta {
    #[serde(default)]
    pub one_collection: Option<String>,
    #[serde(default)]
    pub one_field: Option<String>,
    #[serde(default)]
    pub many_collection: Option<String>,
    #[serde(default)]
    pub many_field: Option<String>,
}

/// Which side of a relation a field sits on.
///
/// `Many` is the side holding multiple related rows (the one-side alias
/// field renders as an array); `One` is the side holding a single foreign
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    One,
    Many,
}

/// A resolved, directional relation link attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationLink {
    /// This field's side of the relation.
    pub kind: RelationKind,
    /// Related collection name; `None` when the record never named one.
    /// Resolution never fabricates a name.
    pub related: Option<String>,
    /// Field referenced on the related collection. Defaults to the related
    /// collection's primary key, resolved when the link is created.
    pub foreign_key: String,
}

/// An ingested field: defaults resolved, relation link attached later by
/// the resolver.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Primitive classification of the declared type tag.
    pub scalar: ScalarKind,
    /// Whether the field accepts NULL.
    pub nullable: bool,
    /// True for host-system managed fields.
    pub system: bool,
    /// Directional relation link, attached by relation resolution.
    pub relation: Option<RelationLink>,
}

impl FieldDescriptor {
    /// Ingests a raw field, resolving optional-member defaults here rather
    /// than downstream.
    pub fn from_raw(raw: &RawField) -> Self {
        Self {
            name: raw.field.clone(),
            scalar: ScalarKind::from_raw(raw.data_type.as_deref()),
            nullable: raw.nullable.unwrap_or(false),
            system: raw.meta.as_ref().is_some_and(|meta| meta.system),
            relation: None,
        }
    }
}

/// An ingested collection, ready for relation resolution and rendering.
///
/// # Examples
///
/// ```
/// use directus_typegen_core::{Collection, RawCollection, RawField};
///
/// let raw = RawCollection::new("directus_users")
///     .with_field(RawField::new("id", Some("uuid")).system())
///     .with_field(RawField::new("nickname", Some("string")));
/// let users = Collection::from_raw(&raw).unwrap();
/// assert!(users.is_system());
/// assert!(users.has_custom_fields());
/// ```
#[derive(Debug, Clone)]
pub struct Collection {
    /// Collection name.
    pub name: String,
    /// Primary key field name.
    pub primary: String,
    /// Whether the collection holds a single record.
    pub singleton: bool,
    /// Optional manual sort field.
    pub sort_field: Option<String>,
    /// Optional note.
    pub note: Option<String>,
    /// Accountability mode.
    pub accountability: Option<String>,
    /// Fields in declared schema order.
    pub fields: Vec<FieldDescriptor>,
}

impl Collection {
    /// Ingests a raw collection. Returns `None` when no name is declared.
    pub fn from_raw(raw: &RawCollection) -> Option<Self> {
        let name = raw.collection.as_deref()?;
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            primary: raw.primary.clone(),
            singleton: raw.singleton,
            sort_field: raw.sort_field.clone(),
            note: raw.note.clone(),
            accountability: raw.accountability.clone(),
            fields: raw.fields.iter().map(FieldDescriptor::from_raw).collect(),
        })
    }

    /// True when the collection is predefined by the host platform.
    pub fn is_system(&self) -> bool {
        self.name.starts_with(SYSTEM_COLLECTION_PREFIX)
    }

    /// True the instant any non-system field is present.
    pub fn has_custom_fields(&self) -> bool {
        self.fields.iter().any(|field| !field.system)
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Looks up a field by name, mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_numeric_tags() {
        for tag in ["integer", "bigInteger"] {
            assert_eq!(ScalarKind::from_raw(Some(tag)), ScalarKind::Integer);
        }
        for tag in ["float", "decimal"] {
            assert_eq!(ScalarKind::from_raw(Some(tag)), ScalarKind::Decimal);
        }
        assert_eq!(ScalarKind::Integer.ts_type(), "number");
        assert_eq!(ScalarKind::Decimal.ts_type(), "number");
    }

    #[test]
    fn test_scalar_kind_string_tags_and_fallback() {
        for tag in ["hash", "string", "text", "timestamp", "uuid"] {
            assert_eq!(ScalarKind::from_raw(Some(tag)), ScalarKind::Text);
        }
        // Unrecognized tags fall back to string, absent tags to unknown.
        assert_eq!(ScalarKind::from_raw(Some("geometry")), ScalarKind::Text);
        assert_eq!(ScalarKind::from_raw(None), ScalarKind::Unknown);
        assert_eq!(ScalarKind::Unknown.ts_type(), "unknown");
        assert_eq!(ScalarKind::Structured.ts_type(), "unknown");
    }

    #[test]
    fn test_field_descriptor_resolves_defaults() {
        let raw = RawField::new("title", Some("string"));
        let field = FieldDescriptor::from_raw(&raw);
        assert!(!field.nullable);
        assert!(!field.system);
        assert!(field.relation.is_none());

        let raw = RawField::new("note", Some("text")).nullable().system();
        let field = FieldDescriptor::from_raw(&raw);
        assert!(field.nullable);
        assert!(field.system);
    }

    #[test]
    fn test_collection_from_raw_requires_name() {
        let mut raw = RawCollection::new("articles");
        assert!(Collection::from_raw(&raw).is_some());

        raw.collection = None;
        assert!(Collection::from_raw(&raw).is_none());

        raw.collection = Some(String::new());
        assert!(Collection::from_raw(&raw).is_none());
    }

    #[test]
    fn test_system_collection_detection() {
        let users = Collection::from_raw(&RawCollection::new("directus_users")).unwrap();
        assert!(users.is_system());

        let articles = Collection::from_raw(&RawCollection::new("articles")).unwrap();
        assert!(!articles.is_system());
    }

    #[test]
    fn test_has_custom_fields() {
        let raw = RawCollection::new("directus_users")
            .with_field(RawField::new("id", Some("uuid")).system())
            .with_field(RawField::new("email", Some("string")).system());
        let users = Collection::from_raw(&raw).unwrap();
        assert!(!users.has_custom_fields());

        let raw = raw.with_field(RawField::new("nickname", Some("string")));
        let users = Collection::from_raw(&raw).unwrap();
        assert!(users.has_custom_fields());
    }

    #[test]
    fn test_snapshot_deserializes_with_missing_members() {
        let snapshot: SchemaSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.collections.is_empty());
        assert!(snapshot.relations.is_empty());

        let snapshot: SchemaSnapshot = serde_json::from_str(
            r#"{
                "collections": [
                    {"collection": "articles", "fields": [{"field": "id", "type": "integer"}]}
                ],
                "relations": [
                    {"collection": "articles", "field": "author"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.collections.len(), 1);
        assert_eq!(snapshot.collections[0].primary, "id");
        assert!(snapshot.relations[0].meta.is_none());
    }

    #[test]
    fn test_relation_record_constructors() {
        let record = RelationRecord::new("authors", "articles", "articles", "author");
        let meta = record.meta.as_ref().unwrap();
        assert_eq!(meta.one_collection.as_deref(), Some("authors"));
        assert_eq!(meta.many_field.as_deref(), Some("author"));

        let malformed = RelationRecord::without_meta("articles", "author");
        assert!(malformed.meta.is_none());
    }
}
