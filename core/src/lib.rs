//! Core schema snapshot types and naming helpers.
//!
//! This crate defines the data model shared across the type generator:
//!
//! - [`SchemaSnapshot`], [`RawCollection`], [`RawField`], [`RelationRecord`]
//!   — the serde model of the loosely structured snapshot a Directus-style
//!   host reports.
//! - [`Collection`], [`FieldDescriptor`], [`RelationLink`] — the ingested
//!   model the generator pipeline operates on, with optional-member
//!   defaults resolved at the ingestion boundary.
//! - [`naming`] — PascalCase/singular conversion for generated type names.
//!
//! # Example
//!
//! ```
//! use directus_typegen_core::*;
//!
//! let raw = RawCollection::new("articles")
//!     .with_field(RawField::new("id", Some("integer")))
//!     .with_field(RawField::new("title", Some("string")).nullable());
//!
//! let articles = Collection::from_raw(&raw).unwrap();
//! assert_eq!(articles.primary, "id");
//! assert!(articles.field("title").unwrap().nullable);
//! assert_eq!(naming::type_name_for(&articles.name), "Article");
//! ```

pub mod naming;
mod types;

pub use types::*;
