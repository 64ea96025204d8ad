//! Schema-to-type compilation for Directus-style content platforms.
//!
//! This crate turns a live schema snapshot (collections, fields, relations)
//! into static TypeScript type declarations. The pipeline is strictly
//! linear:
//!
//! fetch → [`index_collections`] → [`resolve_relations`] →
//! classify (per field) → overlay → [`render_document`]
//!
//! with no back-edges and no state carried across invocations — every run
//! builds its structures fresh and discards them on return, including the
//! set of referenced host base types that feeds the import header.
//!
//! # Main entry points
//!
//! - [`generate_from_snapshot`] — the pure core: snapshot in, document out,
//!   deterministic and byte-stable for a fixed input.
//! - [`generate`] — fetches the snapshot through a [`SchemaProvider`] first;
//!   an absent provider yields an empty document rather than an error.
//!
//! # Example
//!
//! ```
//! use directus_typegen::{GenerateOptions, generate_from_snapshot};
//! use directus_typegen_core::{RawCollection, RawField, SchemaSnapshot};
//!
//! let snapshot = SchemaSnapshot {
//!     collections: vec![
//!         RawCollection::new("articles")
//!             .with_field(RawField::new("id", Some("integer")))
//!             .with_field(RawField::new("title", Some("string"))),
//!     ],
//!     relations: Vec::new(),
//! };
//!
//! let document = generate_from_snapshot(&snapshot, &GenerateOptions::default());
//! assert!(document.text.contains("export type Article = {"));
//! assert!(document.text.contains("  id: PrimaryKey"));
//! assert!(document.text.contains("  title: string"));
//! assert!(document.warnings.is_empty());
//! ```

pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod overlay;
pub mod render;
pub mod resolve;

pub use classify::{ImportSet, classify_field};
pub use diagnostics::GenerationDiagnostics;
pub use error::{BoxError, GenerateError, Result};
pub use index::index_collections;
pub use overlay::{CollectionPlan, plan_collection};
pub use render::{GenerateOptions, ROLLUP_TYPE_NAME, render_document};
pub use resolve::resolve_relations;

use directus_typegen_core::SchemaSnapshot;

/// Supplies the raw schema on demand.
///
/// The fetch is the pipeline's single external call; everything after it is
/// synchronous in-memory transformation.
pub trait SchemaProvider {
    fn fetch_schema(&self) -> std::result::Result<SchemaSnapshot, BoxError>;
}

/// A generated document plus the warnings collected while building it.
#[derive(Debug, Clone)]
pub struct TypeDocument {
    /// The full declaration text: import header, type blocks, rollup type.
    pub text: String,
    /// Non-fatal diagnostics (malformed relation records).
    pub warnings: Vec<String>,
}

/// Fetches a snapshot through `provider` and compiles it.
///
/// `None` yields an empty document — the caller has nothing wired up, which
/// is not an error. A provider failure aborts the run whole; no partial
/// document is ever returned.
pub fn generate(
    provider: Option<&dyn SchemaProvider>,
    options: &GenerateOptions,
) -> Result<TypeDocument> {
    let Some(provider) = provider else {
        return Ok(TypeDocument {
            text: String::new(),
            warnings: Vec::new(),
        });
    };
    let snapshot = provider.fetch_schema().map_err(GenerateError::Fetch)?;
    Ok(generate_from_snapshot(&snapshot, options))
}

/// Compiles a snapshot into a [`TypeDocument`].
///
/// Pure with respect to its inputs: repeated calls with an identical
/// snapshot and options produce byte-identical output.
pub fn generate_from_snapshot(
    snapshot: &SchemaSnapshot,
    options: &GenerateOptions,
) -> TypeDocument {
    let mut diagnostics = GenerationDiagnostics::default();
    let mut collections = index_collections(snapshot);
    resolve_relations(&mut collections, &snapshot.relations, &mut diagnostics);
    let text = render_document(&collections, options);
    TypeDocument {
        text,
        warnings: diagnostics.into_warnings(),
    }
}
