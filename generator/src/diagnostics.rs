//! Diagnostics collected across one generation run.

/// Warnings and counters accumulated while resolving relations.
///
/// Warnings are non-fatal: generation always continues past them. They are
/// returned alongside the document so callers can surface them however they
/// like; the pipeline also mirrors each one to `tracing`.
#[derive(Debug, Clone, Default)]
pub struct GenerationDiagnostics {
    warnings: Vec<String>,
    /// Relation sides successfully linked to a field.
    pub resolved_sides: usize,
    /// Relation sides dropped because their target was not in the indexed
    /// set. Dropped silently by policy; counted for inspection only.
    pub dropped_sides: usize,
    /// Relation records skipped for missing extended metadata.
    pub malformed_records: usize,
}

impl GenerationDiagnostics {
    /// Records a warning message.
    pub fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consumes the diagnostics, returning the warning list.
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
