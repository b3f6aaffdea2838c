//! Compiled query
//!
//! The output of filter compilation: SQL text with `?` placeholders and the
//! values to bind to them, in placeholder order.

use ent_core::traits::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub args: Vec<Id>,
}

impl CompiledQuery {
    /// A query that binds nothing
    pub fn bare(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    /// Number of `?` placeholders in the SQL text
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

/// `column IN (?,?,...)` with one placeholder per value
pub(crate) fn in_clause(column: &str, len: usize) -> String {
    format!("{} IN ({})", column, vec!["?"; len].join(","))
}
