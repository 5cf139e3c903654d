//! Error types for the Pattern Store

use thiserror::Error;

/// Errors that can occur while compiling the pattern table
#[derive(Error, Debug)]
pub enum PatternError {
    /// A regular expression failed to compile
    #[error("Invalid pattern in '{group}' ({pattern}): {reason}")]
    InvalidPattern {
        /// Pattern group the expression belongs to
        group: &'static str,
        /// Source of the failing expression
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// A group that must not be empty has no entries
    #[error("Pattern group '{0}' is empty")]
    EmptyGroup(&'static str),
}
