//! Console rendering of store results.

/// Bordered table views over records and duplicate groups.
pub mod table;
