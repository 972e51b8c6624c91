//! Core traits for the model layer.
//!
//! This module defines the fundamental trait that models must implement
//! to work with the view system.

use super::index::ModelIndex;

/// The core trait for item models.
///
/// `ItemModel` provides a minimal interface for representing hierarchical
/// data. Views use this interface to walk and display data without needing
/// to know the underlying data structure. Grove views are single-column, so
/// an index addresses a whole row.
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`row_count`](ItemModel::row_count) - Number of rows under a parent
/// - [`index`](ItemModel::index) - Create an index for a position
/// - [`parent`](ItemModel::parent) - Get the parent of an index
///
/// # Example
///
/// ```
/// use grove::model::{ItemModel, ModelIndex};
///
/// struct FlatModel {
///     items: Vec<String>,
/// }
///
/// impl ItemModel for FlatModel {
///     fn row_count(&self, parent: &ModelIndex) -> usize {
///         if parent.is_valid() { 0 } else { self.items.len() }
///     }
///
///     fn index(&self, row: usize, parent: &ModelIndex) -> ModelIndex {
///         if parent.is_valid() || row >= self.items.len() {
///             ModelIndex::invalid()
///         } else {
///             // Stable identity: the row number works for a static list.
///             ModelIndex::with_internal_id(row, ModelIndex::invalid(), row as u64 + 1)
///         }
///     }
///
///     fn parent(&self, _index: &ModelIndex) -> ModelIndex {
///         ModelIndex::invalid() // Flat list has no parents
///     }
///
///     fn display_text(&self, index: &ModelIndex) -> Option<String> {
///         self.items.get(index.row()).cloned()
///     }
/// }
/// ```
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows under the given parent.
    ///
    /// For flat models, return the item count when parent is invalid.
    /// For tree models, return the number of children of the parent item.
    fn row_count(&self, parent: &ModelIndex) -> usize;

    /// Creates a model index for the given row under parent.
    ///
    /// Return `ModelIndex::invalid()` if the position is out of bounds.
    /// Indices for the same item must carry the same
    /// [`internal_id`](ModelIndex::internal_id); views rely on it for
    /// identity comparisons (hover, selection).
    fn index(&self, row: usize, parent: &ModelIndex) -> ModelIndex;

    /// Returns the parent of the given index.
    ///
    /// Return `ModelIndex::invalid()` for:
    /// - Root-level items
    /// - Invalid indices
    /// - Flat (non-hierarchical) models
    fn parent(&self, index: &ModelIndex) -> ModelIndex;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns `true` if the item at parent has any children.
    ///
    /// The default implementation checks if `row_count(parent) > 0`.
    /// Override for performance if counting children is expensive.
    fn has_children(&self, parent: &ModelIndex) -> bool {
        self.row_count(parent) > 0
    }

    /// Returns the display text for the item at the given index.
    ///
    /// The default returns `None` (nothing to display).
    fn display_text(&self, _index: &ModelIndex) -> Option<String> {
        None
    }
}
