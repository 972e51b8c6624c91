//! Model index for addressing items in hierarchical models.
//!
//! The `ModelIndex` type is the fundamental way to reference items within
//! an `ItemModel`. It contains row and parent information to uniquely
//! identify any item in a hierarchical data structure.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// A global counter for generating unique internal IDs.
static INTERNAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Represents a position within an `ItemModel`.
///
/// `ModelIndex` is used by views and selection models to locate items
/// within a model. Each index contains:
/// - The row within its parent
/// - A reference to the parent index (for hierarchical models)
/// - An internal ID for model-specific identification
///
/// Grove views are single-column, so an index addresses a whole row.
///
/// # Index Validity
///
/// Model indices should be used immediately and not stored long-term.
/// After model modifications (insertions, deletions, moves), previously
/// obtained indices may become invalid.
///
/// # Example
///
/// ```ignore
/// use grove::model::ModelIndex;
///
/// // Get a root-level item
/// let index = model.index(0, &ModelIndex::invalid());
///
/// // Get its first child
/// let child = model.index(0, &index);
/// ```
#[derive(Clone)]
pub struct ModelIndex {
    /// The row within the parent.
    row: usize,
    /// The parent index. `None` indicates a root-level item.
    parent: Option<Box<ModelIndex>>,
    /// An internal ID that models can use for their own purposes.
    /// This is typically a node key or a unique identifier.
    internal_id: u64,
    /// Whether this index is valid.
    valid: bool,
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl ModelIndex {
    /// Creates an invalid (null) model index.
    ///
    /// An invalid index is used to represent:
    /// - The root of the model (as a parent reference)
    /// - A non-existent or out-of-bounds item
    /// - An uninitialized index
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            parent: None,
            internal_id: 0,
            valid: false,
        }
    }

    /// Creates a new valid model index.
    ///
    /// This is typically called by model implementations rather than
    /// directly.
    ///
    /// # Arguments
    ///
    /// * `row` - The row within the parent
    /// * `parent` - The parent index, or `ModelIndex::invalid()` for root items
    #[inline]
    pub fn new(row: usize, parent: ModelIndex) -> Self {
        let internal_id = INTERNAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::with_internal_id(row, parent, internal_id)
    }

    /// Creates a new valid model index with a custom internal ID.
    ///
    /// Models can use the internal ID to identify their internal data
    /// structures for efficient lookups. Two indices referring to the same
    /// item should carry the same internal ID; views compare row identity
    /// through it.
    #[inline]
    pub fn with_internal_id(row: usize, parent: ModelIndex, internal_id: u64) -> Self {
        Self {
            row,
            parent: if parent.is_valid() {
                Some(Box::new(parent))
            } else {
                None
            },
            internal_id,
            valid: true,
        }
    }

    /// Returns `true` if this is a valid index.
    ///
    /// Invalid indices are returned when:
    /// - Requesting an out-of-bounds item
    /// - Using `ModelIndex::invalid()`
    /// - Referencing the root (which has no index)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the row of this index within its parent.
    ///
    /// Returns 0 for invalid indices.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the parent index, or an invalid index if this is a root item.
    #[inline]
    pub fn parent(&self) -> ModelIndex {
        match &self.parent {
            Some(parent) => (**parent).clone(),
            None => ModelIndex::invalid(),
        }
    }

    /// Returns `true` if this index has a valid parent.
    ///
    /// Root-level items have no parent.
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the internal ID associated with this index.
    ///
    /// The meaning of this ID is model-specific. Views use it to compare
    /// row identity without asking the model.
    #[inline]
    pub fn internal_id(&self) -> u64 {
        self.internal_id
    }

    /// Creates a sibling index at the given row.
    ///
    /// Returns an invalid index if this index is invalid.
    ///
    /// Note: This creates the index structure but doesn't validate
    /// against a model. Use with model methods for validation.
    #[inline]
    pub fn sibling(&self, row: usize) -> ModelIndex {
        if !self.is_valid() {
            return ModelIndex::invalid();
        }
        ModelIndex::new(row, self.parent())
    }

    /// Returns the depth of this index in the tree hierarchy.
    ///
    /// Root-level items have depth 0. Returns 0 for invalid indices.
    pub fn depth(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        let mut depth = 0;
        let mut current = self.parent();
        while current.is_valid() {
            depth += 1;
            current = current.parent();
        }
        depth
    }

    /// Returns the chain of ancestors from this index up to (but not
    /// including) the root.
    ///
    /// The first element is the immediate parent, and the last is the
    /// top-level ancestor.
    pub fn ancestors(&self) -> Vec<ModelIndex> {
        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while current.is_valid() {
            ancestors.push(current.clone());
            current = current.parent();
        }
        ancestors
    }
}

impl std::fmt::Debug for ModelIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            f.debug_struct("ModelIndex")
                .field("row", &self.row)
                .field("depth", &self.depth())
                .field("internal_id", &self.internal_id)
                .finish()
        } else {
            write!(f, "ModelIndex(invalid)")
        }
    }
}

impl PartialEq for ModelIndex {
    fn eq(&self, other: &Self) -> bool {
        // Two invalid indices are equal
        if !self.is_valid() && !other.is_valid() {
            return true;
        }
        // One valid, one invalid are not equal
        if self.is_valid() != other.is_valid() {
            return false;
        }
        // Both valid: compare position and parent
        self.row == other.row && self.parent == other.parent && self.internal_id == other.internal_id
    }
}

impl Eq for ModelIndex {}

impl Hash for ModelIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.row.hash(state);
            self.internal_id.hash(state);
            // Parent is implicitly encoded in internal_id for uniqueness
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::invalid();
        assert!(!index.is_valid());
        assert_eq!(index.row(), 0);
        assert!(!index.has_parent());
        assert_eq!(index.depth(), 0);
    }

    #[test]
    fn test_valid_index() {
        let index = ModelIndex::new(5, ModelIndex::invalid());
        assert!(index.is_valid());
        assert_eq!(index.row(), 5);
        assert!(!index.has_parent());
    }

    #[test]
    fn test_hierarchical_index() {
        let root = ModelIndex::invalid();
        let parent = ModelIndex::new(0, root);
        let child = ModelIndex::new(2, parent.clone());

        assert!(child.is_valid());
        assert!(child.has_parent());
        assert_eq!(child.parent().row(), 0);
        assert_eq!(child.depth(), 1);
        assert_eq!(parent.depth(), 0);
    }

    #[test]
    fn test_sibling() {
        let index = ModelIndex::new(1, ModelIndex::invalid());
        let sibling = index.sibling(2);

        assert!(sibling.is_valid());
        assert_eq!(sibling.row(), 2);
        assert!(!ModelIndex::invalid().sibling(3).is_valid());
    }

    #[test]
    fn test_equality() {
        // Two invalid indices are equal
        assert_eq!(ModelIndex::invalid(), ModelIndex::invalid());

        // Indices with same position and identity
        let idx1 = ModelIndex::with_internal_id(1, ModelIndex::invalid(), 100);
        let idx2 = ModelIndex::with_internal_id(1, ModelIndex::invalid(), 100);
        assert_eq!(idx1, idx2);

        // Same position, different identity
        let idx3 = ModelIndex::with_internal_id(1, ModelIndex::invalid(), 101);
        assert_ne!(idx1, idx3);
    }

    #[test]
    fn test_ancestors() {
        let root = ModelIndex::invalid();
        let level1 = ModelIndex::new(0, root);
        let level2 = ModelIndex::new(1, level1.clone());
        let level3 = ModelIndex::new(2, level2.clone());

        let ancestors = level3.ancestors();
        assert_eq!(ancestors.len(), 2);
        assert_eq!(ancestors[0], level2);
        assert_eq!(ancestors[1], level1);
        assert_eq!(level3.depth(), 2);
    }
}
