//! Hierarchical tree model implementation.
//!
//! `TreeModel` provides a way to hold hierarchical data with parent-child
//! relationships and hand out [`ModelIndex`]es for it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::index::ModelIndex;
use super::traits::ItemModel;

/// A node ID for internal tracking.
pub type NodeId = u64;

/// Counter for generating unique node IDs.
static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_node_id() -> NodeId {
    NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Trait for tree node data that provides its own display text.
///
/// Implement this trait for types that should be directly usable as tree
/// nodes.
pub trait TreeItem: Send + Sync {
    /// Returns the display text for this node.
    fn display(&self) -> String;
}

/// Implement TreeItem for String for convenience.
impl TreeItem for String {
    fn display(&self) -> String {
        self.clone()
    }
}

impl TreeItem for &'static str {
    fn display(&self) -> String {
        (*self).to_string()
    }
}

/// A node in the tree structure.
struct TreeNode<T> {
    id: NodeId,
    data: T,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl<T> TreeNode<T> {
    fn new(data: T, parent: Option<NodeId>) -> Self {
        Self {
            id: next_node_id(),
            data,
            children: Vec::new(),
            parent,
        }
    }
}

/// Internal storage for tree nodes.
struct TreeStorage<T> {
    nodes: HashMap<NodeId, TreeNode<T>>,
    root_children: Vec<NodeId>,
}

impl<T> TreeStorage<T> {
    fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            root_children: Vec::new(),
        }
    }

    fn get_node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(&id)
    }

    fn add_root(&mut self, data: T) -> NodeId {
        let node = TreeNode::new(data, None);
        let id = node.id;
        self.nodes.insert(id, node);
        self.root_children.push(id);
        id
    }

    fn add_child(&mut self, parent_id: NodeId, data: T) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent_id) {
            return None;
        }
        let node = TreeNode::new(data, Some(parent_id));
        let id = node.id;
        self.nodes.insert(id, node);
        if let Some(parent) = self.nodes.get_mut(&parent_id) {
            parent.children.push(id);
        }
        Some(id)
    }

    fn remove_node(&mut self, id: NodeId) -> Option<T> {
        // First, remove from the parent's children list
        if let Some(node) = self.nodes.get(&id) {
            if let Some(parent_id) = node.parent {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.retain(|&child_id| child_id != id);
                }
            } else {
                self.root_children.retain(|&child_id| child_id != id);
            }
        }

        // Then remove the node and all its descendants
        self.remove_subtree(id)
    }

    fn remove_subtree(&mut self, id: NodeId) -> Option<T> {
        let node = self.nodes.remove(&id)?;
        for child_id in node.children {
            self.remove_subtree(child_id);
        }
        Some(node.data)
    }

    fn children_of(&self, parent_id: Option<NodeId>) -> &[NodeId] {
        match parent_id {
            None => &self.root_children,
            Some(id) => self
                .nodes
                .get(&id)
                .map(|n| n.children.as_slice())
                .unwrap_or(&[]),
        }
    }

    fn child_count(&self, parent_id: Option<NodeId>) -> usize {
        self.children_of(parent_id).len()
    }

    fn child_at(&self, parent_id: Option<NodeId>, index: usize) -> Option<NodeId> {
        self.children_of(parent_id).get(index).copied()
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    fn row_of(&self, id: NodeId) -> Option<usize> {
        let parent_id = self.parent_of(id);
        let siblings = self.children_of(parent_id);
        siblings.iter().position(|&child_id| child_id == id)
    }
}

/// A hierarchical tree model for parent-child data.
///
/// `TreeModel` stores data in a tree structure where each node can have
/// multiple children. Node identity is stable across structural changes:
/// the [`ModelIndex::internal_id`] of every index handed out is the node's
/// [`NodeId`].
///
/// # Example
///
/// ```
/// use grove::model::{ItemModel, ModelIndex, TreeModel};
///
/// let model = TreeModel::new();
/// let docs = model.add_root("Documents".to_string());
/// model.add_child(docs, "report.txt".to_string());
///
/// let root = ModelIndex::invalid();
/// assert_eq!(model.row_count(&root), 1);
///
/// let docs_index = model.index(0, &root);
/// assert_eq!(model.row_count(&docs_index), 1);
/// assert_eq!(model.display_text(&docs_index).as_deref(), Some("Documents"));
/// ```
pub struct TreeModel<T = String> {
    storage: RwLock<TreeStorage<T>>,
}

impl<T: TreeItem + 'static> TreeModel<T> {
    /// Creates a new empty tree model.
    pub fn new() -> Self {
        Self {
            storage: RwLock::new(TreeStorage::new()),
        }
    }

    /// Adds a root-level node and returns its ID.
    pub fn add_root(&self, data: T) -> NodeId {
        self.storage.write().add_root(data)
    }

    /// Adds a child node to the specified parent and returns its ID.
    ///
    /// Returns `None` if the parent doesn't exist.
    pub fn add_child(&self, parent_id: NodeId, data: T) -> Option<NodeId> {
        self.storage.write().add_child(parent_id, data)
    }

    /// Removes a node and all its descendants.
    ///
    /// Returns the removed node's data, or `None` if the node doesn't exist.
    pub fn remove(&self, id: NodeId) -> Option<T> {
        self.storage.write().remove_node(id)
    }

    /// Clears all nodes from the tree.
    pub fn clear(&self) {
        let mut storage = self.storage.write();
        storage.nodes.clear();
        storage.root_children.clear();
    }

    /// Returns the number of root-level nodes.
    pub fn root_count(&self) -> usize {
        self.storage.read().root_children.len()
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.read().root_children.is_empty()
    }

    /// Provides read access to a node's data.
    pub fn with_node<F, R>(&self, id: NodeId, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let storage = self.storage.read();
        storage.get_node(id).map(|node| f(&node.data))
    }

    /// Returns the index for a node ID, or `None` if the node doesn't exist.
    ///
    /// This is the inverse of [`ModelIndex::internal_id`] and is handy for
    /// addressing a node obtained from [`add_root`](Self::add_root) or
    /// [`add_child`](Self::add_child).
    pub fn index_of(&self, id: NodeId) -> Option<ModelIndex> {
        let storage = self.storage.read();
        Self::create_index_for_id(&storage, id)
    }

    /// Creates a ModelIndex for a node ID, building the parent chain.
    fn create_index_for_id(storage: &TreeStorage<T>, id: NodeId) -> Option<ModelIndex> {
        let row = storage.row_of(id)?;
        let parent_index = match storage.parent_of(id) {
            Some(pid) => Self::create_index_for_id(storage, pid)?,
            None => ModelIndex::invalid(),
        };
        Some(ModelIndex::with_internal_id(row, parent_index, id))
    }

    fn parent_node_id(parent: &ModelIndex) -> Option<NodeId> {
        if parent.is_valid() {
            Some(parent.internal_id())
        } else {
            None
        }
    }
}

impl<T: TreeItem + 'static> Default for TreeModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TreeItem + 'static> ItemModel for TreeModel<T> {
    fn row_count(&self, parent: &ModelIndex) -> usize {
        let storage = self.storage.read();
        storage.child_count(Self::parent_node_id(parent))
    }

    fn index(&self, row: usize, parent: &ModelIndex) -> ModelIndex {
        let storage = self.storage.read();
        let parent_id = Self::parent_node_id(parent);

        match storage.child_at(parent_id, row) {
            Some(child_id) => ModelIndex::with_internal_id(row, parent.clone(), child_id),
            None => ModelIndex::invalid(),
        }
    }

    fn parent(&self, index: &ModelIndex) -> ModelIndex {
        if !index.is_valid() {
            return ModelIndex::invalid();
        }

        let storage = self.storage.read();
        let parent_id = match storage.parent_of(index.internal_id()) {
            Some(id) => id,
            None => return ModelIndex::invalid(),
        };

        Self::create_index_for_id(&storage, parent_id).unwrap_or_else(ModelIndex::invalid)
    }

    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        if !index.is_valid() {
            return None;
        }
        self.with_node(index.internal_id(), |data| data.display())
    }
}

static_assertions::assert_impl_all!(TreeModel<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (TreeModel<String>, NodeId, NodeId) {
        let model = TreeModel::new();
        let docs = model.add_root("Documents".to_string());
        let music = model.add_root("Music".to_string());
        model.add_child(docs, "report.txt".to_string());
        model.add_child(docs, "notes.md".to_string());
        model.add_child(music, "song.ogg".to_string());
        (model, docs, music)
    }

    #[test]
    fn test_row_counts() {
        let (model, docs, _) = sample_tree();
        let root = ModelIndex::invalid();
        assert_eq!(model.row_count(&root), 2);

        let docs_index = model.index_of(docs).unwrap();
        assert_eq!(model.row_count(&docs_index), 2);
        assert!(model.has_children(&docs_index));
    }

    #[test]
    fn test_index_and_parent_round_trip() {
        let (model, docs, _) = sample_tree();
        let root = ModelIndex::invalid();

        let docs_index = model.index(0, &root);
        assert!(docs_index.is_valid());
        assert_eq!(docs_index.internal_id(), docs);

        let child = model.index(1, &docs_index);
        assert_eq!(model.display_text(&child).as_deref(), Some("notes.md"));
        assert_eq!(model.parent(&child), docs_index);
        assert_eq!(child.depth(), 1);
    }

    #[test]
    fn test_index_of_matches_index() {
        let (model, docs, _) = sample_tree();
        let root = ModelIndex::invalid();

        let via_walk = model.index(0, &root);
        let via_id = model.index_of(docs).unwrap();
        assert_eq!(via_walk, via_id);
    }

    #[test]
    fn test_out_of_bounds_is_invalid() {
        let (model, _, _) = sample_tree();
        let root = ModelIndex::invalid();
        assert!(!model.index(2, &root).is_valid());
    }

    #[test]
    fn test_remove_subtree() {
        let (model, docs, _) = sample_tree();
        assert_eq!(model.remove(docs).as_deref(), Some("Documents"));
        assert_eq!(model.root_count(), 1);

        let root = ModelIndex::invalid();
        let remaining = model.index(0, &root);
        assert_eq!(model.display_text(&remaining).as_deref(), Some("Music"));
        assert!(model.index_of(docs).is_none());
    }

    #[test]
    fn test_add_child_to_missing_parent() {
        let model: TreeModel<String> = TreeModel::new();
        assert!(model.add_child(9999, "orphan".to_string()).is_none());
    }

    #[test]
    fn test_clear() {
        let (model, _, _) = sample_tree();
        model.clear();
        assert!(model.is_empty());
        assert_eq!(model.row_count(&ModelIndex::invalid()), 0);
    }
}
