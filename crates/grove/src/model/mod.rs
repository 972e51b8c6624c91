//! Model/View architecture for Grove.
//!
//! This module provides the foundational types for the Model/View pattern,
//! which separates data representation from display logic. This enables:
//!
//! - Multiple views of the same data
//! - Consistent data access patterns
//! - Support for hierarchical (tree) data structures
//!
//! # Core Types
//!
//! - `ModelIndex`: Identifies an item's position in a model
//! - `ItemModel`: The trait that models implement
//! - `TreeModel`: Hierarchical tree structure with parent-child relationships
//! - `SelectionModel`: Tracks which items of a view are selected
//!
//! # Example
//!
//! ```
//! use grove::model::{ItemModel, ModelIndex, TreeModel};
//!
//! let model = TreeModel::new();
//! let fruit = model.add_root("Fruit".to_string());
//! model.add_child(fruit, "Apple".to_string());
//! model.add_child(fruit, "Banana".to_string());
//!
//! let root = ModelIndex::invalid();
//! let first = model.index(0, &root);
//!
//! if first.is_valid() {
//!     if let Some(text) = model.display_text(&first) {
//!         println!("First item: {}", text);
//!     }
//! }
//! ```
//!
//! Views query models using `ModelIndex` and render what the model reports.
//! Selection state lives next to the view in a [`SelectionModel`], so several
//! views over one model can carry independent selections.

mod index;
pub mod selection;
mod traits;
mod tree_model;

pub use index::ModelIndex;
pub use selection::{SelectionFilter, SelectionFlags, SelectionMode, SelectionModel};
pub use traits::ItemModel;
pub use tree_model::{NodeId, TreeItem, TreeModel};
