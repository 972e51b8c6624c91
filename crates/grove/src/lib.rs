//! Grove: interactive tree and list views.
//!
//! Grove splits list and tree display into the Model/View pattern:
//!
//! - **Models** ([`model`]) describe hierarchical data through
//!   [`ItemModel`](model::ItemModel), addressed by
//!   [`ModelIndex`](model::ModelIndex)
//! - **Views** ([`view`]) render models and turn input into selection,
//!   expansion, activation, and drag gestures
//! - **Click modes**: [`ClickController`](view::ClickController) wraps any
//!   view to add single-click activation with hover tracking, the way file
//!   managers browse in single-click mode
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use grove::model::TreeModel;
//! use grove::view::{ClickController, TreeView};
//! use grove_core::Size;
//!
//! let model = Arc::new(TreeModel::new());
//! let documents = model.add_root("Documents".to_string());
//! model.add_child(documents, "notes.txt".to_string());
//! model.add_child(documents, "report.pdf".to_string());
//!
//! let view = TreeView::new(model).with_view_size(Size::new(300.0, 200.0));
//! let controller = ClickController::new(view);
//!
//! controller.set_single_click(true);
//! controller.row_hovered.connect(|row| {
//!     println!("hover moved to {row:?}");
//! });
//! controller.view().activated.connect(|index| {
//!     println!("opened row {}", index.row());
//! });
//! ```
//!
//! Selection state lives in a [`SelectionModel`](model::SelectionModel)
//! owned by the view, so several views over one model carry independent
//! selections. Signals and properties come from [`grove_core`].

pub mod model;
pub mod view;

pub use model::{ItemModel, ModelIndex, SelectionModel, TreeModel};
pub use view::{ClickController, ItemView, TreeView};
