//! Item views and their input pipeline.
//!
//! This module contains the display side of the Model/View split: views
//! render what an [`ItemModel`](crate::model::ItemModel) reports and turn
//! pointer and keyboard input into selection, expansion, activation, and
//! drag gestures.
//!
//! # Core Types
//!
//! - [`TreeView`]: Hierarchical view over an item model with expansion,
//!   selection, rubber band selection, and drag support
//! - [`ClickController`]: Decorator adding single-click activation and
//!   hover tracking to any [`ItemView`]
//! - [`ItemView`]: The seam between the controller and a concrete view
//! - [`ViewEvent`]: Input events a view consumes
//! - [`DragSource`](drag::DragSource): Threshold-based drag initiation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use grove::model::TreeModel;
//! use grove::view::{ClickController, MousePressEvent, MouseReleaseEvent, TreeView, ViewEvent};
//! use grove::view::{KeyboardModifiers, MouseButton};
//! use grove_core::{Point, Size};
//!
//! let model = Arc::new(TreeModel::new());
//! model.add_root("Documents".to_string());
//!
//! let view = TreeView::new(model).with_view_size(Size::new(300.0, 200.0));
//! let mut controller = ClickController::new(view);
//! controller.set_single_click(true);
//!
//! controller.view().activated.connect(|index| {
//!     println!("opened row {}", index.row());
//! });
//!
//! // One plain click opens the row.
//! let pos = Point::new(120.0, 10.0);
//! let mut press = ViewEvent::MousePress(MousePressEvent::new(
//!     MouseButton::Left, pos, KeyboardModifiers::NONE,
//! ));
//! controller.handle_event(&mut press);
//! let mut release = ViewEvent::MouseRelease(MouseReleaseEvent::new(
//!     MouseButton::Left, pos, KeyboardModifiers::NONE,
//! ));
//! controller.handle_event(&mut release);
//! ```

mod click_controller;
pub mod drag;
mod events;
mod item_view;
mod tree_view;

pub use click_controller::ClickController;
pub use drag::{DragData, DragError, DragSource, DragState, DropAction};
pub use events::{
    EventBase, Key, KeyPressEvent, KeyboardModifiers, LeaveEvent, MouseButton,
    MouseDoubleClickEvent, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, ViewEvent,
};
pub use item_view::ItemView;
pub use tree_view::TreeView;
