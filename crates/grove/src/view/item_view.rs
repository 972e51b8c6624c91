//! Capability surface for decoratable item views.
//!
//! This module defines the [`ItemView`] trait, the contract between a
//! concrete view widget and the interaction layers stacked on top of it
//! (most importantly [`ClickController`](super::ClickController)). A
//! decorator pre-processes each input event, forwards it to the view's
//! `base_*` handler, and post-processes the outcome; the rest of the trait
//! is the state the decorator needs to read or override while doing so.
//!
//! [`TreeView`](super::TreeView) is the stock implementation. Custom views
//! implement this trait to gain the same interaction layers.

use grove_core::{Point, Rect};

use crate::model::{ModelIndex, SelectionModel};

use super::events::{
    KeyPressEvent, LeaveEvent, MouseDoubleClickEvent, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent,
};

/// The view surface a pointer-interaction decorator operates on.
///
/// The trait splits into four groups:
///
/// - **Hit-testing**: [`viewport_rect`](Self::viewport_rect) and
///   [`row_at`](Self::row_at) resolve event coordinates to rows.
/// - **Selection and cursor**: access to the view's [`SelectionModel`],
///   cursor placement, and row activation.
/// - **Gesture switches**: suspending the drag source and toggling rubber
///   band selection, so one gesture can claim the pointer from another.
/// - **Base handlers**: the view's own event handling, invoked by the
///   decorator after its pre-processing. A decorator always delegates to
///   these and propagates their result; it never replaces them.
///
/// # Contract
///
/// `base_*` handlers must not assume a decorator is present: they receive
/// exactly the events the view would see undecorated, in the order the
/// host delivers them. Implementations report `true` from a handler when
/// the event was consumed.
pub trait ItemView: Send + Sync {
    // =========================================================================
    // Hit-Testing
    // =========================================================================

    /// Returns the rectangle of the content area, in view coordinates.
    ///
    /// Events outside this rectangle (headers, scrollbars, margins) do not
    /// take part in row interaction.
    fn viewport_rect(&self) -> Rect;

    /// Resolves the row under the given position.
    ///
    /// Returns `None` for positions outside the viewport or over empty
    /// space below the last row. A miss is a normal outcome, not an error.
    fn row_at(&self, pos: Point) -> Option<ModelIndex>;

    // =========================================================================
    // Selection and Cursor
    // =========================================================================

    /// Returns the view's selection model.
    fn selection(&self) -> &SelectionModel;

    /// Returns the view's selection model mutably.
    fn selection_mut(&mut self) -> &mut SelectionModel;

    /// Places the keyboard cursor on the given row, selecting exactly it.
    ///
    /// Invalid indices are rejected with a warning and leave the view
    /// unchanged.
    fn set_cursor_row(&mut self, index: &ModelIndex);

    /// Emits the view's row-activation notification for the given row.
    ///
    /// Activation is the "open this row" action; it is independent of the
    /// row's selection state. Invalid indices are rejected with a warning.
    fn activate_row(&mut self, index: &ModelIndex);

    // =========================================================================
    // Gesture Switches
    // =========================================================================

    /// Suspends or resumes the view's drag source.
    ///
    /// While suspended, pointer motion must not start a drag. Views without
    /// a drag source treat this as a no-op; callers track their own
    /// suspension state rather than reading it back.
    fn set_drag_source_suspended(&mut self, suspended: bool);

    /// Returns whether a drag operation is currently in progress.
    fn has_active_drag(&self) -> bool {
        false
    }

    /// Returns whether rubber band selection is enabled.
    fn is_rubber_band_enabled(&self) -> bool;

    /// Enables or disables rubber band selection.
    fn set_rubber_band_enabled(&mut self, enabled: bool);

    // =========================================================================
    // Style Metrics
    // =========================================================================

    /// Width and height of the expander decoration, in pixels.
    fn expander_size(&self) -> f32;

    /// Horizontal padding between a row's cells, in pixels.
    fn horizontal_separator(&self) -> f32;

    // =========================================================================
    // Base Event Handlers
    // =========================================================================

    /// The view's own mouse press handling.
    fn base_mouse_press(&mut self, event: &MousePressEvent) -> bool;

    /// The view's own double-click handling.
    fn base_mouse_double_click(&mut self, event: &MouseDoubleClickEvent) -> bool;

    /// The view's own mouse release handling.
    fn base_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool;

    /// The view's own mouse move handling.
    fn base_mouse_move(&mut self, event: &MouseMoveEvent) -> bool;

    /// The view's own handling of the pointer leaving the view.
    fn base_leave(&mut self, event: &LeaveEvent) -> bool;

    /// The view's own key press handling.
    fn base_key_press(&mut self, event: &KeyPressEvent) -> bool;

    /// The view's own reaction to a drag operation starting.
    ///
    /// The default does nothing; views that need to adjust visual state
    /// when a drag begins override this.
    fn base_drag_begin(&mut self) {}
}
