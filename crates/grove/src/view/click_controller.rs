//! Click-mode decoration for item views.
//!
//! This module provides [`ClickController`], a stateful decorator over an
//! [`ItemView`]'s input pipeline. It adds single-click row activation with
//! hover tracking. It also carries multi-row selections through presses
//! that would otherwise collapse them, and arbitrates between drag
//! initiation and rubber band selection when both could claim the same
//! pointer motion.
//!
//! The controller owns the view. Events enter through
//! [`handle_event`](ClickController::handle_event) (or the per-event
//! handlers); each handler pre-processes the event, forwards it to the
//! view's `base_*` handler, and post-processes the outcome.
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
//! model.add_root("Inbox".to_string());
//!
//! let view = TreeView::new(model).with_view_size(Size::new(300.0, 200.0));
//! let controller = ClickController::new(view);
//! controller.set_single_click(true);
//! controller.row_hovered.connect(|row| {
//!     println!("hovering {row:?}");
//! });
//! ```

use std::sync::Arc;

use grove_core::{Property, Signal};

use crate::model::{ModelIndex, SelectionFilter, SelectionFlags};

use super::events::{
    KeyPressEvent, LeaveEvent, MouseButton, MouseDoubleClickEvent, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, ViewEvent,
};
use super::item_view::ItemView;

/// Single-click interaction layer over an [`ItemView`].
///
/// In single-click mode a plain primary press arms the controller and the
/// matching release activates the row under the pointer, while motion
/// tracks the hovered row. Independent of the mode, every press runs the
/// selection-preservation and gesture-arbitration steps, so multi-row
/// drags and rubber band selection keep working on the wrapped view.
///
/// # Signals
///
/// - `single_click_changed(bool)`: Emitted when the mode actually changes
/// - `row_hovered(Option<ModelIndex>)`: Emitted when the hovered row
///   changes during motion, and on leave (always with `None`)
pub struct ClickController<V: ItemView> {
    view: V,

    /// Whether a single primary click activates rows.
    single_click: Property<bool>,
    /// The next primary release activates the row under the pointer.
    release_activates: bool,
    /// The press suspended the view's drag source (rubber band pending).
    dnd_suspended: bool,
    /// The press disabled the view's rubber banding (drag pending).
    rubber_band_suspended: bool,
    /// Row currently under the pointer in single-click mode.
    hovered: Option<ModelIndex>,

    /// Deny-all filter installed around the base press handler to keep it
    /// from collapsing a multi-row selection. Recognized by identity.
    freeze_filter: SelectionFilter,

    /// Emitted when the single-click mode changes.
    pub single_click_changed: Signal<bool>,
    /// Emitted when the hovered row changes.
    pub row_hovered: Signal<Option<ModelIndex>>,
}

impl<V: ItemView> ClickController<V> {
    /// Wraps the given view. Single-click mode starts disabled.
    pub fn new(view: V) -> Self {
        Self {
            view,
            single_click: Property::new(false),
            release_activates: false,
            dnd_suspended: false,
            rubber_band_suspended: false,
            hovered: None,
            freeze_filter: Arc::new(|_, _| false),
            single_click_changed: Signal::new(),
            row_hovered: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the wrapped view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the wrapped view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Unwraps the controller, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Returns whether single-click activation is enabled.
    pub fn single_click(&self) -> bool {
        self.single_click.get()
    }

    /// Enables or disables single-click activation.
    ///
    /// `single_click_changed` is emitted only when the value actually
    /// changes.
    pub fn set_single_click(&self, single_click: bool) {
        if self.single_click.set(single_click) {
            self.single_click_changed.emit(single_click);
        }
    }

    /// Returns the row currently under the pointer, if any.
    ///
    /// Only tracked in single-click mode.
    pub fn hovered_row(&self) -> Option<&ModelIndex> {
        self.hovered.as_ref()
    }

    // =========================================================================
    // Event Entry
    // =========================================================================

    /// Routes an event through the controller.
    ///
    /// Consumed events are accepted; the return value reports whether the
    /// event was handled by the controller or the view.
    pub fn handle_event(&mut self, event: &mut ViewEvent) -> bool {
        let handled = match event {
            ViewEvent::MousePress(e) => self.handle_mouse_press(e),
            ViewEvent::DoubleClick(e) => self.handle_double_click(e),
            ViewEvent::MouseRelease(e) => self.handle_mouse_release(e),
            ViewEvent::MouseMove(e) => self.handle_mouse_move(e),
            ViewEvent::Leave(e) => self.handle_leave(e),
            ViewEvent::KeyPress(e) => self.handle_key_press(e),
        };
        if handled {
            event.accept();
        }
        handled
    }

    // =========================================================================
    // Mouse Press
    // =========================================================================

    /// Pre-processes a press, delegates it, and restores the selection.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        // Only this press may re-arm the next release.
        self.release_activates = false;

        let mut row = None;
        if self.view.viewport_rect().contains(event.local_pos) {
            row = self.view.row_at(event.local_pos);

            // A plain press on empty space clears the selection.
            if row.is_none() && event.modifiers.none() {
                self.view.selection_mut().clear_selection();
            }

            self.release_activates = self.single_click.get()
                && event.button == MouseButton::Left
                && event.modifiers.none();
        }

        // The base press handler collapses the selection to the pressed
        // row, which makes dragging several rows at once impossible.
        // Freeze the selection for the duration of the base handler, or
        // snapshot it when an external filter already occupies the slot.
        let mut snapshot: Vec<ModelIndex> = Vec::new();
        if self.preserving(&row, event.modifiers.none()) {
            if self.view.selection().selection_filter().is_none() {
                self.view
                    .selection_mut()
                    .set_selection_filter(Some(Arc::clone(&self.freeze_filter)));
            } else {
                snapshot = self.view.selection().selected_indices().to_vec();
            }
        }

        // A primary press claims the pointer for exactly one gesture:
        // empty space or an unselected row means a rubber band may start,
        // so drags are suspended; a selected row means a drag may start,
        // so rubber banding is disabled.
        if self.view.selection().selection_mode().allows_multiple()
            && self.view.is_rubber_band_enabled()
            && event.button == MouseButton::Left
        {
            let on_selected = row
                .as_ref()
                .is_some_and(|r| self.view.selection().is_selected(r));
            if on_selected {
                self.view.set_rubber_band_enabled(false);
                self.rubber_band_suspended = true;
            } else {
                self.view.set_drag_source_suspended(true);
                self.dnd_suspended = true;
            }
        }

        let result = self.view.base_mouse_press(event);

        // Restore what the base handler dropped, if the pressed row made
        // it through still selected. With the freeze filter installed
        // nothing was dropped; otherwise re-select the snapshot (the
        // external filter keeps its veto).
        if self.preserving(&row, event.modifiers.none()) && !self.freeze_installed() {
            self.view
                .selection_mut()
                .select_indices(&snapshot, SelectionFlags::SELECT);
        }

        // The freeze filter never outlives the press.
        if self.freeze_installed() {
            self.view.selection_mut().set_selection_filter(None);
        }

        result
    }

    /// Selection preservation applies to a plain press on a row that is
    /// (still) selected.
    fn preserving(&self, row: &Option<ModelIndex>, plain: bool) -> bool {
        plain
            && row
                .as_ref()
                .is_some_and(|r| self.view.selection().is_selected(r))
    }

    fn freeze_installed(&self) -> bool {
        self.view
            .selection()
            .selection_filter()
            .is_some_and(|f| Arc::ptr_eq(&f, &self.freeze_filter))
    }

    // =========================================================================
    // Double Click
    // =========================================================================

    /// In single-click mode double-clicks are swallowed whole; one click
    /// already activated the row.
    pub fn handle_double_click(&mut self, event: &mut MouseDoubleClickEvent) -> bool {
        self.release_activates = false;

        if self.view.viewport_rect().contains(event.local_pos) {
            let row = self.view.row_at(event.local_pos);

            if row.is_none() && event.modifiers.none() {
                self.view.selection_mut().clear_selection();
            }

            if self.single_click.get() {
                event.base.accept();
                return true;
            }
        }

        self.view.base_mouse_double_click(event)
    }

    // =========================================================================
    // Mouse Release
    // =========================================================================

    /// Finishes the press gesture: activation or selection narrowing,
    /// then release of any suspension taken at press time.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if self.view.viewport_rect().contains(event.local_pos) {
            if self.single_click.get() && self.release_activates {
                self.release_activates = false;

                if let Some(row) = self.view.row_at(event.local_pos) {
                    // Releases over the expander column toggle expansion;
                    // activating there as well would fight the toggle.
                    if !self.on_expander_band(event.local_pos.x, &row) {
                        if self.view.selection().is_selected(&row) {
                            self.view.selection_mut().clear_selection();
                            self.view.set_cursor_row(&row);
                        }
                        self.view.activate_row(&row);
                    }
                }
            } else if event.modifiers.none() && !self.dnd_suspended {
                // Narrow a preserved selection back to the row under the
                // pointer, so a full selection stays easy to change.
                if let Some(row) = self.view.row_at(event.local_pos)
                    && self.view.selection().is_selected(&row)
                {
                    self.view.selection_mut().clear_selection();
                    self.view.set_cursor_row(&row);
                }
            }
        }

        if self.dnd_suspended {
            self.view.set_drag_source_suspended(false);
            self.dnd_suspended = false;
        }
        if self.rubber_band_suspended {
            self.view.set_rubber_band_enabled(true);
            self.rubber_band_suspended = false;
        }

        self.view.base_mouse_release(event)
    }

    /// The expander band widens each indentation step by 4px and starts
    /// half a separator in; tree depth counts from 1 here.
    fn on_expander_band(&self, x: f32, row: &ModelIndex) -> bool {
        let step = self.view.expander_size() + 4.0;
        let lead = self.view.horizontal_separator() / 2.0;
        x <= lead + (row.depth() + 1) as f32 * step
    }

    // =========================================================================
    // Mouse Motion
    // =========================================================================

    /// Tracks the hovered row in single-click mode and watches for drags
    /// starting inside the base handler.
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if self.view.viewport_rect().contains(event.local_pos) && self.single_click.get() {
            if self.dnd_suspended {
                // A rubber band is being dragged; sweeping across rows
                // must not arm an activation.
                self.release_activates = false;
            } else {
                let row = self.view.row_at(event.local_pos);
                if row != self.hovered {
                    self.hovered = row.clone();
                    self.row_hovered.emit(row);
                }
            }
        }

        let was_dragging = self.view.has_active_drag();
        let result = self.view.base_mouse_move(event);
        if !was_dragging && self.view.has_active_drag() {
            self.handle_drag_begin();
        }
        result
    }

    // =========================================================================
    // Leave
    // =========================================================================

    /// Resets hover and activation when the pointer leaves the view.
    ///
    /// `row_hovered` is emitted with `None` even when nothing was hovered;
    /// observers rely on the notification to reset row styling.
    pub fn handle_leave(&mut self, event: &LeaveEvent) -> bool {
        self.hovered = None;
        self.row_hovered.emit(None);
        self.release_activates = false;
        self.view.base_leave(event)
    }

    // =========================================================================
    // Drag Begin
    // =========================================================================

    /// Reacts to a drag starting: a drag is never an activation click.
    ///
    /// The hover state is left as is. Called automatically when a base
    /// motion handler starts a drag; hosts starting drags programmatically
    /// call it themselves.
    pub fn handle_drag_begin(&mut self) {
        self.release_activates = false;
        self.view.base_drag_begin();
    }

    // =========================================================================
    // Key Press
    // =========================================================================

    /// Drops the hover when the keyboard moves the cursor.
    ///
    /// The pointer did not move, so no `row_hovered` notification is
    /// emitted for this reset.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if event.key.is_navigation() {
            self.hovered = None;
        }
        self.view.base_key_press(event)
    }
}

static_assertions::assert_impl_all!(
    ClickController<super::tree_view::TreeView>: Send, Sync
);
