//! Tree view over hierarchical item models.
//!
//! This module provides [`TreeView`], the stock [`ItemView`] implementation.
//! It walks an [`ItemModel`] into a flat list of visible rows, hit-tests
//! pointer positions against fixed-height rows, and handles expansion,
//! selection, rubber band, drag initiation, and keyboard navigation.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use grove::model::{ModelIndex, TreeModel};
//! use grove::view::TreeView;
//! use grove_core::Size;
//!
//! let model = Arc::new(TreeModel::new());
//! let root = model.add_root("Documents".to_string());
//! model.add_child(root, "notes.txt".to_string());
//!
//! let mut view = TreeView::new(model).with_view_size(Size::new(300.0, 200.0));
//! view.expanded.connect(|index| {
//!     println!("expanded row {}", index.row());
//! });
//! view.expand(&view.model().index(0, &ModelIndex::invalid()));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use grove_core::{Point, Rect, Signal, Size};

use crate::model::{ItemModel, ModelIndex, SelectionFlags, SelectionMode, SelectionModel};

use super::drag::{DragData, DragSource, DropAction};
use super::events::{
    Key, KeyPressEvent, KeyboardModifiers, LeaveEvent, MouseButton, MouseDoubleClickEvent,
    MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
};
use super::item_view::ItemView;

/// A row of the tree that is currently visible.
///
/// Produced by walking the model with the expansion set applied. The rect
/// is in content coordinates; subtract the scroll offset for view
/// coordinates.
#[derive(Debug, Clone)]
struct VisibleRow {
    /// The model index for this row.
    index: ModelIndex,
    /// The depth (indentation level) of this row, 0 for roots.
    depth: usize,
    /// Whether this row has children.
    has_children: bool,
    /// Whether this row is expanded (only meaningful if has_children).
    is_expanded: bool,
    /// The row rectangle in content coordinates.
    rect: Rect,
}

/// A view widget for hierarchical data.
///
/// TreeView displays rows from an [`ItemModel`] with:
/// - Expand/collapse tracking per row
/// - Fixed-height rows and position hit-testing
/// - Selection commands derived from mouse buttons and modifiers
/// - Rubber band selection on empty-area drags in multi-selection modes
/// - Drag initiation once pointer motion passes the drag threshold
/// - Keyboard navigation that moves the cursor row
///
/// The visible-row list is recomputed from the model on each query, so
/// model mutations are picked up without change notifications.
///
/// # Signals
///
/// - `activated(ModelIndex)`: Emitted when a row is activated
/// - `expanded(ModelIndex)`: Emitted when a row is expanded
/// - `collapsed(ModelIndex)`: Emitted when a row is collapsed
pub struct TreeView {
    // Model/View
    model: Arc<dyn ItemModel>,
    selection_model: SelectionModel,

    // Tree structure
    /// Set of expanded rows (by internal_id for stable tracking).
    expanded_ids: HashSet<u64>,

    // Geometry
    view_size: Size,
    scroll_y: f32,
    row_height: f32,
    indentation: f32,
    expander_size: f32,
    horizontal_separator: f32,

    // Interaction state
    pressed_row: Option<ModelIndex>,
    rubber_band_enabled: bool,
    /// Press position that may grow into a rubber band.
    rubber_band_origin: Option<Point>,
    /// Current pointer position while the band is being dragged.
    rubber_band_pos: Option<Point>,

    // Drag and drop
    drag_enabled: bool,
    drag_actions: DropAction,
    drag_source: DragSource,

    // Signals
    /// Emitted when a row is activated.
    pub activated: Signal<ModelIndex>,
    /// Emitted when a row is expanded.
    pub expanded: Signal<ModelIndex>,
    /// Emitted when a row is collapsed.
    pub collapsed: Signal<ModelIndex>,
}

impl TreeView {
    /// Creates a tree view over the given model.
    pub fn new(model: Arc<dyn ItemModel>) -> Self {
        Self {
            model,
            selection_model: SelectionModel::new(),
            expanded_ids: HashSet::new(),
            view_size: Size::ZERO,
            scroll_y: 0.0,
            row_height: 24.0,
            indentation: 20.0,
            expander_size: 16.0,
            horizontal_separator: 4.0,
            pressed_row: None,
            rubber_band_enabled: true,
            rubber_band_origin: None,
            rubber_band_pos: None,
            drag_enabled: false,
            drag_actions: DropAction::COPY | DropAction::MOVE,
            drag_source: DragSource::new(),
            activated: Signal::new(),
            expanded: Signal::new(),
            collapsed: Signal::new(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Sets the selection mode using builder pattern.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_model.set_selection_mode(mode);
        self
    }

    /// Sets the view size using builder pattern.
    pub fn with_view_size(mut self, size: Size) -> Self {
        self.view_size = size;
        self
    }

    /// Sets the row height using builder pattern.
    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    /// Enables drag initiation using builder pattern.
    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    // =========================================================================
    // Model
    // =========================================================================

    /// Returns the model this view displays.
    pub fn model(&self) -> &Arc<dyn ItemModel> {
        &self.model
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Returns the selection model.
    pub fn selection_model(&self) -> &SelectionModel {
        &self.selection_model
    }

    /// Returns the selection model mutably.
    pub fn selection_model_mut(&mut self) -> &mut SelectionModel {
        &mut self.selection_model
    }

    /// Returns the current (cursor) index.
    pub fn current_index(&self) -> &ModelIndex {
        self.selection_model.current_index()
    }

    /// Returns the selected indices in selection order.
    pub fn selected_indices(&self) -> &[ModelIndex] {
        self.selection_model.selected_indices()
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection_model.clear_selection();
    }

    // =========================================================================
    // Expand/Collapse
    // =========================================================================

    /// Returns whether the row at the given index is expanded.
    pub fn is_expanded(&self, index: &ModelIndex) -> bool {
        if !index.is_valid() {
            return false;
        }
        self.expanded_ids.contains(&index.internal_id())
    }

    /// Expands the row at the given index.
    pub fn expand(&mut self, index: &ModelIndex) {
        if !index.is_valid() {
            return;
        }
        if !self.model.has_children(index) {
            return;
        }
        if self.expanded_ids.insert(index.internal_id()) {
            self.expanded.emit(index.clone());
        }
    }

    /// Collapses the row at the given index.
    pub fn collapse(&mut self, index: &ModelIndex) {
        if !index.is_valid() {
            return;
        }
        if self.expanded_ids.remove(&index.internal_id()) {
            self.collapsed.emit(index.clone());
        }
    }

    /// Toggles the expanded state of the row at the given index.
    pub fn toggle_expanded(&mut self, index: &ModelIndex) {
        if self.is_expanded(index) {
            self.collapse(index);
        } else {
            self.expand(index);
        }
    }

    /// Expands every row in the tree. Emits no `expanded` signals.
    pub fn expand_all(&mut self) {
        let model = Arc::clone(&self.model);
        self.expand_all_recursive(&*model, &ModelIndex::invalid());
    }

    fn expand_all_recursive(&mut self, model: &dyn ItemModel, parent: &ModelIndex) {
        for row in 0..model.row_count(parent) {
            let index = model.index(row, parent);
            if model.has_children(&index) {
                self.expanded_ids.insert(index.internal_id());
                self.expand_all_recursive(model, &index);
            }
        }
    }

    /// Collapses every row in the tree. Emits no `collapsed` signals.
    pub fn collapse_all(&mut self) {
        self.expanded_ids.clear();
    }

    /// Expands all ancestors of the given index so it becomes visible.
    pub fn expand_to_index(&mut self, index: &ModelIndex) {
        if !index.is_valid() {
            return;
        }
        for ancestor in index.ancestors() {
            self.expanded_ids.insert(ancestor.internal_id());
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Returns the view size.
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size (normally driven by the host's layout).
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y());
    }

    /// Returns the fixed row height.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Returns the vertical scroll offset in content coordinates.
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Sets the vertical scroll offset, clamped to the content height.
    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = y.clamp(0.0, self.max_scroll_y());
    }

    fn max_scroll_y(&self) -> f32 {
        (self.content_height() - self.view_size.height).max(0.0)
    }

    /// Returns the total height of all visible rows.
    pub fn content_height(&self) -> f32 {
        self.visible_row_count() as f32 * self.row_height
    }

    /// Returns the number of currently visible rows.
    pub fn visible_row_count(&self) -> usize {
        self.visible_rows().len()
    }

    /// Resolves the row under the given position, in view coordinates.
    pub fn index_at(&self, point: Point) -> Option<ModelIndex> {
        if !self.viewport_rect().contains(point) {
            return None;
        }
        let content_y = point.y + self.scroll_y;
        if content_y < 0.0 {
            return None;
        }
        let row_idx = (content_y / self.row_height) as usize;
        self.visible_rows().get(row_idx).map(|r| r.index.clone())
    }

    /// Returns the row rectangle in view coordinates, if the row is visible.
    pub fn visual_rect(&self, index: &ModelIndex) -> Option<Rect> {
        let rows = self.visible_rows();
        let pos = Self::position_of(&rows, index)?;
        let rect = rows[pos].rect;
        Some(Rect::new(
            rect.origin.x,
            rect.origin.y - self.scroll_y,
            rect.width(),
            rect.height(),
        ))
    }

    /// Walks the model into the flat list of visible rows.
    fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let model = Arc::clone(&self.model);
        self.collect_visible(&*model, &ModelIndex::invalid(), 0, &mut rows);
        rows
    }

    fn collect_visible(
        &self,
        model: &dyn ItemModel,
        parent: &ModelIndex,
        depth: usize,
        out: &mut Vec<VisibleRow>,
    ) {
        for row in 0..model.row_count(parent) {
            let index = model.index(row, parent);
            if !index.is_valid() {
                continue;
            }
            let has_children = model.has_children(&index);
            let is_expanded = self.expanded_ids.contains(&index.internal_id());
            let y = out.len() as f32 * self.row_height;
            out.push(VisibleRow {
                index: index.clone(),
                depth,
                has_children,
                is_expanded,
                rect: Rect::new(0.0, y, self.view_size.width, self.row_height),
            });
            if has_children && is_expanded {
                self.collect_visible(model, &index, depth + 1, out);
            }
        }
    }

    fn position_of(rows: &[VisibleRow], index: &ModelIndex) -> Option<usize> {
        if !index.is_valid() {
            return None;
        }
        rows.iter()
            .position(|r| r.index.internal_id() == index.internal_id())
    }

    // =========================================================================
    // Expander Hit-Testing
    // =========================================================================

    /// The expander decoration occupies one indentation slot at the row's
    /// depth. Rows without children have no expander.
    fn is_point_on_expander(&self, row: &VisibleRow, point: Point) -> bool {
        if !row.has_children {
            return false;
        }
        let indent = row.depth as f32 * self.indentation;
        point.x >= indent && point.x < indent + self.expander_size
    }

    // =========================================================================
    // Rubber Band
    // =========================================================================

    /// Returns whether rubber band selection may start on empty-area drags.
    pub fn rubber_band_enabled(&self) -> bool {
        self.rubber_band_enabled
    }

    /// Enables or disables rubber band selection.
    ///
    /// Disabling drops a band in progress.
    pub fn set_rubber_band(&mut self, enabled: bool) {
        self.rubber_band_enabled = enabled;
        if !enabled {
            self.rubber_band_origin = None;
            self.rubber_band_pos = None;
        }
    }

    /// Returns whether a rubber band is currently being dragged.
    pub fn is_rubber_band_active(&self) -> bool {
        self.rubber_band_origin.is_some() && self.rubber_band_pos.is_some()
    }

    /// Returns the current band rectangle in view coordinates.
    pub fn rubber_band_rect(&self) -> Option<Rect> {
        match (self.rubber_band_origin, self.rubber_band_pos) {
            (Some(origin), Some(pos)) => Some(Rect::from_corners(origin, pos)),
            _ => None,
        }
    }

    fn update_rubber_band(&mut self, pos: Point) {
        self.rubber_band_pos = Some(pos);
        let Some(band) = self.rubber_band_rect() else {
            return;
        };
        // Rows span the full viewport width, so only the band's vertical
        // extent decides membership. A rect intersection would miss on a
        // perfectly vertical sweep (zero-width band).
        let rows = self.visible_rows();
        let mut hit = Vec::new();
        for row in &rows {
            let top = row.rect.top() - self.scroll_y;
            let bottom = row.rect.bottom() - self.scroll_y;
            if top < band.bottom() && bottom > band.top() {
                hit.push(row.index.clone());
            }
        }
        // One batch per motion: rows leaving the band deselect, rows
        // entering select, all in a single signal emission.
        self.selection_model
            .select_indices(&hit, SelectionFlags::CLEAR_AND_SELECT);
    }

    // =========================================================================
    // Drag and Drop
    // =========================================================================

    /// Returns whether pointer motion may start drags.
    pub fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Enables or disables drag initiation.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
        if !enabled {
            self.drag_source.cancel_pending();
        }
    }

    /// Returns the drag source, for connecting to its `drag_started` signal.
    pub fn drag_source(&self) -> &DragSource {
        &self.drag_source
    }

    /// Returns the drag source mutably.
    pub fn drag_source_mut(&mut self) -> &mut DragSource {
        &mut self.drag_source
    }

    /// Arms the drag source from a press on a row.
    ///
    /// A press on a selected row drags the whole selection; a press on an
    /// unselected row drags just that row.
    fn arm_drag(&mut self, index: &ModelIndex, pos: Point) {
        if !self.drag_enabled {
            return;
        }
        let data = if self.selection_model.is_selected(index) {
            DragData::from_indices(self.selection_model.selected_indices().iter().cloned())
        } else {
            DragData::from_indices([index.clone()])
        };
        self.drag_source.prepare_drag(data, self.drag_actions, pos);
    }

    // =========================================================================
    // Mouse Handling
    // =========================================================================

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if !self.viewport_rect().contains(event.local_pos) {
            return false;
        }

        let rows = self.visible_rows();
        let content_y = event.local_pos.y + self.scroll_y;
        let row_idx = (content_y / self.row_height) as usize;

        if let Some(row) = rows.get(row_idx) {
            self.pressed_row = Some(row.index.clone());

            if self.is_point_on_expander(row, event.local_pos) {
                let index = row.index.clone();
                self.toggle_expanded(&index);
                return true;
            }

            let index = row.index.clone();
            let mode = self.selection_model.selection_mode();
            let flags = match mode {
                SelectionMode::NoSelection => SelectionFlags::NONE,
                SelectionMode::SingleSelection => {
                    SelectionFlags::CLEAR_SELECT_CURRENT.with_anchor()
                }
                SelectionMode::MultiSelection => {
                    if event.modifiers.control {
                        SelectionFlags::TOGGLE.with_current()
                    } else {
                        SelectionFlags::CLEAR_SELECT_CURRENT.with_anchor()
                    }
                }
                SelectionMode::ExtendedSelection => {
                    if event.modifiers.control {
                        SelectionFlags::TOGGLE.with_current()
                    } else if event.modifiers.shift {
                        let anchor_id = self.selection_model.anchor_index().internal_id();
                        if let Some(anchor_row) = rows
                            .iter()
                            .position(|r| r.index.internal_id() == anchor_id)
                        {
                            let start = anchor_row.min(row_idx);
                            let end = anchor_row.max(row_idx);
                            let range: Vec<ModelIndex> =
                                rows[start..=end].iter().map(|r| r.index.clone()).collect();
                            self.selection_model
                                .select_indices(&range, SelectionFlags::CLEAR_AND_SELECT);
                            self.selection_model
                                .set_current_index(index.clone(), SelectionFlags::CURRENT);
                            self.arm_drag(&index, event.local_pos);
                            return true;
                        }
                        SelectionFlags::CLEAR_SELECT_CURRENT.with_anchor()
                    } else {
                        SelectionFlags::CLEAR_SELECT_CURRENT.with_anchor()
                    }
                }
            };

            if flags.select || flags.toggle || flags.clear {
                self.selection_model.set_current_index(index.clone(), flags);
            }

            self.arm_drag(&index, event.local_pos);
            return true;
        }

        self.pressed_row = None;

        // Empty area: a plain press may begin a rubber band in modes that
        // allow more than one selected row.
        if self.rubber_band_enabled
            && self.selection_model.selection_mode().allows_multiple()
            && event.modifiers.none()
        {
            self.rubber_band_origin = Some(event.local_pos);
            self.rubber_band_pos = None;
            return true;
        }

        false
    }

    fn handle_mouse_double_click(&mut self, event: &MouseDoubleClickEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        let Some(index) = self.index_at(event.local_pos) else {
            return false;
        };
        if self.model.has_children(&index) {
            self.toggle_expanded(&index);
        } else {
            self.activated.emit(index);
        }
        true
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        let had_press = self.pressed_row.take().is_some();

        let had_pending = self.drag_source.has_pending_drag();
        self.drag_source.cancel_pending();
        let was_dragging = self.drag_source.is_dragging();
        if was_dragging {
            // No drop targets live in the view itself; a release simply
            // ends the operation.
            self.drag_source.end_drag(false);
        }

        let had_band = self.rubber_band_origin.take().is_some();
        self.rubber_band_pos = None;

        had_press || had_pending || was_dragging || had_band
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if !event.is_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.drag_source.is_dragging() {
            return true;
        }

        if self.drag_source.check_drag_start(event.local_pos) {
            // The drag claims the gesture; a half-armed band is obsolete.
            self.rubber_band_origin = None;
            self.rubber_band_pos = None;
            return true;
        }

        if self.rubber_band_enabled && self.rubber_band_origin.is_some() {
            self.update_rubber_band(event.local_pos);
            return true;
        }

        false
    }

    fn handle_leave(&mut self, _event: &LeaveEvent) -> bool {
        false
    }

    // =========================================================================
    // Keyboard Handling
    // =========================================================================

    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let rows = self.visible_rows();
        if rows.is_empty() {
            return false;
        }

        let current_id = self.selection_model.current_index().internal_id();
        let current_row = rows
            .iter()
            .position(|r| r.index.internal_id() == current_id);
        let row_count = rows.len();

        match event.key {
            Key::ArrowUp => {
                let new_row = current_row.map(|r| r.saturating_sub(1)).unwrap_or(0);
                self.move_to_row(&rows, new_row, &event.modifiers);
                true
            }
            Key::ArrowDown => {
                let new_row = current_row.map(|r| (r + 1).min(row_count - 1)).unwrap_or(0);
                self.move_to_row(&rows, new_row, &event.modifiers);
                true
            }
            Key::ArrowLeft => {
                if let Some(row_idx) = current_row {
                    let row = &rows[row_idx];
                    if row.has_children && row.is_expanded {
                        let index = row.index.clone();
                        self.collapse(&index);
                    } else if row.depth > 0 {
                        let parent = self.model.parent(&row.index);
                        if let Some(parent_row) = Self::position_of(&rows, &parent) {
                            self.move_to_row(&rows, parent_row, &event.modifiers);
                        }
                    }
                }
                true
            }
            Key::ArrowRight => {
                if let Some(row_idx) = current_row {
                    let row = &rows[row_idx];
                    if row.has_children {
                        if !row.is_expanded {
                            let index = row.index.clone();
                            self.expand(&index);
                        } else if row_idx + 1 < row_count {
                            // Already expanded: descend to the first child.
                            self.move_to_row(&rows, row_idx + 1, &event.modifiers);
                        }
                    }
                }
                true
            }
            Key::PageUp => {
                let per_page = self.rows_per_page();
                let new_row = current_row.map(|r| r.saturating_sub(per_page)).unwrap_or(0);
                self.move_to_row(&rows, new_row, &event.modifiers);
                true
            }
            Key::PageDown => {
                let per_page = self.rows_per_page();
                let new_row = current_row
                    .map(|r| (r + per_page).min(row_count - 1))
                    .unwrap_or(0);
                self.move_to_row(&rows, new_row, &event.modifiers);
                true
            }
            Key::Home => {
                self.move_to_row(&rows, 0, &event.modifiers);
                true
            }
            Key::End => {
                self.move_to_row(&rows, row_count - 1, &event.modifiers);
                true
            }
            Key::Space => {
                if let Some(row_idx) = current_row {
                    let index = rows[row_idx].index.clone();
                    self.selection_model.select(index, SelectionFlags::TOGGLE);
                }
                true
            }
            Key::Enter => {
                if let Some(row_idx) = current_row {
                    let row = &rows[row_idx];
                    let index = row.index.clone();
                    if row.has_children {
                        self.toggle_expanded(&index);
                    } else {
                        self.activated.emit(index);
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn rows_per_page(&self) -> usize {
        ((self.view_size.height / self.row_height) as usize).max(1)
    }

    fn move_to_row(&mut self, rows: &[VisibleRow], row_idx: usize, modifiers: &KeyboardModifiers) {
        if row_idx >= rows.len() {
            return;
        }

        let index = rows[row_idx].index.clone();
        let mode = self.selection_model.selection_mode();

        let flags = match mode {
            SelectionMode::NoSelection => SelectionFlags::CURRENT,
            SelectionMode::SingleSelection => SelectionFlags::CLEAR_SELECT_CURRENT.with_anchor(),
            SelectionMode::MultiSelection | SelectionMode::ExtendedSelection => {
                if modifiers.shift {
                    let anchor_id = self.selection_model.anchor_index().internal_id();
                    if let Some(anchor_row) = rows
                        .iter()
                        .position(|r| r.index.internal_id() == anchor_id)
                    {
                        let start = anchor_row.min(row_idx);
                        let end = anchor_row.max(row_idx);
                        let range: Vec<ModelIndex> =
                            rows[start..=end].iter().map(|r| r.index.clone()).collect();
                        self.selection_model
                            .select_indices(&range, SelectionFlags::CLEAR_AND_SELECT);
                    }
                    SelectionFlags::CURRENT
                } else if modifiers.control {
                    SelectionFlags::CURRENT
                } else {
                    SelectionFlags::CLEAR_SELECT_CURRENT.with_anchor()
                }
            }
        };

        self.selection_model.set_current_index(index, flags);
        self.scroll_row_into_view(row_idx);
    }

    fn scroll_row_into_view(&mut self, row_idx: usize) {
        let item_top = row_idx as f32 * self.row_height;
        let item_bottom = item_top + self.row_height;
        let viewport_bottom = self.scroll_y + self.view_size.height;

        if item_top < self.scroll_y {
            self.scroll_y = item_top;
        } else if item_bottom > viewport_bottom {
            self.scroll_y = item_bottom - self.view_size.height;
        }
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y());
    }
}

// =============================================================================
// ItemView
// =============================================================================

impl ItemView for TreeView {
    fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.view_size.width, self.view_size.height)
    }

    fn row_at(&self, pos: Point) -> Option<ModelIndex> {
        self.index_at(pos)
    }

    fn selection(&self) -> &SelectionModel {
        &self.selection_model
    }

    fn selection_mut(&mut self) -> &mut SelectionModel {
        &mut self.selection_model
    }

    fn set_cursor_row(&mut self, index: &ModelIndex) {
        if !index.is_valid() {
            tracing::warn!(target: "grove::view", "set_cursor_row called with an invalid index");
            return;
        }
        self.selection_model.set_current_index(
            index.clone(),
            SelectionFlags::CLEAR_SELECT_CURRENT.with_anchor(),
        );
    }

    fn activate_row(&mut self, index: &ModelIndex) {
        if !index.is_valid() {
            tracing::warn!(target: "grove::view", "activate_row called with an invalid index");
            return;
        }
        self.activated.emit(index.clone());
    }

    fn set_drag_source_suspended(&mut self, suspended: bool) {
        if !self.drag_enabled {
            return;
        }
        if suspended {
            self.drag_source.suspend();
        } else {
            self.drag_source.resume();
        }
    }

    fn has_active_drag(&self) -> bool {
        self.drag_source.is_dragging()
    }

    fn is_rubber_band_enabled(&self) -> bool {
        self.rubber_band_enabled
    }

    fn set_rubber_band_enabled(&mut self, enabled: bool) {
        self.set_rubber_band(enabled);
    }

    fn expander_size(&self) -> f32 {
        self.expander_size
    }

    fn horizontal_separator(&self) -> f32 {
        self.horizontal_separator
    }

    fn base_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        self.handle_mouse_press(event)
    }

    fn base_mouse_double_click(&mut self, event: &MouseDoubleClickEvent) -> bool {
        self.handle_mouse_double_click(event)
    }

    fn base_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        self.handle_mouse_release(event)
    }

    fn base_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        self.handle_mouse_move(event)
    }

    fn base_leave(&mut self, event: &LeaveEvent) -> bool {
        self.handle_leave(event)
    }

    fn base_key_press(&mut self, event: &KeyPressEvent) -> bool {
        self.handle_key_press(event)
    }
}

static_assertions::assert_impl_all!(TreeView: Send, Sync);
