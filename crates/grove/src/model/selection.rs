//! Selection state for item views.
//!
//! This module provides [`SelectionModel`], which tracks which rows of an
//! item view are selected, independent of the model that owns the data.
//!
//! # Example
//!
//! ```
//! use grove::model::{ModelIndex, SelectionFlags, SelectionMode, SelectionModel};
//!
//! let mut selection = SelectionModel::new();
//! selection.set_selection_mode(SelectionMode::MultiSelection);
//!
//! selection.selection_changed.connect(|(selected, deselected)| {
//!     println!("selection changed: +{} -{}", selected.len(), deselected.len());
//! });
//!
//! let first = ModelIndex::new(0, ModelIndex::invalid());
//! selection.select(first.clone(), SelectionFlags::SELECT);
//! assert!(selection.is_selected(&first));
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use grove_core::Signal;

use super::index::ModelIndex;

/// Selection behavior mode for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No items can be selected.
    NoSelection,
    /// Only one item can be selected at a time (default).
    #[default]
    SingleSelection,
    /// Multiple items can be selected with Ctrl+click.
    MultiSelection,
    /// Range selection with Shift+click, extended by Ctrl+click.
    ExtendedSelection,
}

impl SelectionMode {
    /// Returns `true` if this mode permits more than one selected item.
    pub fn allows_multiple(self) -> bool {
        matches!(self, Self::MultiSelection | Self::ExtendedSelection)
    }
}

/// Veto hook consulted before any row's selection state is toggled.
///
/// The filter receives the index and its current selection state, and
/// returns whether the state may change. Returning `false` leaves the row
/// as it is. A filter that always returns `false` freezes the selection
/// entirely, which views use to carry a multi-row selection through a
/// press that would otherwise replace it.
///
/// Filters are compared by identity ([`Arc::ptr_eq`]), so a caller that
/// installs a filter can later recognize its own.
pub type SelectionFilter = Arc<dyn Fn(&ModelIndex, bool) -> bool + Send + Sync>;

/// Flags controlling selection operations.
///
/// These flags can be combined to perform complex selection operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionFlags {
    /// Clear existing selection before applying operation.
    pub clear: bool,
    /// Select the specified indices.
    pub select: bool,
    /// Deselect the specified indices.
    pub deselect: bool,
    /// Toggle selection state of specified indices.
    pub toggle: bool,
    /// Set as current index (keyboard focus).
    pub current: bool,
    /// Update anchor point for range selection.
    pub anchor: bool,
}

impl SelectionFlags {
    /// No operation.
    pub const NONE: Self = Self::empty();

    /// Clear existing selection.
    pub const CLEAR: Self = Self {
        clear: true,
        ..Self::empty()
    };

    /// Select the index.
    pub const SELECT: Self = Self {
        select: true,
        ..Self::empty()
    };

    /// Deselect the index.
    pub const DESELECT: Self = Self {
        deselect: true,
        ..Self::empty()
    };

    /// Toggle selection of the index.
    pub const TOGGLE: Self = Self {
        toggle: true,
        ..Self::empty()
    };

    /// Clear existing selection and select the index.
    pub const CLEAR_AND_SELECT: Self = Self {
        clear: true,
        select: true,
        ..Self::empty()
    };

    /// Set as current index.
    pub const CURRENT: Self = Self {
        current: true,
        ..Self::empty()
    };

    /// Select and set as current.
    pub const SELECT_CURRENT: Self = Self {
        select: true,
        current: true,
        ..Self::empty()
    };

    /// Clear, select, and set as current.
    pub const CLEAR_SELECT_CURRENT: Self = Self {
        clear: true,
        select: true,
        current: true,
        ..Self::empty()
    };

    const fn empty() -> Self {
        Self {
            clear: false,
            select: false,
            deselect: false,
            toggle: false,
            current: false,
            anchor: false,
        }
    }

    /// Creates flags with clear set.
    pub fn with_clear(mut self) -> Self {
        self.clear = true;
        self
    }

    /// Creates flags with select set.
    pub fn with_select(mut self) -> Self {
        self.select = true;
        self
    }

    /// Creates flags with current set.
    pub fn with_current(mut self) -> Self {
        self.current = true;
        self
    }

    /// Creates flags with anchor set.
    pub fn with_anchor(mut self) -> Self {
        self.anchor = true;
        self
    }
}

/// Manages selection state for item views.
///
/// SelectionModel tracks which items are selected, the current (focused)
/// item, and the anchor point for range selections. It works with any model
/// through `ModelIndex`.
///
/// Every state change runs through the optional [`SelectionFilter`]; a veto
/// from the filter takes precedence over mode enforcement and over the
/// requested operation.
///
/// # Signals
///
/// - `selection_changed`: Emitted when selection changes, with (selected, deselected) indices
/// - `current_changed`: Emitted when current index changes, with (new, old) indices
pub struct SelectionModel {
    /// Current selection mode.
    mode: SelectionMode,

    /// The current index (has keyboard focus).
    current: ModelIndex,

    /// Anchor index for range selection.
    anchor: ModelIndex,

    /// Set of selected item IDs for O(1) lookup.
    selected_ids: HashSet<u64>,

    /// Ordered list of selected indices.
    selected_indices: Vec<ModelIndex>,

    /// Veto hook for selection state changes.
    filter: Option<SelectionFilter>,

    /// Emitted when selection changes. Args: (selected, deselected)
    pub selection_changed: Signal<(Vec<ModelIndex>, Vec<ModelIndex>)>,

    /// Emitted when current index changes. Args: (new, old)
    pub current_changed: Signal<(ModelIndex, ModelIndex)>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    /// Creates a new selection model with default settings.
    pub fn new() -> Self {
        Self {
            mode: SelectionMode::default(),
            current: ModelIndex::invalid(),
            anchor: ModelIndex::invalid(),
            selected_ids: HashSet::new(),
            selected_indices: Vec::new(),
            filter: None,
            selection_changed: Signal::new(),
            current_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Selection Mode
    // =========================================================================

    /// Gets the current selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Changing mode does not clear existing selection, but subsequent
    /// selections will follow the new mode's behavior.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    // =========================================================================
    // Selection Filter
    // =========================================================================

    /// Returns the installed selection filter, if any.
    pub fn selection_filter(&self) -> Option<SelectionFilter> {
        self.filter.clone()
    }

    /// Installs or removes the selection filter.
    ///
    /// The filter is consulted for every individual row whose selection
    /// state is about to change, including rows removed by a clear.
    pub fn set_selection_filter(&mut self, filter: Option<SelectionFilter>) {
        self.filter = filter;
    }

    fn may_toggle(&self, index: &ModelIndex, currently_selected: bool) -> bool {
        match &self.filter {
            Some(filter) => filter(index, currently_selected),
            None => true,
        }
    }

    // =========================================================================
    // Current Index
    // =========================================================================

    /// Gets the current (focused) index.
    pub fn current_index(&self) -> &ModelIndex {
        &self.current
    }

    /// Sets the current index with optional selection flags.
    ///
    /// The current index represents keyboard focus and is distinct from
    /// selection, though they often move together.
    pub fn set_current_index(&mut self, index: ModelIndex, flags: SelectionFlags) {
        let old_current = std::mem::replace(&mut self.current, index.clone());

        if flags.current && old_current != index {
            self.current_changed.emit((index.clone(), old_current));
        }

        // Apply selection flags
        if flags.clear || flags.select || flags.deselect || flags.toggle {
            self.select(index.clone(), flags);
        }

        if flags.anchor {
            self.anchor = index;
        }
    }

    // =========================================================================
    // Anchor (for range selection)
    // =========================================================================

    /// Gets the anchor index for range selection.
    pub fn anchor_index(&self) -> &ModelIndex {
        &self.anchor
    }

    /// Sets the anchor index for range selection.
    pub fn set_anchor_index(&mut self, index: ModelIndex) {
        self.anchor = index;
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// Checks if an index is selected.
    pub fn is_selected(&self, index: &ModelIndex) -> bool {
        if !index.is_valid() {
            return false;
        }
        self.selected_ids.contains(&index.internal_id())
    }

    /// Returns true if any items are selected.
    pub fn has_selection(&self) -> bool {
        !self.selected_indices.is_empty()
    }

    /// Returns the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selected_indices.len()
    }

    /// Returns the selected indices in selection order.
    pub fn selected_indices(&self) -> &[ModelIndex] {
        &self.selected_indices
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Performs a selection operation on an index.
    ///
    /// The behavior depends on the flags:
    /// - `clear`: Deselects all items first
    /// - `select`: Adds the index to selection
    /// - `deselect`: Removes the index from selection
    /// - `toggle`: Toggles the selection state
    pub fn select(&mut self, index: ModelIndex, flags: SelectionFlags) {
        self.apply(std::slice::from_ref(&index), flags);
    }

    /// Performs a selection operation on a batch of indices.
    ///
    /// The whole batch is applied as one step and produces at most one
    /// `selection_changed` emission. Views use this for range selection
    /// and rubber band updates.
    pub fn select_indices(&mut self, indices: &[ModelIndex], flags: SelectionFlags) {
        self.apply(indices, flags);
    }

    fn apply(&mut self, indices: &[ModelIndex], flags: SelectionFlags) {
        if self.mode == SelectionMode::NoSelection {
            return;
        }

        let mut newly_selected = Vec::new();
        let mut newly_deselected = Vec::new();

        // Clear existing selection if requested. Rows whose deselection the
        // filter vetoes stay selected.
        if flags.clear && !self.selected_indices.is_empty() {
            let previous = std::mem::take(&mut self.selected_indices);
            for idx in previous {
                if self.may_toggle(&idx, true) {
                    self.selected_ids.remove(&idx.internal_id());
                    newly_deselected.push(idx);
                } else {
                    self.selected_indices.push(idx);
                }
            }
        }

        // Apply the operation to each index
        for index in indices {
            if !index.is_valid() {
                continue;
            }
            let id = index.internal_id();
            let was_selected = self.selected_ids.contains(&id);

            let wants_select = (flags.select && !was_selected) || (flags.toggle && !was_selected);
            let wants_deselect = (flags.deselect && was_selected) || (flags.toggle && was_selected);

            if wants_select && self.may_toggle(index, false) {
                self.add_to_selection(index.clone());
                newly_selected.push(index.clone());
            } else if wants_deselect && self.may_toggle(index, true) {
                self.selected_ids.remove(&id);
                self.selected_indices.retain(|idx| idx.internal_id() != id);
                if !newly_deselected.iter().any(|idx| idx.internal_id() == id) {
                    newly_deselected.push(index.clone());
                }
            }
        }

        // Enforce single selection mode. A filter veto wins over enforcement.
        if self.mode == SelectionMode::SingleSelection && self.selected_indices.len() > 1 {
            let mut kept = Vec::new();
            let candidates = std::mem::take(&mut self.selected_indices);
            let last = candidates.len() - 1;
            for (pos, idx) in candidates.into_iter().enumerate() {
                if pos == last || !self.may_toggle(&idx, true) {
                    kept.push(idx);
                } else {
                    self.selected_ids.remove(&idx.internal_id());
                    if !newly_deselected
                        .iter()
                        .any(|d| d.internal_id() == idx.internal_id())
                    {
                        newly_deselected.push(idx);
                    }
                }
            }
            self.selected_indices = kept;
        }

        // Remove duplicates from newly_deselected (items that were cleared but then re-selected)
        newly_deselected.retain(|idx| !self.selected_ids.contains(&idx.internal_id()));

        // Emit signal if selection actually changed
        if !newly_selected.is_empty() || !newly_deselected.is_empty() {
            self.selection_changed
                .emit((newly_selected, newly_deselected));
        }
    }

    /// Clears all selection.
    pub fn clear_selection(&mut self) {
        if self.selected_indices.is_empty() {
            return;
        }

        let previous = std::mem::take(&mut self.selected_indices);
        let mut deselected = Vec::new();
        for idx in previous {
            if self.may_toggle(&idx, true) {
                self.selected_ids.remove(&idx.internal_id());
                deselected.push(idx);
            } else {
                self.selected_indices.push(idx);
            }
        }

        if !deselected.is_empty() {
            self.selection_changed.emit((Vec::new(), deselected));
        }
    }

    /// Clears all selection and resets current/anchor.
    pub fn clear(&mut self) {
        self.clear_selection();
        self.current = ModelIndex::invalid();
        self.anchor = ModelIndex::invalid();
    }

    /// Resets the selection model (called when model is reset).
    pub fn reset(&mut self) {
        self.clear();
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn add_to_selection(&mut self, index: ModelIndex) {
        let id = index.internal_id();
        if self.selected_ids.insert(id) {
            self.selected_indices.push(index);
        }
    }
}

static_assertions::assert_impl_all!(SelectionModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn index(row: usize) -> ModelIndex {
        ModelIndex::new(row, ModelIndex::invalid())
    }

    #[test]
    fn test_selection_model_creation() {
        let model = SelectionModel::new();
        assert_eq!(model.selection_mode(), SelectionMode::SingleSelection);
        assert!(!model.current_index().is_valid());
        assert!(!model.has_selection());
        assert!(model.selection_filter().is_none());
    }

    #[test]
    fn test_allows_multiple() {
        assert!(!SelectionMode::NoSelection.allows_multiple());
        assert!(!SelectionMode::SingleSelection.allows_multiple());
        assert!(SelectionMode::MultiSelection.allows_multiple());
        assert!(SelectionMode::ExtendedSelection.allows_multiple());
    }

    #[test]
    fn test_single_selection_replaces() {
        let mut model = SelectionModel::new();
        let idx1 = index(0);
        let idx2 = index(1);

        model.select(idx1.clone(), SelectionFlags::SELECT);
        assert!(model.is_selected(&idx1));
        assert_eq!(model.selected_count(), 1);

        model.select(idx2.clone(), SelectionFlags::CLEAR_AND_SELECT);
        assert!(!model.is_selected(&idx1));
        assert!(model.is_selected(&idx2));
        assert_eq!(model.selected_count(), 1);
    }

    #[test]
    fn test_multi_selection() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::MultiSelection);

        let idx1 = index(0);
        let idx2 = index(1);

        model.select(idx1.clone(), SelectionFlags::SELECT);
        model.select(idx2.clone(), SelectionFlags::SELECT);

        assert!(model.is_selected(&idx1));
        assert!(model.is_selected(&idx2));
        assert_eq!(model.selected_count(), 2);
    }

    #[test]
    fn test_toggle_selection() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::MultiSelection);

        let idx = index(0);

        model.select(idx.clone(), SelectionFlags::TOGGLE);
        assert!(model.is_selected(&idx));

        model.select(idx.clone(), SelectionFlags::TOGGLE);
        assert!(!model.is_selected(&idx));
    }

    #[test]
    fn test_select_indices_batch() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::MultiSelection);

        let emissions = std::sync::Arc::new(AtomicUsize::new(0));
        let emissions_clone = emissions.clone();
        model.selection_changed.connect(move |_| {
            emissions_clone.fetch_add(1, Ordering::SeqCst);
        });

        let batch = vec![index(2), index(3), index(4)];
        model.select_indices(&batch, SelectionFlags::CLEAR_AND_SELECT);

        assert_eq!(model.selected_count(), 3);
        assert_eq!(emissions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_selection() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::MultiSelection);

        model.select(index(0), SelectionFlags::SELECT);
        model.select(index(1), SelectionFlags::SELECT);
        assert_eq!(model.selected_count(), 2);

        model.clear_selection();
        assert!(!model.has_selection());
    }

    #[test]
    fn test_no_selection_mode() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::NoSelection);

        model.select(index(0), SelectionFlags::SELECT);
        assert!(!model.has_selection());
    }

    #[test]
    fn test_deny_all_filter_freezes_selection() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::MultiSelection);

        let idx1 = index(0);
        let idx2 = index(1);
        model.select(idx1.clone(), SelectionFlags::SELECT);
        model.select(idx2.clone(), SelectionFlags::SELECT);

        model.set_selection_filter(Some(Arc::new(|_, _| false)));

        // Neither replacing nor clearing may change anything now
        model.select(index(5), SelectionFlags::CLEAR_AND_SELECT);
        assert_eq!(model.selected_count(), 2);
        assert!(model.is_selected(&idx1));
        assert!(model.is_selected(&idx2));

        model.clear_selection();
        assert_eq!(model.selected_count(), 2);

        model.set_selection_filter(None);
        model.clear_selection();
        assert!(!model.has_selection());
    }

    #[test]
    fn test_filter_selective_veto() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::MultiSelection);

        let keeper = index(7);
        let keeper_id = keeper.internal_id();
        model.select(keeper.clone(), SelectionFlags::SELECT);
        model.select(index(8), SelectionFlags::SELECT);

        // Veto only deselection of the keeper row
        model.set_selection_filter(Some(Arc::new(move |idx, currently_selected| {
            !(currently_selected && idx.internal_id() == keeper_id)
        })));

        model.select(index(9), SelectionFlags::CLEAR_AND_SELECT);
        assert!(model.is_selected(&keeper));
        assert_eq!(model.selected_count(), 2);
    }

    #[test]
    fn test_filter_identity_round_trip() {
        let mut model = SelectionModel::new();
        let filter: SelectionFilter = Arc::new(|_, _| false);
        model.set_selection_filter(Some(filter.clone()));

        let installed = model.selection_filter();
        assert!(installed.is_some_and(|f| Arc::ptr_eq(&f, &filter)));

        model.set_selection_filter(None);
        assert!(model.selection_filter().is_none());
    }

    #[test]
    fn test_selection_signal() {
        let mut model = SelectionModel::new();
        model.set_selection_mode(SelectionMode::MultiSelection);

        let selected_count = std::sync::Arc::new(AtomicUsize::new(0));
        let count_clone = selected_count.clone();

        model.selection_changed.connect(move |(selected, _)| {
            count_clone.fetch_add(selected.len(), Ordering::SeqCst);
        });

        model.select(index(0), SelectionFlags::SELECT);
        model.select(index(1), SelectionFlags::SELECT);

        assert_eq!(selected_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_current_changed_signal() {
        let mut model = SelectionModel::new();

        let changed_count = std::sync::Arc::new(AtomicUsize::new(0));
        let count_clone = changed_count.clone();

        model.current_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.set_current_index(index(0), SelectionFlags::CURRENT);
        model.set_current_index(index(1), SelectionFlags::CURRENT);

        assert_eq!(changed_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_anchor_with_flags() {
        let mut model = SelectionModel::new();
        let idx = index(3);
        model.set_current_index(idx.clone(), SelectionFlags::CURRENT.with_anchor());
        assert_eq!(model.anchor_index(), &idx);
    }
}
