//! Drag support for item views.
//!
//! Each view owns a [`DragSource`] that turns a press-and-move gesture into
//! a drag once the pointer travels past a small threshold. The threshold
//! keeps ordinary clicks from starting drags.
//!
//! ```
//! use grove::view::drag::{DragData, DragSource, DropAction};
//! use grove_core::Point;
//!
//! let mut source = DragSource::new();
//! source.prepare_drag(DragData::from_text("row 3"), DropAction::COPY, Point::new(10.0, 10.0));
//!
//! // Not far enough yet
//! assert!(!source.check_drag_start(Point::new(11.0, 10.0)));
//! // Past the threshold
//! assert!(source.check_drag_start(Point::new(20.0, 10.0)));
//! assert!(source.is_dragging());
//! ```
//!
//! A view's drag source can be suspended. While suspended, pending drags
//! never cross the threshold and programmatic starts fail, which lets
//! another gesture (such as rubber band selection) claim the same pointer
//! motion.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use grove_core::{Point, Signal};

use crate::model::ModelIndex;

/// Standard MIME types used in drag operations.
pub mod mime {
    /// Plain text MIME type.
    pub const TEXT_PLAIN: &str = "text/plain";
    /// Custom application data prefix.
    pub const APPLICATION_PREFIX: &str = "application/x-grove-";
}

/// Actions that can be performed when a drag is dropped.
///
/// These flags indicate what actions are supported by the drag source
/// and what action was performed by the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DropAction(u8);

impl DropAction {
    /// No action (drop not allowed).
    pub const NONE: Self = Self(0);
    /// Copy the data.
    pub const COPY: Self = Self(1 << 0);
    /// Move the data (source should delete original).
    pub const MOVE: Self = Self(1 << 1);
    /// Create a link/reference to the data.
    pub const LINK: Self = Self(1 << 2);
    /// All standard actions (copy, move, and link).
    pub const ALL: Self = Self(Self::COPY.0 | Self::MOVE.0 | Self::LINK.0);

    /// Returns true if this action set contains the Copy action.
    pub fn can_copy(self) -> bool {
        self.contains(Self::COPY)
    }

    /// Returns true if this action set contains the Move action.
    pub fn can_move(self) -> bool {
        self.contains(Self::MOVE)
    }

    /// Returns true if this action set contains the Link action.
    pub fn can_link(self) -> bool {
        self.contains(Self::LINK)
    }

    /// Returns true if this action set contains another action.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns the preferred action from this set.
    ///
    /// Priority: Copy > Move > Link > None
    pub fn preferred(self) -> Self {
        if self.can_copy() {
            Self::COPY
        } else if self.can_move() {
            Self::MOVE
        } else if self.can_link() {
            Self::LINK
        } else {
            Self::NONE
        }
    }
}

impl std::ops::BitOr for DropAction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for DropAction {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl std::ops::BitOrAssign for DropAction {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAndAssign for DropAction {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

/// Data being transferred in a drag operation.
///
/// `DragData` can hold multiple representations of the same data, each
/// identified by a MIME type, plus the model indices of the dragged rows
/// for drags that stay inside the application.
#[derive(Debug, Clone, Default)]
pub struct DragData {
    /// Data stored by MIME type.
    data: HashMap<String, Vec<u8>>,
    /// Model indices of the rows being dragged.
    indices: Vec<ModelIndex>,
}

impl DragData {
    /// Creates empty drag data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates drag data with plain text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut data = Self::default();
        data.set_text(text);
        data
    }

    /// Creates drag data from the rows being dragged.
    pub fn from_indices(indices: impl IntoIterator<Item = ModelIndex>) -> Self {
        let mut data = Self::default();
        data.indices = indices.into_iter().collect();
        data
    }

    /// Returns true if this drag data is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.indices.is_empty()
    }

    /// Returns the available MIME formats.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    /// Checks if data is available for the given MIME type.
    pub fn has_format(&self, mime_type: &str) -> bool {
        self.data.contains_key(mime_type)
    }

    /// Gets raw data for a MIME type.
    pub fn get_data(&self, mime_type: &str) -> Option<&[u8]> {
        self.data.get(mime_type).map(|v| v.as_slice())
    }

    /// Sets raw data for a MIME type.
    pub fn set_data(&mut self, mime_type: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.data.insert(mime_type.into(), data.into());
    }

    /// Returns true if plain text is available.
    pub fn has_text(&self) -> bool {
        self.has_format(mime::TEXT_PLAIN)
    }

    /// Gets the plain text content, if available.
    pub fn text(&self) -> Option<String> {
        self.get_data(mime::TEXT_PLAIN)
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    }

    /// Sets the plain text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.set_data(mime::TEXT_PLAIN, text.into_bytes());
    }

    /// Returns true if dragged rows are recorded.
    pub fn has_indices(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Gets the model indices of the dragged rows.
    pub fn indices(&self) -> &[ModelIndex] {
        &self.indices
    }

    /// Sets the model indices of the dragged rows.
    pub fn set_indices(&mut self, indices: impl IntoIterator<Item = ModelIndex>) {
        self.indices = indices.into_iter().collect();
    }
}

/// State of a drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No drag is active.
    Idle,
    /// A drag is in progress.
    Dragging,
}

/// Errors from drag source operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    /// The drag source is disabled.
    Disabled,
    /// The drag source is suspended by another gesture.
    Suspended,
    /// A drag is already in progress.
    AlreadyActive,
    /// The drag data carries nothing to transfer.
    EmptyData,
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "Drag source is disabled"),
            Self::Suspended => write!(f, "Drag source is suspended"),
            Self::AlreadyActive => write!(f, "A drag is already in progress"),
            Self::EmptyData => write!(f, "Drag data is empty"),
        }
    }
}

impl std::error::Error for DragError {}

/// Tracks the drag gesture for a single view.
///
/// A press on a draggable row arms the source with [`prepare_drag`]
/// (Self::prepare_drag); subsequent pointer motion is fed to
/// [`check_drag_start`](Self::check_drag_start), which starts the drag once
/// the motion exceeds the threshold. A release before that cancels the
/// pending drag.
///
/// # Signals
///
/// - `drag_started`: Emitted when a drag actually begins, with the data
pub struct DragSource {
    /// Whether this source may start drags at all.
    enabled: bool,
    /// Whether another gesture has claimed the pointer.
    suspended: bool,
    /// Current drag state.
    state: DragState,
    /// Data being dragged (if any).
    drag_data: Option<Arc<DragData>>,
    /// Supported actions for the current drag.
    supported_actions: DropAction,
    /// Position where the drag started.
    start_position: Point,
    /// Minimum distance to move before a drag starts.
    drag_threshold: f32,
    /// Whether we're in the "pending" state (mouse down, waiting for threshold).
    pending_drag: bool,
    /// Pending drag data (before threshold is reached).
    pending_data: Option<DragData>,
    /// Pending supported actions.
    pending_actions: DropAction,

    /// Emitted when a drag actually begins.
    pub drag_started: Signal<Arc<DragData>>,
}

impl Default for DragSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSource {
    /// Default drag threshold in pixels.
    pub const DEFAULT_DRAG_THRESHOLD: f32 = 4.0;

    /// Creates a new drag source.
    pub fn new() -> Self {
        Self {
            enabled: true,
            suspended: false,
            state: DragState::Idle,
            drag_data: None,
            supported_actions: DropAction::NONE,
            start_position: Point::ZERO,
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
            pending_drag: false,
            pending_data: None,
            pending_actions: DropAction::NONE,
            drag_started: Signal::new(),
        }
    }

    /// Returns whether this source may start drags.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the source. Disabling cancels any pending drag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.cancel_pending();
        }
    }

    /// Returns whether the source is suspended.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Suspends the source. A suspended source never crosses the threshold.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Lifts a suspension.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Sets the minimum distance (in pixels) the mouse must move to start a drag.
    pub fn set_drag_threshold(&mut self, threshold: f32) {
        self.drag_threshold = threshold;
    }

    /// Returns the drag threshold in pixels.
    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold
    }

    /// Returns the current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns true if a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Returns true if there's a pending drag waiting for the threshold.
    pub fn has_pending_drag(&self) -> bool {
        self.pending_drag
    }

    /// Returns the data being dragged, if any.
    pub fn drag_data(&self) -> Option<&DragData> {
        self.drag_data.as_ref().map(|arc| arc.as_ref())
    }

    /// Returns the supported actions for the current drag.
    pub fn supported_actions(&self) -> DropAction {
        self.supported_actions
    }

    /// Prepares a drag operation (called on mouse press).
    ///
    /// The actual drag won't start until the mouse moves past the threshold.
    /// This prevents accidental drags from interfering with normal clicks.
    pub fn prepare_drag(
        &mut self,
        data: DragData,
        supported_actions: DropAction,
        start_position: Point,
    ) {
        if !self.enabled || self.is_dragging() {
            return;
        }
        self.pending_drag = true;
        self.pending_data = Some(data);
        self.pending_actions = supported_actions;
        self.start_position = start_position;
    }

    /// Cancels a pending drag (before threshold is reached).
    pub fn cancel_pending(&mut self) {
        self.pending_drag = false;
        self.pending_data = None;
        self.pending_actions = DropAction::NONE;
    }

    /// Checks if a pending drag should start based on mouse movement.
    ///
    /// Returns true if the drag has just started. While the source is
    /// suspended this never starts a drag, but the pending state stays so
    /// the caller can resume and cancel it in the usual place.
    pub fn check_drag_start(&mut self, current_position: Point) -> bool {
        if !self.pending_drag || self.suspended || !self.enabled {
            return false;
        }

        let dx = current_position.x - self.start_position.x;
        let dy = current_position.y - self.start_position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance >= self.drag_threshold {
            if let Some(data) = self.pending_data.take() {
                let actions = self.pending_actions;
                self.pending_drag = false;
                self.pending_actions = DropAction::NONE;
                self.start_internal(data, actions, self.start_position);
                return true;
            }
        }

        false
    }

    /// Starts a drag operation immediately (for programmatic drags).
    pub fn start_drag(
        &mut self,
        data: DragData,
        supported_actions: DropAction,
        position: Point,
    ) -> Result<(), DragError> {
        if !self.enabled {
            return Err(DragError::Disabled);
        }
        if self.suspended {
            tracing::warn!(
                target: "grove::drag",
                "start_drag refused, the drag source is suspended"
            );
            return Err(DragError::Suspended);
        }
        if self.is_dragging() {
            return Err(DragError::AlreadyActive);
        }
        if data.is_empty() {
            return Err(DragError::EmptyData);
        }

        self.cancel_pending();
        self.start_internal(data, supported_actions, position);
        Ok(())
    }

    fn start_internal(&mut self, data: DragData, supported_actions: DropAction, position: Point) {
        let data = Arc::new(data);
        self.drag_data = Some(data.clone());
        self.supported_actions = supported_actions;
        self.state = DragState::Dragging;
        self.start_position = position;
        self.drag_started.emit(data);
    }

    /// Ends the drag operation and returns the data if dropped successfully.
    ///
    /// Returns `Some((data, action))` if the drop should be processed,
    /// or `None` if the drag was cancelled or never started.
    pub fn end_drag(&mut self, dropped: bool) -> Option<(Arc<DragData>, DropAction)> {
        let result = if dropped && self.is_dragging() {
            let action = self.supported_actions.preferred();
            self.drag_data.take().map(|data| (data, action))
        } else {
            None
        };

        self.reset();
        result
    }

    /// Cancels the current drag operation.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state = DragState::Idle;
        self.drag_data = None;
        self.supported_actions = DropAction::NONE;
        self.pending_drag = false;
        self.pending_data = None;
        self.pending_actions = DropAction::NONE;
    }
}

static_assertions::assert_impl_all!(DragSource: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_drop_action_flags() {
        let actions = DropAction::COPY | DropAction::MOVE;
        assert!(actions.can_copy());
        assert!(actions.can_move());
        assert!(!actions.can_link());
        assert_eq!(actions.preferred(), DropAction::COPY);
        assert_eq!(DropAction::NONE.preferred(), DropAction::NONE);
    }

    #[test]
    fn test_drag_data_text() {
        let data = DragData::from_text("hello");
        assert!(data.has_text());
        assert_eq!(data.text().as_deref(), Some("hello"));
        assert!(!data.is_empty());
    }

    #[test]
    fn test_drag_data_indices() {
        let idx = ModelIndex::new(4, ModelIndex::invalid());
        let data = DragData::from_indices([idx.clone()]);
        assert!(data.has_indices());
        assert_eq!(data.indices(), &[idx]);
    }

    #[test]
    fn test_threshold_crossing() {
        let mut source = DragSource::new();
        source.prepare_drag(
            DragData::from_text("row"),
            DropAction::COPY,
            Point::new(0.0, 0.0),
        );
        assert!(source.has_pending_drag());

        assert!(!source.check_drag_start(Point::new(2.0, 0.0)));
        assert!(!source.is_dragging());

        assert!(source.check_drag_start(Point::new(5.0, 0.0)));
        assert!(source.is_dragging());
        assert!(!source.has_pending_drag());
    }

    #[test]
    fn test_suspension_blocks_start() {
        let mut source = DragSource::new();
        source.prepare_drag(
            DragData::from_text("row"),
            DropAction::COPY,
            Point::new(0.0, 0.0),
        );
        source.suspend();

        // Far past the threshold, but suspended
        assert!(!source.check_drag_start(Point::new(100.0, 100.0)));
        assert!(!source.is_dragging());
        assert!(source.has_pending_drag());

        source.resume();
        assert!(source.check_drag_start(Point::new(100.0, 100.0)));
        assert!(source.is_dragging());
    }

    #[test]
    fn test_start_drag_errors() {
        let mut source = DragSource::new();

        source.set_enabled(false);
        let err = source
            .start_drag(DragData::from_text("x"), DropAction::COPY, Point::ZERO)
            .unwrap_err();
        assert_eq!(err, DragError::Disabled);

        source.set_enabled(true);
        source.suspend();
        let err = source
            .start_drag(DragData::from_text("x"), DropAction::COPY, Point::ZERO)
            .unwrap_err();
        assert_eq!(err, DragError::Suspended);

        source.resume();
        let err = source
            .start_drag(DragData::new(), DropAction::COPY, Point::ZERO)
            .unwrap_err();
        assert_eq!(err, DragError::EmptyData);

        source
            .start_drag(DragData::from_text("x"), DropAction::COPY, Point::ZERO)
            .unwrap();
        let err = source
            .start_drag(DragData::from_text("y"), DropAction::COPY, Point::ZERO)
            .unwrap_err();
        assert_eq!(err, DragError::AlreadyActive);
    }

    #[test]
    fn test_drag_started_signal() {
        let mut source = DragSource::new();
        let fired = std::sync::Arc::new(AtomicUsize::new(0));
        let fired_clone = fired.clone();
        source.drag_started.connect(move |data| {
            assert!(data.has_text());
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        source.prepare_drag(
            DragData::from_text("row"),
            DropAction::MOVE,
            Point::new(0.0, 0.0),
        );
        source.check_drag_start(Point::new(10.0, 0.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_end_drag_returns_data() {
        let mut source = DragSource::new();
        source
            .start_drag(
                DragData::from_text("payload"),
                DropAction::MOVE,
                Point::ZERO,
            )
            .unwrap();

        let (data, action) = source.end_drag(true).unwrap();
        assert_eq!(data.text().as_deref(), Some("payload"));
        assert_eq!(action, DropAction::MOVE);
        assert!(!source.is_dragging());
    }

    #[test]
    fn test_release_before_threshold_cancels() {
        let mut source = DragSource::new();
        source.prepare_drag(DragData::from_text("row"), DropAction::COPY, Point::ZERO);
        source.cancel_pending();
        assert!(!source.check_drag_start(Point::new(50.0, 50.0)));
        assert!(!source.is_dragging());
    }
}
