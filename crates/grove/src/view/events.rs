//! Input event types for item views.
//!
//! This module defines the pointer and keyboard events that item views
//! consume. Events carry an [`EventBase`] with the accepted flag; a handler
//! that consumes an event calls [`accept`](EventBase::accept) on it so the
//! caller knows not to propagate it further.

use grove_core::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Common data for all view events.
#[derive(Debug, Clone, Copy)]
pub struct EventBase {
    /// Whether the event has been accepted (handled).
    accepted: bool,
}

impl Default for EventBase {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in view-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// Mouse double-click event.
///
/// Delivered in place of the second press of a double click.
#[derive(Debug, Clone, Copy)]
pub struct MouseDoubleClickEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was double-clicked.
    pub button: MouseButton,
    /// Position in view-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseDoubleClickEvent {
    /// Create a new mouse double-click event.
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in view-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in view-local coordinates.
    pub local_pos: Point,
    /// Mouse buttons currently held.
    pub buttons: u8,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, buttons: u8, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            buttons,
            modifiers,
        }
    }

    /// Create a move event with no buttons held.
    pub fn hover(local_pos: Point) -> Self {
        Self::new(local_pos, 0, KeyboardModifiers::NONE)
    }

    /// Create a move event with the given button held.
    pub fn with_button(local_pos: Point, button: MouseButton) -> Self {
        Self::new(local_pos, 1 << button as u8, KeyboardModifiers::NONE)
    }

    /// Check if a specific button is pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        (self.buttons & (1 << button as u8)) != 0
    }
}

/// Leave event, sent when the mouse leaves the view area.
#[derive(Debug, Clone, Copy)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl LeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

impl Default for LeaveEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyboard key codes used by item views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow (collapse in tree views).
    ArrowLeft,
    /// Right arrow (expand in tree views).
    ArrowRight,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter/Return.
    Enter,
    /// Space bar.
    Space,
    /// Escape.
    Escape,
}

impl Key {
    /// Check if this key moves the cursor.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
        )
    }
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }
}

/// Enumeration of all view event types.
///
/// This allows passing events through a unified interface while preserving
/// type information for event handlers.
#[derive(Debug)]
pub enum ViewEvent {
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse double-click event.
    DoubleClick(MouseDoubleClickEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Mouse move event.
    MouseMove(MouseMoveEvent),
    /// Mouse leave event.
    Leave(LeaveEvent),
    /// Key press event.
    KeyPress(KeyPressEvent),
}

impl ViewEvent {
    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        match self {
            Self::MousePress(e) => e.base.is_accepted(),
            Self::DoubleClick(e) => e.base.is_accepted(),
            Self::MouseRelease(e) => e.base.is_accepted(),
            Self::MouseMove(e) => e.base.is_accepted(),
            Self::Leave(e) => e.base.is_accepted(),
            Self::KeyPress(e) => e.base.is_accepted(),
        }
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        match self {
            Self::MousePress(e) => e.base.accept(),
            Self::DoubleClick(e) => e.base.accept(),
            Self::MouseRelease(e) => e.base.accept(),
            Self::MouseMove(e) => e.base.accept(),
            Self::Leave(e) => e.base.accept(),
            Self::KeyPress(e) => e.base.accept(),
        }
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        match self {
            Self::MousePress(e) => e.base.ignore(),
            Self::DoubleClick(e) => e.base.ignore(),
            Self::MouseRelease(e) => e.base.ignore(),
            Self::MouseMove(e) => e.base.ignore(),
            Self::Leave(e) => e.base.ignore(),
            Self::KeyPress(e) => e.base.ignore(),
        }
    }
}
