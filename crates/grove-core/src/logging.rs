//! Logging facilities for Grove.
//!
//! This module provides integration with the `tracing` crate for structured
//! logging. To see logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Filter by subsystem with the constants in [`targets`], e.g.
//! `RUST_LOG=grove::view=debug,grove_core::signal=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "grove_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "grove_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "grove_core::property";
    /// Model layer target (selection, indices).
    pub const MODEL: &str = "grove::model";
    /// View layer target (views, click handling).
    pub const VIEW: &str = "grove::view";
    /// Drag source target.
    pub const DRAG: &str = "grove::drag";
}
