//! Logging facilities for astyle.
//!
//! astyle uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("astyle_style=trace")
//!     .init();
//! ```
//!
//! Rule insertions are logged at `trace`, snapshot activity at `debug`,
//! and sink attachment at `info`.

#[doc(hidden)]
pub use tracing;

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "astyle_core";
    /// Rule sink target.
    pub const SHEET: &str = "astyle_core::sheet";
    /// Compilation engine target.
    pub const ENGINE: &str = "astyle_style::engine";
    /// Capture/rehydrate target.
    pub const SSR: &str = "astyle_style::ssr";
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros. Without an explicit
/// `target:` they log under [`targets::CORE`].
#[macro_export]
macro_rules! astyle_trace {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::logging::tracing::trace!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::logging::tracing::trace!(target: "astyle_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! astyle_debug {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::logging::tracing::debug!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::logging::tracing::debug!(target: "astyle_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! astyle_info {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::logging::tracing::info!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::logging::tracing::info!(target: "astyle_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! astyle_warn {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::logging::tracing::warn!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::logging::tracing::warn!(target: "astyle_core", $($arg)*)
    };
}
