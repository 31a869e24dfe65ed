//! Logging shims.
//!
//! With the `telemetry` feature the macros forward to `tracing`. Without it,
//! warnings go to stderr and debug output is discarded.

#[cfg(feature = "telemetry")]
#[doc(hidden)]
pub use tracing;

#[cfg(feature = "telemetry")]
#[macro_export]
macro_rules! feed_warn {
    ($($arg:tt)*) => { $crate::log::tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "telemetry"))]
#[macro_export]
macro_rules! feed_warn {
    ($($arg:tt)*) => { eprintln!("heimfeed: {}", format_args!($($arg)*)) };
}

#[cfg(feature = "telemetry")]
#[macro_export]
macro_rules! feed_debug {
    ($($arg:tt)*) => { $crate::log::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "telemetry"))]
#[macro_export]
macro_rules! feed_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}
