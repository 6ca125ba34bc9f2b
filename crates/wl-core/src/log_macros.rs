//! Domain-aware logging macros.
//!
//! Each macro injects a `domain` field automatically so callers never need to
//! remember the string literal. Domains used by the generator: `scen` (scenario
//! generation), `conf` (configuration), `io` (file output).
//!
//! # Usage
//!
//! ```ignore
//! wl_info!(scen, blocks = 3, events = 42, "scenario generated");
//! wl_debug!(scen, task = "sysmon", used = 4, "phase events");
//! ```

/// Internal helper. Do not call directly; use `wl_warn!` … `wl_trace!`.
#[doc(hidden)]
macro_rules! wl_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

/// Log at WARN level with an automatic `domain` field.
macro_rules! wl_warn {
    ($domain:ident, $($rest:tt)*) => {
        wl_log!(warn, $domain, $($rest)*)
    };
}

/// Log at INFO level with an automatic `domain` field.
macro_rules! wl_info {
    ($domain:ident, $($rest:tt)*) => {
        wl_log!(info, $domain, $($rest)*)
    };
}

/// Log at DEBUG level with an automatic `domain` field.
macro_rules! wl_debug {
    ($domain:ident, $($rest:tt)*) => {
        wl_log!(debug, $domain, $($rest)*)
    };
}

/// Log at TRACE level with an automatic `domain` field.
#[allow(unused_macros)]
macro_rules! wl_trace {
    ($domain:ident, $($rest:tt)*) => {
        wl_log!(trace, $domain, $($rest)*)
    };
}
