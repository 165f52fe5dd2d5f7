//! Telemetry helpers for hosts embedding `narwhal-axis`.
//!
//! Domain resolution emits `tracing` events under the `narwhal_axis` target:
//! `debug` when a domain collapses to a single tick, `trace` for every
//! resolution. Nothing is printed unless the host installs a subscriber, either
//! its own or one built here.

/// Filter used when `RUST_LOG` is unset: collapsed domains stay quiet unless asked for.
pub const DEFAULT_AXIS_FILTER: &str = "narwhal_axis=warn";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` wins over [`DEFAULT_AXIS_FILTER`].
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => init_tracing_with_filter(&directives),
        _ => init_tracing_with_filter(DEFAULT_AXIS_FILTER),
    }
}

/// Initializes a compact subscriber with explicit filter directives,
/// e.g. `"narwhal_axis=debug"` to see degenerate-domain events.
///
/// Returns `false` for unparsable directives, when the feature is disabled, or
/// when a global subscriber already exists.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(directives) else {
            return false;
        };
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
