//! Telemetry helpers for applications embedding `chart-widget`.
//!
//! The crate only emits `tracing` events; installing a subscriber stays
//! explicit and opt-in. Hosts either call `init_default_tracing` or wire
//! their own subscriber and filters.

/// Installs a compact default `tracing` subscriber when the `telemetry`
/// feature is enabled. The filter comes from the environment, falling back
/// to `info`.
///
/// Returns `true` when installation succeeds, `false` when the feature is
/// disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
