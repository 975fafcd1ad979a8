//! Telemetry helpers for applications embedding `markline-rs`.
//!
//! Tracing setup stays explicit and opt-in: the renderer only emits events,
//! it never installs a subscriber on its own. Hosts can call
//! `init_default_tracing` for a quick start or wire their own subscriber.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is
/// enabled, honoring `RUST_LOG` and defaulting to `markline_rs=info`.
///
/// Returns `true` when initialization succeeds, `false` when the feature is
/// disabled or the host application already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("markline_rs=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
