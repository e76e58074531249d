use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Filtered by `RUST_LOG` (default `warn`) and written to stderr so demo
/// transcripts on stdout stay clean. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::debug!("still here");
    }
}
