//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; without it the given default level is
/// applied to this application plus the axum/tower-http plumbing.
pub fn setup_logger(app_name: &str, default_level: &str) {
    // Filter targets use the crate name form (underscores, not hyphens)
    let target = app_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{target}={default_level},sosline={default_level},tower_http=info"
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
