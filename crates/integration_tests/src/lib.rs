pub mod fixtures;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing once per test binary; `RUST_LOG` controls the level.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
