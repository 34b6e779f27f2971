//! Tracing subscriber for the driver.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the `EnvFilter` directives.
const LOG_ENV: &str = "MLANG_LOG";

/// Install a hierarchical tracing subscriber on stderr.
///
/// Does nothing unless `MLANG_LOG` is set, e.g. `MLANG_LOG=mlang_parse=trace`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os(LOG_ENV).is_none() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_ENV);
        let tree = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);
        tracing_subscriber::registry().with(filter).with(tree).init();
    });
}
