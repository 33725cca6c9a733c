use std::sync::Once;

use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

static INIT: Once = Once::new();

/// Installs the tracing subscriber the first time the library is
/// entered. A host process that already set a global subscriber keeps
/// it; `try_init` failing is not an error here.
pub(crate) fn initialise_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(EnvFilter::from_default_env())
            .try_init();
    });
}
