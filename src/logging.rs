use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "INTAKE_LOG";

static INIT: Once = Once::new();

/// Installs the stderr subscriber. `INTAKE_LOG` takes precedence over the
/// verbosity flags. Later calls are ignored.
pub fn init_tracing(verbose: u8, quiet: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}

fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "intake=error";
    }
    match verbose {
        0 => "intake=warn",
        1 => "intake=info",
        _ => "intake=debug",
    }
}
