use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    // RUST_LOG 優先
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("portfolio_render=debug,info")
        } else {
            EnvFilter::new("portfolio_render=info")
        }
    })
}

fn cli_subscriber(verbose: bool) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(default_filter(verbose)).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .compact(),
    )
}

/// Line-delimited JSON, for when the site build runs inside CI and the
/// log output is collected by a shipper.
fn json_subscriber(verbose: bool) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(default_filter(verbose)).with(
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .json()
            .with_current_span(false),
    )
}

pub fn init_cli_logger(verbose: bool) {
    cli_subscriber(verbose).init();
}

pub fn init_json_logger(verbose: bool) {
    json_subscriber(verbose).init();
}
