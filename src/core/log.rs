use tracing_subscriber::{
    EnvFilter, filter::Directive, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

/// Installs the global subscriber. Diagnostics stay silent unless `verbose` is set
/// or `RUST_LOG` asks for them.
pub fn init_logging(verbose: bool) {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(build_filter(verbose, env_directives.as_deref()))
        .init();
}

/// `RUST_LOG` directives when present and valid, otherwise everything off.
/// `verbose` always turns on debug output for this crate.
fn build_filter(verbose: bool, env_directives: Option<&str>) -> EnvFilter {
    let filter = env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    if !verbose {
        return filter;
    }
    match "fxconv=debug".parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
