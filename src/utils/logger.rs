use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Filter used when `RUST_LOG` is unset. `--verbose` wins over a configured level.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    let level = if verbose {
        "debug"
    } else {
        level.unwrap_or("info")
    };
    format!("orientation_advisor={}", level)
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

fn install_compact(directive: &str) {
    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn install_json(directive: &str) {
    tracing_subscriber::registry()
        .with(env_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    install_compact(&default_directive(verbose, None));
}

/// JSON lines on stdout, for runs whose logs are collected by another tool.
pub fn init_json_logger(verbose: bool) {
    install_json(&default_directive(verbose, None));
}

pub fn init_logger(format: &str, verbose: bool) {
    init_logger_with_level(format, verbose, None);
}

pub fn init_logger_with_level(format: &str, verbose: bool, level: Option<&str>) {
    let directive = default_directive(verbose, level);
    match format {
        "json" => install_json(&directive),
        _ => install_compact(&directive),
    }
}
