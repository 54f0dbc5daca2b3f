//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise `LOG_LEVEL` applies to this crate.
//! With a usable log directory, output goes to a daily rolling file instead
//! of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(log_level).into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.and_then(usable_log_dir) {
        let file_appender = tracing_appender::rolling::daily(dir, "hr-api");
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.init();

    if let Some(dir) = log_dir {
        tracing::warn!("Log directory {dir} does not exist, logging to stdout");
    }
}

fn default_directives(log_level: &str) -> String {
    format!("hr_api={log_level},tower_http=info,sqlx=info")
}

fn usable_log_dir(dir: &str) -> Option<&Path> {
    let path = Path::new(dir);
    path.is_dir().then_some(path)
}
