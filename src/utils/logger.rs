use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌寫到 stderr，避免與 stdout 上的報表混在一起
pub fn init_cli_logger(verbose: bool) {
    init_with_default_filter(default_filter(verbose));
}

/// 設定檔指定的等級只在沒有 RUST_LOG 時生效
pub fn init_cli_logger_with_level(level: &str) {
    init_with_default_filter(format!("petstore_console={}", level));
}

fn default_filter(verbose: bool) -> String {
    if verbose {
        "petstore_console=debug,info".to_string()
    } else {
        "petstore_console=info".to_string()
    }
}

fn init_with_default_filter(default: String) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
