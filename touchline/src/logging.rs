use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// 初始化默认的 Touchline 核心标准输出日志。
///
/// 日志级别默认为 `INFO`，可以通过 `RUST_LOG` 环境变量覆盖。
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(env_filter()),
        )
        .init()
}

/// 初始化 JSON 格式的 Touchline 核心日志，便于日志采集系统解析。
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_filter(env_filter()),
        )
        .init()
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}
