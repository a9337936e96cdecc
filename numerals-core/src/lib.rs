//! Numerals Core
//!
//! 代币创建表单的数字注释引擎：波斯语读法、千分位格式化与池价格估算

#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod numerals;
pub mod pricing;
pub mod annotation;
pub mod config;
pub mod error;

// Re-export key types
pub use error::{ErrorKind, NumeralError, NumeralResult};
pub use numerals::{format_thousands, verbalize, Language, NumberVerbalizer, NumericInput, ThousandsFormatter};
pub use pricing::{pool_base_supply, PoolEstimate};
pub use annotation::{Annotator, FieldAnnotation, FieldKind};
pub use config::NumeralsConfig;

/// 日志过滤使用的环境变量
pub const LOG_ENV: &str = "NUMERALS_LOG";

/// 安装 stderr 日志输出
///
/// 只在 `debug-logs` 特性下生效，供 `numerals` 命令行和演示程序调用；
/// 作为库使用时由宿主自行安装 subscriber。过滤规则取自 `NUMERALS_LOG`
/// （如 `numerals_core=debug`），未设置或无法解析时只输出 warn 及以上。
///
/// 读法与格式化函数本身不记录日志，只有配置读写、价格估算和命令行会输出。
/// 已有全局 subscriber 时什么也不做，可以重复调用。
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .try_init();
    }
}
