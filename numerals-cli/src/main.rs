//! Numerals 命令行工具
//!
//! 在终端显示代币表单数字字段的注释：
//! - 千分位与读法
//! - 估算的每代币价格
//!
//! 用法：numerals [--lang persian|english] <supply> [<liquidity> [<percentage>]]

use std::process::ExitCode;

use clap::Parser;
use numerals_core::{Annotator, FieldKind, Language, NumeralsConfig, PoolEstimate};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(
    name = "numerals",
    about = "Print grouped digits, Persian words and the pool price for token form values",
    allow_negative_numbers = true
)]
struct CliArgs {
    /// 读法语言（persian | english），覆盖配置文件
    #[arg(long = "lang", short = 'l', value_name = "LANGUAGE")]
    language: Option<Language>,

    /// 代币总供应量
    supply: String,

    /// 初始流动性（托曼）
    liquidity: Option<String>,

    /// 入池比例，缺省取配置中的 default_pool_percentage
    percentage: Option<String>,
}

fn main() -> ExitCode {
    // 日志输出到 stderr，按 NUMERALS_LOG 过滤
    numerals_core::init_logging();

    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = NumeralsConfig::load().unwrap_or_else(|e| {
        tracing::warn!("配置加载失败，使用默认配置: {}", e);
        NumeralsConfig::default()
    });
    if let Some(language) = args.language {
        config.language = language;
    }

    let annotator = Annotator::new(&config);
    let percentage = args
        .percentage
        .clone()
        .unwrap_or_else(|| config.default_pool_percentage.to_string());

    let fields = [
        ("supply", FieldKind::Supply, Some(args.supply.as_str())),
        ("liquidity", FieldKind::Liquidity, args.liquidity.as_deref()),
        ("percentage", FieldKind::Percentage, Some(percentage.as_str())),
    ];

    for (label, kind, value) in fields {
        if let Some(annotation) = annotator.annotate(kind, value)? {
            println!("{:<11} {}", format!("{}:", label), annotation);
        }
    }

    if let Some(liquidity) = args.liquidity.as_deref() {
        match PoolEstimate::estimate(liquidity, args.supply.as_str(), percentage.as_str())? {
            Some(estimate) => println!("{:<11} {} IRT", "price:", estimate.display_price()),
            None => tracing::info!("无法估算价格：入池数量为零"),
        }
    }

    Ok(())
}
