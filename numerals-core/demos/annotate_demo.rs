//! 数字注释演示程序
//!
//! 演示读法、千分位、字段注释与价格估算
//!
//! 运行：cargo run --example annotate_demo

use numerals_core::{
    format_thousands, verbalize, Annotator, FieldKind, Language, NumberVerbalizer,
    NumeralsConfig, PoolEstimate,
};

fn main() {
    numerals_core::init_logging();

    println!("=== Numerals 演示 ===\n");

    let english = NumberVerbalizer::new(Language::English);
    let test_cases = ["0", "15", "1234", "1000000", "-45", "12.5", "999999999999999", "1e5"];

    println!("【读法】\n");
    for input in test_cases {
        let persian = verbalize(input).unwrap_or_else(|e| format!("<{}>", e));
        let words = english.verbalize(input).unwrap_or_else(|e| format!("<{}>", e));
        println!("  {:>18} → {}", format_thousands(input), persian);
        println!("  {:>18}   {}", "", words);
    }

    println!("\n【字段注释】\n");
    let annotator = Annotator::new(&NumeralsConfig::default());
    let fields = [
        (FieldKind::Supply, "21000000"),
        (FieldKind::Liquidity, "500000"),
        (FieldKind::Percentage, "50"),
    ];
    for (kind, value) in fields {
        match annotator.annotate(kind, value) {
            Ok(Some(annotation)) => println!("  {:?}: {}", kind, annotation),
            Ok(None) => println!("  {:?}: (empty)", kind),
            Err(e) => println!("  {:?}: error: {}", kind, e),
        }
    }

    println!("\n【价格估算】\n");
    for (liquidity, supply, percentage) in [("500000", "21000000", 50), ("1", "1000000000", 10), ("90000000", "1000", 100)] {
        match PoolEstimate::estimate(liquidity, supply, percentage) {
            Ok(Some(estimate)) => println!(
                "  {} IRT / {} × {}% → {} IRT",
                format_thousands(liquidity),
                format_thousands(supply),
                percentage,
                estimate.display_price()
            ),
            Ok(None) => println!("  无法估算"),
            Err(e) => println!("  error: {}", e),
        }
    }
}
