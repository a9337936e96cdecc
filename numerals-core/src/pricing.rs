//! 池价格估算模块
//!
//! 根据流动性金额（IRT）、代币总量和入池比例估算每个代币的价格

use crate::error::NumeralResult;
use crate::numerals::{canonical_decimal, to_persian_digits, NumericInput, ThousandsFormatter};

/// 价格估算结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolEstimate {
    /// 入池的代币数量
    pub tokens_in_pool: f64,
    /// 每个代币的价格（IRT）
    pub price: f64,
}

impl PoolEstimate {
    /// 估算池价格
    ///
    /// # 参数
    /// - `liquidity`: 投入池中的 IRT 金额
    /// - `supply`: 代币总量
    /// - `percentage`: 入池比例（0-100）
    ///
    /// # 返回
    /// - `Ok(None)`: 任一输入为空、比例为 0，或入池数量不为正
    /// - `Ok(Some(estimate))`: 估算结果
    /// - `Err(InvalidNumber)`: 输入不是有效数字
    pub fn estimate<'a, 'b, 'c>(
        liquidity: impl Into<NumericInput<'a>>,
        supply: impl Into<NumericInput<'b>>,
        percentage: impl Into<NumericInput<'c>>,
    ) -> NumeralResult<Option<Self>> {
        let liquidity: NumericInput<'a> = liquidity.into();
        let supply: NumericInput<'b> = supply.into();
        let percentage: NumericInput<'c> = percentage.into();

        let (Some(liquidity), Some(supply), Some(percentage)) =
            (liquidity.parse()?, supply.parse()?, percentage.parse()?)
        else {
            return Ok(None);
        };

        if percentage == 0.0 {
            return Ok(None);
        }

        let tokens_in_pool = supply * percentage / 100.0;
        if tokens_in_pool <= 0.0 {
            tracing::debug!(
                "pool estimate skipped: supply={}, percentage={}",
                supply,
                percentage
            );
            return Ok(None);
        }

        Ok(Some(Self {
            tokens_in_pool,
            price: liquidity / tokens_in_pool,
        }))
    }

    /// 按数量级格式化价格
    ///
    /// - `< 0.000001`: 科学计数法，4 位小数
    /// - `< 0.001`: 8 位小数
    /// - `< 1`: 6 位小数
    /// - `< 1000`: 4 位小数
    /// - 其余：fa-IR 本地化（波斯数字、`٬` 分组、最多 2 位小数）
    pub fn display_price(&self) -> String {
        let price = self.price;
        if price < 0.000_001 {
            Self::exponential(price)
        } else if price < 0.001 {
            format!("{:.8}", price)
        } else if price < 1.0 {
            format!("{:.6}", price)
        } else if price < 1000.0 {
            format!("{:.4}", price)
        } else {
            Self::localized(price)
        }
    }

    /// 科学计数法，指数带符号（`1.2346e-7`、`0.0000e+0`）
    fn exponential(price: f64) -> String {
        let formatted = format!("{:.4e}", price);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    }

    fn localized(price: f64) -> String {
        let rounded = format!("{:.2}", price);
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        to_persian_digits(&ThousandsFormatter::new().format(trimmed))
    }
}

/// 入池的代币数量（提交给工厂合约的 base supply）
///
/// 任一输入为空时返回 `None`
pub fn pool_base_supply<'a, 'b>(
    supply: impl Into<NumericInput<'a>>,
    percentage: impl Into<NumericInput<'b>>,
) -> NumeralResult<Option<String>> {
    let supply: NumericInput<'a> = supply.into();
    let percentage: NumericInput<'b> = percentage.into();

    match (supply.parse()?, percentage.parse()?) {
        (Some(supply), Some(percentage)) => {
            Ok(Some(canonical_decimal(supply * percentage / 100.0)))
        }
        _ => Ok(None),
    }
}
