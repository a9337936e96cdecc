//! 数值输入模块
//!
//! 表单字段的值可能是原生数字，也可能是用户正在输入的字符串

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{NumeralError, NumeralResult};

/// 数值输入
///
/// 空字符串、仅含空白的字符串和 `None` 都视为“无值”，不是错误
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput<'a> {
    /// 无值
    Absent,
    /// 原生数字
    Number(f64),
    /// 数字字符串（可选负号、数字、至多一个小数点）
    Text(Cow<'a, str>),
}

/// 数字字符串语法：可选负号 + 数字 + 至多一个小数点
///
/// 使用 `[0-9]` 而不是 `\d`，后者会匹配波斯数字
fn numeric_text_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("numeric pattern is valid")
    })
}

impl<'a> NumericInput<'a> {
    /// 是否为“无值”
    pub fn is_absent(&self) -> bool {
        match self {
            NumericInput::Absent => true,
            NumericInput::Number(_) => false,
            NumericInput::Text(text) => text.trim().is_empty(),
        }
    }

    /// 解析为浮点数
    ///
    /// # 返回
    /// - `Ok(None)`: 无值
    /// - `Ok(Some(value))`: 有限的数值
    /// - `Err(InvalidNumber)`: 字符串不符合数字语法，或数字为 NaN/无穷
    /// - `Err(UnsupportedMagnitude)`: 合法的数字串但超出 f64 范围
    pub fn parse(&self) -> NumeralResult<Option<f64>> {
        match self {
            NumericInput::Absent => Ok(None),
            NumericInput::Number(value) => {
                if value.is_finite() {
                    Ok(Some(*value))
                } else {
                    Err(NumeralError::InvalidNumber(value.to_string()))
                }
            }
            NumericInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }

                if !numeric_text_pattern().is_match(trimmed) {
                    return Err(NumeralError::InvalidNumber(trimmed.to_string()));
                }

                let value: f64 = trimmed
                    .parse()
                    .map_err(|_| NumeralError::InvalidNumber(trimmed.to_string()))?;

                // 几百位的数字串会溢出为无穷
                if !value.is_finite() {
                    let digits = trimmed
                        .trim_start_matches('-')
                        .split('.')
                        .next()
                        .map_or(0, str::len);
                    return Err(NumeralError::UnsupportedMagnitude { digits });
                }

                Ok(Some(value))
            }
        }
    }

    /// 用于显示的字面字符串
    ///
    /// 数字取规范十进制表示，字符串原样返回
    pub fn literal(&self) -> Option<Cow<'_, str>> {
        match self {
            NumericInput::Absent => None,
            NumericInput::Number(value) => Some(Cow::Owned(canonical_decimal(*value))),
            NumericInput::Text(text) if text.trim().is_empty() => None,
            NumericInput::Text(text) => Some(Cow::Borrowed(text.as_ref())),
        }
    }
}

/// 数字的规范十进制表示
///
/// 最短往返表示，从不使用科学计数法（`1e21` → `"1000000000000000000000"`）
pub fn canonical_decimal(value: f64) -> String {
    format!("{}", value)
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<f32> for NumericInput<'_> {
    fn from(value: f32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<i32> for NumericInput<'_> {
    fn from(value: i32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<u32> for NumericInput<'_> {
    fn from(value: u32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

// 超过 2^53 的整数会丢失精度，但那已超出万亿量级
impl From<i64> for NumericInput<'_> {
    fn from(value: i64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<u64> for NumericInput<'_> {
    fn from(value: u64) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl From<usize> for NumericInput<'_> {
    fn from(value: usize) -> Self {
        NumericInput::Number(value as f64)
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(text: &'a str) -> Self {
        NumericInput::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(text: &'a String) -> Self {
        NumericInput::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for NumericInput<'_> {
    fn from(text: String) -> Self {
        NumericInput::Text(Cow::Owned(text))
    }
}

impl<'a, T> From<Option<T>> for NumericInput<'a>
where
    T: Into<NumericInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(NumericInput::Absent, Into::into)
    }
}
