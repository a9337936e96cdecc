//! 字段注释模块
//!
//! 组合千分位与读法，生成表单字段下方的注释，例如：
//!
//! ```text
//! 1,000,000 (یک میلیون واحد)
//! ```

use std::fmt;

use crate::config::NumeralsConfig;
use crate::error::NumeralResult;
use crate::numerals::{to_persian_digits, Language, NumberVerbalizer, NumericInput, ThousandsFormatter};

/// 表单数字字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 代币总量
    Supply,
    /// 流动性金额（托曼）
    Liquidity,
    /// 入池比例
    Percentage,
}

impl FieldKind {
    /// 字段的单位词
    pub fn unit_word(self, language: Language) -> &'static str {
        match (self, language) {
            (FieldKind::Supply, Language::Persian) => "واحد",
            (FieldKind::Liquidity, Language::Persian) => "تومان",
            (FieldKind::Percentage, Language::Persian) => "درصد",
            (FieldKind::Supply, Language::English) => "units",
            (FieldKind::Liquidity, Language::English) => "toman",
            (FieldKind::Percentage, Language::English) => "percent",
        }
    }
}

/// 字段注释
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAnnotation {
    /// 千分位格式化后的数字
    pub grouped: String,
    /// 读法 + 单位词
    pub words: String,
}

impl fmt::Display for FieldAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.grouped, self.words)
    }
}

/// 字段注释生成器
#[derive(Debug, Clone)]
pub struct Annotator {
    language: Language,
    verbalizer: NumberVerbalizer,
    formatter: ThousandsFormatter,
    native_digits: bool,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(&NumeralsConfig::default())
    }
}

impl Annotator {
    /// 根据配置创建注释生成器
    pub fn new(config: &NumeralsConfig) -> Self {
        Self {
            language: config.language,
            verbalizer: config.verbalizer(),
            formatter: config.formatter(),
            native_digits: config.native_digits,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// 生成字段注释
    ///
    /// 无值时返回 `Ok(None)`；转换错误原样返回给调用方
    pub fn annotate<'a>(
        &self,
        kind: FieldKind,
        value: impl Into<NumericInput<'a>>,
    ) -> NumeralResult<Option<FieldAnnotation>> {
        let input: NumericInput<'a> = value.into();
        if input.is_absent() {
            return Ok(None);
        }

        let words = self.verbalizer.verbalize(input.clone())?;
        let mut grouped = self.formatter.format(input);
        if self.native_digits {
            grouped = to_persian_digits(&grouped);
        }

        Ok(Some(FieldAnnotation {
            grouped,
            words: format!("{} {}", words, kind.unit_word(self.language)),
        }))
    }
}
