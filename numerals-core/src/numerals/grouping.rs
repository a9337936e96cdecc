//! 千分位格式化模块
//!
//! 在整数部分插入分组分隔符，小数部分保持不变

use crate::numerals::input::NumericInput;

/// 默认分组分隔符
pub const DEFAULT_SEPARATOR: &str = ",";

/// 千分位格式化器
///
/// 纯显示变换：不四舍五入、不截断、不校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThousandsFormatter {
    separator: String,
}

impl Default for ThousandsFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ThousandsFormatter {
    /// 使用默认分隔符 `,`
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    /// 使用自定义分隔符（例如波斯语的 `٬`）
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// 格式化数字或数字字符串
    ///
    /// # 示例
    /// ```
    /// # use numerals_core::numerals::ThousandsFormatter;
    /// let formatter = ThousandsFormatter::new();
    /// assert_eq!(formatter.format(1234567), "1,234,567");
    /// assert_eq!(formatter.format("1234.5678"), "1,234.5678");
    /// ```
    pub fn format<'a>(&self, value: impl Into<NumericInput<'a>>) -> String {
        let input: NumericInput<'a> = value.into();
        match input.literal() {
            Some(literal) => self.group_literal(&literal),
            None => String::new(),
        }
    }

    /// 去掉分隔符，得到原始数字串
    pub fn strip(&self, text: &str) -> String {
        if self.separator.is_empty() {
            return text.to_string();
        }
        text.replace(self.separator.as_str(), "")
    }

    fn group_literal(&self, literal: &str) -> String {
        let (integer, fraction) = match literal.find('.') {
            Some(dot) => literal.split_at(dot),
            None => (literal, ""),
        };

        let mut result = String::with_capacity(literal.len() + literal.len() / 3);
        let mut run = String::new();

        for ch in integer.chars() {
            if ch.is_ascii_digit() {
                run.push(ch);
            } else {
                self.push_grouped(&mut result, &run);
                run.clear();
                result.push(ch);
            }
        }
        self.push_grouped(&mut result, &run);

        result.push_str(fraction);
        result
    }

    /// 将一段连续数字按三位分组写入输出
    fn push_grouped(&self, out: &mut String, digits: &str) {
        let len = digits.len();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push_str(&self.separator);
            }
            out.push(ch);
        }
    }
}

/// 使用 `,` 分组
pub fn format_thousands<'a>(value: impl Into<NumericInput<'a>>) -> String {
    ThousandsFormatter::new().format(value)
}
