//! 数字读法模块
//!
//! 将阿拉伯数字转换为口语读法（默认波斯语）
//!
//! 支持：负数、小数、最高到万亿量级（999 万亿）

use crate::error::{NumeralError, NumeralResult};
use crate::numerals::input::{canonical_decimal, NumericInput};
use crate::numerals::lexicon::{Language, Lexicon};

/// 数字读法转换器
#[derive(Debug, Clone, Copy)]
pub struct NumberVerbalizer {
    lexicon: &'static Lexicon,
}

impl Default for NumberVerbalizer {
    fn default() -> Self {
        Self::persian()
    }
}

impl NumberVerbalizer {
    /// 创建指定语言的转换器
    pub fn new(language: Language) -> Self {
        Self {
            lexicon: language.lexicon(),
        }
    }

    /// 波斯语转换器
    pub fn persian() -> Self {
        Self::new(Language::Persian)
    }

    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    /// 将数字或数字字符串转换为读法
    ///
    /// # 参数
    /// - `value`: 数字、数字字符串或无值
    ///
    /// # 返回
    /// - `Ok(String)`: 读法；无值时为空字符串
    /// - `Err(InvalidNumber)`: 字符串不是有效数字
    /// - `Err(UnsupportedMagnitude)`: 整数部分超过万亿量级
    ///
    /// # 示例
    /// ```
    /// # use numerals_core::numerals::{Language, NumberVerbalizer};
    /// let verbalizer = NumberVerbalizer::new(Language::English);
    /// assert_eq!(verbalizer.verbalize(1000).unwrap(), "one thousand");
    /// assert_eq!(verbalizer.verbalize("").unwrap(), "");
    /// ```
    pub fn verbalize<'a>(&self, value: impl Into<NumericInput<'a>>) -> NumeralResult<String> {
        let input: NumericInput<'a> = value.into();
        match input.parse()? {
            None => Ok(String::new()),
            Some(number) => self.verbalize_number(number),
        }
    }

    fn verbalize_number(&self, number: f64) -> NumeralResult<String> {
        // -0 也等于 0
        if number == 0.0 {
            return Ok(self.lexicon.zero.to_string());
        }

        if number < 0.0 {
            let magnitude = self.verbalize_number(number.abs())?;
            return Ok(format!("{} {}", self.lexicon.negative, magnitude));
        }

        let integer = number.floor();
        let mut result = self.verbalize_integer(&canonical_decimal(integer))?;

        if number != integer {
            if let Some(clause) = self.fraction_clause(number) {
                if !result.is_empty() {
                    result.push(' ');
                }
                result.push_str(&clause);
            }
        }

        Ok(result)
    }

    /// 小数部分读法
    ///
    /// 小数位按整数读（前导零丢失："0.05" 读作 "五"），后缀固定为“十分之”。
    /// 小数位不受万亿量级限制，超出词表的组不带量级词
    fn fraction_clause(&self, number: f64) -> Option<String> {
        let canonical = canonical_decimal(number);
        let fraction = match canonical.split_once('.') {
            Some((_, fraction)) if !fraction.is_empty() && fraction != "0" => fraction,
            _ => return None,
        };

        let digits = fraction.trim_start_matches('0');
        if digits.is_empty() {
            return None;
        }

        let words = self.render_groups(&Self::split_groups(digits));
        Some(format!(
            "{} {} {}",
            self.lexicon.decimal_point, words, self.lexicon.fraction_suffix
        ))
    }

    /// 整数部分读法
    ///
    /// `digits` 为非负整数的十进制数字串
    fn verbalize_integer(&self, digits: &str) -> NumeralResult<String> {
        let groups = Self::split_groups(digits);
        if groups.len() > self.lexicon.max_scale() + 1 {
            return Err(NumeralError::UnsupportedMagnitude {
                digits: digits.len(),
            });
        }

        Ok(self.render_groups(&groups))
    }

    /// 从高位到低位拼接各组，跳过零组
    fn render_groups(&self, groups: &[u16]) -> String {
        let mut rendered = Vec::with_capacity(groups.len());
        for (scale, &group) in groups.iter().enumerate().rev() {
            if group == 0 {
                continue;
            }

            let mut words = self.render_group(group);
            let scale_word = self.lexicon.scales.get(scale).copied().unwrap_or("");
            if !scale_word.is_empty() {
                words.push(' ');
                words.push_str(scale_word);
            }
            rendered.push(words);
        }

        rendered.join(&format!(" {} ", self.lexicon.connective))
    }

    /// 从右向左每三位分组，下标 0 为最低位组
    fn split_groups(digits: &str) -> Vec<u16> {
        digits
            .as_bytes()
            .rchunks(3)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'))
            })
            .collect()
    }

    /// 三位组读法（0-999），0 返回空字符串
    pub fn render_group(&self, group: u16) -> String {
        let lexicon = self.lexicon;
        let hundred = usize::from(group / 100);
        let remainder = group % 100;
        let ten = usize::from(remainder / 10);
        let unit = usize::from(remainder % 10);

        let mut result = String::new();

        if hundred > 0 {
            result.push_str(lexicon.hundreds[hundred]);
            if remainder > 0 {
                self.push_connective(&mut result);
            }
        }

        if ten == 1 {
            // 10-19 是独立的词
            result.push_str(lexicon.teens[unit]);
        } else {
            if ten > 0 {
                result.push_str(lexicon.tens[ten]);
                if unit > 0 {
                    self.push_connective(&mut result);
                }
            }
            if unit > 0 {
                result.push_str(lexicon.units[unit]);
            }
        }

        result
    }

    fn push_connective(&self, out: &mut String) {
        out.push(' ');
        out.push_str(self.lexicon.connective);
        out.push(' ');
    }
}

/// 波斯语读法
///
/// # 示例
/// ```
/// # use numerals_core::verbalize;
/// assert_eq!(verbalize(1234).unwrap(), "یک هزار و دویست و سی و چهار");
/// ```
pub fn verbalize<'a>(value: impl Into<NumericInput<'a>>) -> NumeralResult<String> {
    NumberVerbalizer::persian().verbalize(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> NumberVerbalizer {
        NumberVerbalizer::new(Language::English)
    }

    #[test]
    fn test_zero() {
        assert_eq!(verbalize(0).unwrap(), "صفر");
        assert_eq!(verbalize("0").unwrap(), "صفر");
        assert_eq!(verbalize(-0.0).unwrap(), "صفر");
        assert_eq!(english().verbalize(0).unwrap(), "zero");
    }

    #[test]
    fn test_absent() {
        assert_eq!(verbalize("").unwrap(), "");
        assert_eq!(verbalize(None::<f64>).unwrap(), "");
        assert_eq!(english().verbalize("  ").unwrap(), "");
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(verbalize(1).unwrap(), "یک");
        assert_eq!(verbalize(9).unwrap(), "نه");
        assert_eq!(english().verbalize(7).unwrap(), "seven");
    }

    #[test]
    fn test_teens() {
        assert_eq!(verbalize(10).unwrap(), "ده");
        assert_eq!(verbalize(11).unwrap(), "یازده");
        assert_eq!(verbalize(15).unwrap(), "پانزده");
        assert_eq!(verbalize(19).unwrap(), "نوزده");
        assert_eq!(english().verbalize(13).unwrap(), "thirteen");
    }

    #[test]
    fn test_tens() {
        assert_eq!(verbalize(20).unwrap(), "بیست");
        assert_eq!(verbalize(21).unwrap(), "بیست و یک");
        assert_eq!(verbalize(99).unwrap(), "نود و نه");
        assert_eq!(english().verbalize(42).unwrap(), "forty and two");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(verbalize(100).unwrap(), "صد");
        assert_eq!(verbalize(105).unwrap(), "صد و پنج");
        assert_eq!(verbalize(110).unwrap(), "صد و ده");
        assert_eq!(verbalize(999).unwrap(), "نهصد و نود و نه");
        assert_eq!(
            english().verbalize(315).unwrap(),
            "three hundred and fifteen"
        );
    }

    #[test]
    fn test_scales() {
        assert_eq!(verbalize(1000).unwrap(), "یک هزار");
        assert_eq!(
            verbalize(1234).unwrap(),
            "یک هزار و دویست و سی و چهار"
        );
        assert_eq!(verbalize(1_000_000).unwrap(), "یک میلیون");
        assert_eq!(verbalize(1_000_005).unwrap(), "یک میلیون و پنج");
        assert_eq!(verbalize(2_000_000_000u64).unwrap(), "دو میلیارد");
        assert_eq!(verbalize(3_000_000_000_000u64).unwrap(), "سه تریلیون");

        assert_eq!(english().verbalize(1000).unwrap(), "one thousand");
        assert_eq!(english().verbalize(1_000_000).unwrap(), "one million");
    }

    #[test]
    fn test_zero_groups_skipped() {
        assert_eq!(
            english().verbalize(5_000_000_042u64).unwrap(),
            "five billion and forty and two"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(verbalize(-7).unwrap(), "منفی هفت");
        assert_eq!(verbalize("-1000").unwrap(), "منفی یک هزار");
        assert_eq!(english().verbalize(-21).unwrap(), "negative twenty and one");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(verbalize("12.5").unwrap(), "دوازده ممیز پنج دهم");
        assert_eq!(verbalize(2.75).unwrap(), "دو ممیز هفتاد و پنج دهم");
        assert_eq!(
            english().verbalize("12.5").unwrap(),
            "twelve point five tenths"
        );
    }

    #[test]
    fn test_decimal_without_integer_part() {
        assert_eq!(verbalize(0.5).unwrap(), "ممیز پنج دهم");
        assert_eq!(english().verbalize("-0.5").unwrap(), "negative point five tenths");
    }

    #[test]
    fn test_decimal_leading_zero_dropped() {
        assert_eq!(english().verbalize("1.05").unwrap(), "one point five tenths");
    }

    #[test]
    fn test_trailing_zero_fraction_ignored() {
        assert_eq!(english().verbalize("12.0").unwrap(), "twelve");
        assert_eq!(english().verbalize("12.50").unwrap(), "twelve point five tenths");
    }

    #[test]
    fn test_long_fraction_is_not_a_magnitude_error() {
        // 0.1 + 0.2 的规范表示为 0.30000000000000004
        assert_eq!(
            english().verbalize(0.1 + 0.2).unwrap(),
            "point thirty and four tenths"
        );
        assert_eq!(verbalize(0.1 + 0.2).unwrap(), "ممیز سی و چهار دهم");

        let words = verbalize("0.1234567890123456").unwrap();
        assert!(words.starts_with("ممیز "));
        assert!(words.ends_with(" دهم"));

        let words = verbalize("12.1234567890123456").unwrap();
        assert!(words.starts_with("دوازده ممیز "));
    }

    #[test]
    fn test_upper_bound() {
        let top = verbalize(999_999_999_999_999u64).unwrap();
        assert!(top.starts_with("نهصد و نود و نه تریلیون"));
        assert!(top.ends_with("هزار و نهصد و نود و نه"));

        assert!(matches!(
            verbalize(1_000_000_000_000_000u64),
            Err(NumeralError::UnsupportedMagnitude { digits: 16 })
        ));
        assert!(matches!(
            verbalize("9999999999999999"),
            Err(NumeralError::UnsupportedMagnitude { .. })
        ));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            verbalize("12abc"),
            Err(NumeralError::InvalidNumber(_))
        ));
        assert!(matches!(
            verbalize(f64::NAN),
            Err(NumeralError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_render_group() {
        let verbalizer = english();
        assert_eq!(verbalizer.render_group(0), "");
        assert_eq!(verbalizer.render_group(7), "seven");
        assert_eq!(verbalizer.render_group(300), "three hundred");
        assert_eq!(verbalizer.render_group(319), "three hundred and nineteen");
        assert_eq!(verbalizer.render_group(320), "three hundred and twenty");
        assert_eq!(
            verbalizer.render_group(321),
            "three hundred and twenty and one"
        );
    }

    #[test]
    fn test_split_groups() {
        assert_eq!(NumberVerbalizer::split_groups("1234567"), vec![567, 234, 1]);
        assert_eq!(NumberVerbalizer::split_groups("999"), vec![999]);
        assert_eq!(NumberVerbalizer::split_groups("1000"), vec![0, 1]);
    }
}
