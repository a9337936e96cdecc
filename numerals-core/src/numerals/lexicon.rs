//! 数字词表
//!
//! 波斯语（默认）与英语两套读法词表

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumeralError;

/// 目标语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 波斯语
    #[default]
    Persian,
    /// 英语
    English,
}

impl Language {
    /// 对应的词表
    pub fn lexicon(self) -> &'static Lexicon {
        match self {
            Language::Persian => &PERSIAN,
            Language::English => &ENGLISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Persian => f.write_str("persian"),
            Language::English => f.write_str("english"),
        }
    }
}

impl FromStr for Language {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "persian" | "farsi" | "fa" | "fa-ir" => Ok(Language::Persian),
            "english" | "en" | "en-us" => Ok(Language::English),
            other => Err(NumeralError::UnknownLanguage(other.to_string())),
        }
    }
}

/// 一种语言的完整数字词表
#[derive(Debug)]
pub struct Lexicon {
    /// 个位 1-9（下标 0 为空）
    pub units: [&'static str; 10],
    /// 10-19，按个位数字索引
    pub teens: [&'static str; 10],
    /// 整十 20-90（下标 0、1 不参与拼接）
    pub tens: [&'static str; 10],
    /// 整百 100-900
    pub hundreds: [&'static str; 10],
    /// 量级词：无、千、百万、十亿、万亿
    pub scales: [&'static str; 5],
    pub zero: &'static str,
    pub negative: &'static str,
    /// 连接词（“和”）
    pub connective: &'static str,
    pub decimal_point: &'static str,
    /// 小数后缀，固定为“十分之”
    pub fraction_suffix: &'static str,
}

impl Lexicon {
    /// 最高量级的下标
    pub fn max_scale(&self) -> usize {
        self.scales.len() - 1
    }

    /// 检查是否为量级词
    pub fn is_scale_word(&self, word: &str) -> bool {
        !word.is_empty() && self.scales.contains(&word)
    }
}

pub static PERSIAN: Lexicon = Lexicon {
    units: ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"],
    teens: [
        "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
    ],
    tens: ["", "ده", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود"],
    hundreds: [
        "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
    ],
    scales: ["", "هزار", "میلیون", "میلیارد", "تریلیون"],
    zero: "صفر",
    negative: "منفی",
    connective: "و",
    decimal_point: "ممیز",
    fraction_suffix: "دهم",
};

pub static ENGLISH: Lexicon = Lexicon {
    units: ["", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"],
    teens: [
        "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
        "eighteen", "nineteen",
    ],
    tens: [
        "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    hundreds: [
        "",
        "one hundred",
        "two hundred",
        "three hundred",
        "four hundred",
        "five hundred",
        "six hundred",
        "seven hundred",
        "eight hundred",
        "nine hundred",
    ],
    scales: ["", "thousand", "million", "billion", "trillion"],
    zero: "zero",
    negative: "negative",
    connective: "and",
    decimal_point: "point",
    fraction_suffix: "tenths",
};
