//! 数字注释模块
//!
//! 表单数字字段下方的实时注释：读法（默认波斯语）与千分位

pub mod input;
pub mod lexicon;
pub mod verbalizer;
pub mod grouping;
pub mod digits;

// 导出核心类型
pub use input::{canonical_decimal, NumericInput};
pub use lexicon::{Language, Lexicon, ENGLISH, PERSIAN};
pub use verbalizer::{verbalize, NumberVerbalizer};
pub use grouping::{format_thousands, ThousandsFormatter, DEFAULT_SEPARATOR};
pub use digits::to_persian_digits;
