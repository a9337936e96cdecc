//! 波斯数字转写

/// 波斯数字 ۰-۹
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// 波斯语千分位分隔符
pub const PERSIAN_GROUP_SEPARATOR: char = '٬';

/// 波斯语小数点
pub const PERSIAN_DECIMAL_SEPARATOR: char = '٫';

/// 将 ASCII 数字、`,` 和 `.` 转写为波斯写法，其余字符原样保留
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '0'..='9' => PERSIAN_DIGITS[usize::from(ch as u8 - b'0')],
            ',' => PERSIAN_GROUP_SEPARATOR,
            '.' => PERSIAN_DECIMAL_SEPARATOR,
            other => other,
        })
        .collect()
}
