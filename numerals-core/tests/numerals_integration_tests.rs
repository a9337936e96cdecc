//! 数字注释集成测试
//!
//! 测试读法、千分位、字段注释与价格估算的完整组合

use std::path::{Path, PathBuf};

use numerals_core::{
    format_thousands, verbalize, Annotator, ErrorKind, FieldKind, Language, NumberVerbalizer,
    NumeralsConfig, PoolEstimate, ThousandsFormatter,
};
use serde::Deserialize;

/// 测试数据目录（相对于 CARGO_MANIFEST_DIR）
fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    case: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    input: String,
    expected: String,
}

#[test]
fn test_persian_cases_from_testdata() {
    let path = testdata_dir().join("persian_cases.toml");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("无法读取 {:?}: {}", path, e));
    let cases: CaseFile = toml::from_str(&content).unwrap();

    assert!(!cases.case.is_empty());
    for case in &cases.case {
        assert_eq!(
            verbalize(case.input.as_str()).unwrap(),
            case.expected,
            "input: {:?}",
            case.input
        );
    }
}

#[test]
fn test_zero_and_absent() {
    let english = NumberVerbalizer::new(Language::English);

    assert_eq!(english.verbalize(0).unwrap(), "zero");
    assert_eq!(english.verbalize("").unwrap(), "");
    assert_eq!(format_thousands(""), "");
}

#[test]
fn test_negative_prefixes_magnitude() {
    let english = NumberVerbalizer::new(Language::English);

    for x in [1.0, 9.0, 13.0, 250.0, 1001.0, 12.5, 987_654_321.0] {
        assert_eq!(
            english.verbalize(-x).unwrap(),
            format!("negative {}", english.verbalize(x).unwrap())
        );
        assert_eq!(
            verbalize(-x).unwrap(),
            format!("منفی {}", verbalize(x).unwrap())
        );
    }
}

#[test]
fn test_small_numbers_have_no_scale_word() {
    for language in [Language::English, Language::Persian] {
        let verbalizer = NumberVerbalizer::new(language);
        let lexicon = verbalizer.lexicon();

        for x in 1..=999 {
            let words = verbalizer.verbalize(x).unwrap();
            assert!(!words.is_empty());
            assert!(
                !words.split_whitespace().any(|w| lexicon.is_scale_word(w)),
                "{} -> {:?}",
                x,
                words
            );
        }
    }
}

#[test]
fn test_scale_words() {
    let english = NumberVerbalizer::new(Language::English);

    assert_eq!(english.verbalize(1000).unwrap(), "one thousand");
    assert_eq!(english.verbalize(1_000_000).unwrap(), "one million");
    assert_eq!(verbalize(1000).unwrap(), "یک هزار");
    assert_eq!(verbalize(1_000_000).unwrap(), "یک میلیون");
}

#[test]
fn test_decimal_clause() {
    let english = NumberVerbalizer::new(Language::English);
    let words = english.verbalize("12.5").unwrap();

    assert!(words.starts_with("twelve"));
    assert!(words.contains("point"));
    assert!(words.contains("five"));
    assert!(words.ends_with("tenths"));
}

#[test]
fn test_supported_range_boundary() {
    assert!(verbalize(999_999_999_999_999u64).is_ok());
    assert!(verbalize("999999999999999").is_ok());

    let err = verbalize(9_999_999_999_999_999u64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedMagnitude);

    let err = verbalize("1000000000000000").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedMagnitude);
}

#[test]
fn test_invalid_number_is_signaled() {
    let err = verbalize("12,000").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidNumber);

    let err = verbalize("twelve").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidNumber);
}

#[test]
fn test_thousands_formatting() {
    assert_eq!(format_thousands(1234567), "1,234,567");
    assert_eq!(format_thousands("1234567.1234"), "1,234,567.1234");

    let formatter = ThousandsFormatter::new();
    for x in ["1", "12", "1234", "1000000", "98765432.10", "-4321"] {
        let once = formatter.format(x);
        let stripped = formatter.strip(&once);
        assert_eq!(stripped, x);
        assert_eq!(formatter.format(stripped.as_str()), once);
    }
}

#[test]
fn test_form_annotations() {
    let annotator = Annotator::new(&NumeralsConfig::default());

    let supply = annotator
        .annotate(FieldKind::Supply, "21000000")
        .unwrap()
        .unwrap();
    assert_eq!(supply.to_string(), "21,000,000 (بیست و یک میلیون واحد)");

    let liquidity = annotator
        .annotate(FieldKind::Liquidity, "500000")
        .unwrap()
        .unwrap();
    assert_eq!(liquidity.to_string(), "500,000 (پانصد هزار تومان)");

    assert!(annotator.annotate(FieldKind::Percentage, "").unwrap().is_none());
}

#[test]
fn test_form_price_estimate() {
    let estimate = PoolEstimate::estimate("500000", "21000000", 50)
        .unwrap()
        .unwrap();

    assert_eq!(estimate.tokens_in_pool, 10_500_000.0);
    assert_eq!(estimate.display_price(), "0.047619");
}
