use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumeralError {
    // 数值错误
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Unsupported magnitude: {digits} integer digits exceed the trillion scale")]
    UnsupportedMagnitude { digits: usize },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config write error: {path} - {reason}")]
    ConfigWrite { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 错误类别
///
/// 调用方（表单层）据此决定隐藏注释还是显示错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidNumber,
    UnsupportedMagnitude,
    Config,
    Io,
}

impl NumeralError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumeralError::InvalidNumber(_) => ErrorKind::InvalidNumber,
            NumeralError::UnsupportedMagnitude { .. } => ErrorKind::UnsupportedMagnitude,
            NumeralError::UnknownLanguage(_)
            | NumeralError::ConfigParse { .. }
            | NumeralError::ConfigWrite { .. }
            | NumeralError::ConfigNotFound(_) => ErrorKind::Config,
            NumeralError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type NumeralResult<T> = Result<T, NumeralError>;
