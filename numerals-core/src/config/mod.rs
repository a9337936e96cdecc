//! Numerals 配置模块
//!
//! 统一的配置管理，从 ~/.config/numerals/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NumeralError, NumeralResult};
use crate::numerals::{Language, NumberVerbalizer, ThousandsFormatter, DEFAULT_SEPARATOR};

/// 覆盖配置语言的环境变量
pub const LANGUAGE_ENV: &str = "NUMERALS_LANG";

/// Numerals 完整配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumeralsConfig {
    /// 读法语言
    pub language: Language,
    /// 千分位分隔符
    pub group_separator: String,
    /// 注释中使用波斯数字
    pub native_digits: bool,
    /// 默认入池比例（0-100）
    pub default_pool_percentage: f64,
}

impl Default for NumeralsConfig {
    fn default() -> Self {
        Self {
            language: Language::Persian,
            group_separator: DEFAULT_SEPARATOR.to_string(),
            native_digits: false,
            default_pool_percentage: 50.0,
        }
    }
}

impl NumeralsConfig {
    /// 加载配置文件
    ///
    /// 文件不存在时使用默认配置；`NUMERALS_LANG` 覆盖语言设置
    pub fn load() -> NumeralResult<Self> {
        let mut config = Self::load_or_default(&Self::config_path()?)?;
        config.apply_env_override(std::env::var(LANGUAGE_ENV).ok().as_deref());
        Ok(config)
    }

    /// 从指定路径加载配置，文件不存在时返回默认配置
    pub fn load_or_default(path: &Path) -> NumeralResult<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
            Ok(Self::default())
        }
    }

    /// 应用 `NUMERALS_LANG` 的取值
    ///
    /// 无法识别的语言名被忽略（记录 warn），保留原有设置
    pub fn apply_env_override(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };

        match value.parse::<Language>() {
            Ok(language) => self.language = language,
            Err(e) => tracing::warn!("忽略 {}: {}", LANGUAGE_ENV, e),
        }
    }

    /// 从指定路径加载配置
    pub fn load_from(path: &Path) -> NumeralResult<Self> {
        if !path.exists() {
            return Err(NumeralError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| NumeralError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate(path)?;

        tracing::info!(
            "加载配置成功: {:?} (language={}, separator={:?})",
            path,
            config.language,
            config.group_separator
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> NumeralResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> NumeralResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| NumeralError::ConfigWrite {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> NumeralResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| NumeralError::ConfigNotFound("no user config directory".to_string()))?;

        Ok(config_dir.join("numerals").join("config.toml"))
    }

    /// 按配置创建读法转换器
    pub fn verbalizer(&self) -> NumberVerbalizer {
        NumberVerbalizer::new(self.language)
    }

    /// 按配置创建千分位格式化器
    pub fn formatter(&self) -> ThousandsFormatter {
        ThousandsFormatter::with_separator(self.group_separator.as_str())
    }

    fn validate(&self, path: &Path) -> NumeralResult<()> {
        let percentage = self.default_pool_percentage;
        if !(percentage > 0.0 && percentage <= 100.0) {
            return Err(NumeralError::ConfigParse {
                path: path.display().to_string(),
                reason: format!("default_pool_percentage out of range (0-100]: {}", percentage),
            });
        }
        Ok(())
    }
}
