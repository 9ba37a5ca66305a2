use thiserror::Error;

use crate::domain::validation::DEFAULT_USER_ID_LENGTH;

/// 利用者IDの桁数を上書きする環境変数
pub const USER_ID_LENGTH_ENV: &str = "LIBRARY_USER_ID_LENGTH";

/// 設定のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// ライブラリの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryConfig {
    /// 利用者IDの桁数（数字のみ）
    pub user_id_length: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            user_id_length: DEFAULT_USER_ID_LENGTH,
        }
    }
}

impl LibraryConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定の項目は既定値を使う。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(USER_ID_LENGTH_ENV) {
            config.user_id_length = match raw.trim().parse::<usize>() {
                Ok(length) if length > 0 => length,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: USER_ID_LENGTH_ENV,
                        value: raw,
                    });
                }
            };
        }

        Ok(config)
    }
}
