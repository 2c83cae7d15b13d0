//! # ゲートウェイ設定
//!
//! 環境変数からゲートウェイサーバーの設定を読み込む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8111;
const DEFAULT_DIRECTORY_API_URL: &str = "http://localhost:8112/api/v1";

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("GATEWAY_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),
}

/// ゲートウェイサーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// バインドアドレス
    pub host:              String,
    /// ポート番号
    pub port:              u16,
    /// 社員名簿 API のベース URL（エンドポイントは `{url}/employee`）
    pub directory_api_url: String,
}

impl GatewayConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 未設定の項目はデフォルト値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("GATEWAY_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("GATEWAY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            directory_api_url: lookup("DIRECTORY_API_URL")
                .unwrap_or_else(|| DEFAULT_DIRECTORY_API_URL.to_string()),
        })
    }
}
