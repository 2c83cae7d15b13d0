//! 社員名簿 API の型定義

use serde::{Deserialize, Serialize};

/// 上流 API のレスポンスエンベロープ
///
/// 全レスポンスがこの形式で返る。成功時は `data` にペイロード、
/// 失敗時は `error` にメッセージが入る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamEnvelope<T> {
    pub data:   Option<T>,
    pub status: Option<EnvelopeStatus>,
    pub error:  Option<String>,
}

impl<T> UpstreamEnvelope<T> {
    /// 成功エンベロープを作成する
    pub fn handled(data: T) -> Self {
        Self {
            data:   Some(data),
            status: Some(EnvelopeStatus::Handled),
            error:  None,
        }
    }

    /// エラーエンベロープを作成する
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data:   None,
            status: Some(EnvelopeStatus::Error),
            error:  Some(error.into()),
        }
    }
}

/// エンベロープの処理ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    #[serde(rename = "Successfully processed request.")]
    Handled,
    #[serde(rename = "Failed to process request.")]
    Error,
    /// 上記以外の値
    #[serde(other)]
    Unrecognized,
}
