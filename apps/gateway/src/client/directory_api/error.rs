//! 社員名簿 API クライアントのエラー型

use thiserror::Error;

/// 社員名簿 API クライアントエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryApiError {
    /// 上流 API がエンベロープでエラーを報告した
    #[error("上流 API がリクエストを拒否しました: {0}")]
    UpstreamRejected(String),

    /// 通信失敗、または想定外の HTTP ステータス
    #[error("上流 API を利用できません: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for DirectoryApiError {
    fn from(err: reqwest::Error) -> Self {
        DirectoryApiError::Unavailable(err.to_string())
    }
}
