//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    /// メッセージはどの制約に違反したかを特定できる内容にする。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}

impl DomainError {
    /// 違反した制約を表すメッセージを取得する
    pub fn reason(&self) -> &str {
        match self {
            DomainError::Validation(reason) => reason,
        }
    }
}
