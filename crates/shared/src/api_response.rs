//! # API レスポンスエンベロープ
//!
//! ゲートウェイが公開する API の統一レスポンス形式 `{ "data": T }` を提供する。
//!
//! 上流の社員名簿 API が返すエンベロープ（`data` / `status` / `error`）とは別物であり、
//! そちらはゲートウェイのクライアント層で扱う。

use serde::{Deserialize, Serialize};

/// 公開 API の統一レスポンス型
///
/// ## 使用例
///
/// ```
/// use meibo_shared::ApiResponse;
///
/// let response = ApiResponse::new(500_000);
/// assert_eq!(response.data, 500_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
