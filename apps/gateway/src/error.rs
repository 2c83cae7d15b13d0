//! # ゲートウェイ エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! | 発生源 | ステータス |
//! |---|---|
//! | 対象が存在しない | 404 |
//! | 入力不正 | 400 |
//! | 上流 API の拒否・障害 | 500（詳細は返さずログにのみ出力） |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meibo_shared::ErrorResponse;
use thiserror::Error;

use crate::usecase::EmployeeUseCaseError;

/// HTTP API エラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない（404）
    #[error("見つかりません: {0}")]
    NotFound(String),

    /// ユースケースのエラー
    #[error(transparent)]
    UseCase(#[from] EmployeeUseCaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => not_found_response(&detail),
            ApiError::UseCase(EmployeeUseCaseError::InvalidInput(reason)) => {
                validation_error_response(&reason)
            }
            ApiError::UseCase(EmployeeUseCaseError::Upstream { operation, source }) => {
                tracing::error!(
                    error.category = "external_service",
                    error.kind = "service_communication",
                    "{}で内部エラー: {}",
                    operation,
                    source
                );
                internal_error_response()
            }
        }
    }
}

// --- 共通ヘルパー関数 ---

/// 400 Validation Error レスポンス
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation_error(detail)),
    )
        .into_response()
}

/// 404 Not Found レスポンス
pub fn not_found_response(detail: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found(detail)),
    )
        .into_response()
}

/// 500 Internal Server Error レスポンス
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal_error()),
    )
        .into_response()
}
