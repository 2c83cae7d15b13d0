//! # Request ID 伝播ミドルウェア
//!
//! ゲートウェイ → 社員名簿 API 間の Request ID 伝播を実現する。
//!
//! ## 仕組み
//!
//! 1. [`store_request_id`] ミドルウェアが `SetRequestIdLayer` の設定した
//!    [`RequestId`](tower_http::request_id::RequestId) を task-local に保存する
//! 2. [`inject_request_id`] ヘルパーが task-local から Request ID を取得し、
//!    reqwest の `RequestBuilder` に `X-Request-Id` ヘッダーとして付与する
//!
//! クライアントメソッドのシグネチャに Request ID を持ち込まないよう、
//! task-local で暗黙的に伝播する。

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use meibo_shared::observability::REQUEST_ID_HEADER;
use tower_http::request_id::RequestId;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// 現在のリクエストの Request ID を取得する
///
/// task-local スコープ外（テスト等）では `None` を返す。
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok()
}

/// Request ID を task-local に保存するミドルウェア
///
/// `SetRequestIdLayer` が設定した `RequestId` をリクエスト extensions から取得し、
/// 後続のハンドラー・クライアント処理をそのスコープ内で実行する。
pub async fn store_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_string();

    REQUEST_ID.scope(request_id, next.run(request)).await
}

/// reqwest リクエストビルダーに `X-Request-Id` ヘッダーを付与する
///
/// task-local スコープ外の場合はビルダーをそのまま返す。
pub fn inject_request_id(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match current_request_id() {
        Some(id) => builder.header(REQUEST_ID_HEADER, id),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_request_id_task_localスコープ外でnoneを返す() {
        assert_eq!(current_request_id(), None);
    }

    #[tokio::test]
    async fn test_current_request_id_スコープ内で保存した値を返す() {
        let result = REQUEST_ID
            .scope("req-123".to_string(), async { current_request_id() })
            .await;

        assert_eq!(result.as_deref(), Some("req-123"));
    }

    #[tokio::test]
    async fn test_inject_request_id_task_local設定時にヘッダーを付与する() {
        let client = reqwest::Client::new();

        let result = REQUEST_ID
            .scope("test-request-id-456".to_string(), async {
                let builder = inject_request_id(client.get("http://example.com/employee"));
                builder.build().unwrap()
            })
            .await;

        let header_value = result
            .headers()
            .get("x-request-id")
            .expect("x-request-id ヘッダーが存在すること");
        assert_eq!(header_value.to_str().unwrap(), "test-request-id-456");
    }

    #[tokio::test]
    async fn test_inject_request_id_task_local未設定時にビルダーを変更しない() {
        let client = reqwest::Client::new();
        let builder = inject_request_id(client.delete("http://example.com/employee/1"));
        let request = builder.build().unwrap();

        assert!(request.headers().get("x-request-id").is_none());
    }
}
