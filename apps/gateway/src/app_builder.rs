//! # ゲートウェイ アプリケーション構築
//!
//! DI（クライアント・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はトレーシング初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::get,
};
use meibo_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::{DirectoryApiClient, DirectoryApiClientImpl},
    config::GatewayConfig,
    handler::{
        EmployeeState,
        create_employee,
        delete_employee,
        get_employee,
        get_highest_salary,
        get_top_ten_earner_names,
        health_check,
        list_employees,
        search_employees,
    },
    middleware::store_request_id,
    usecase::EmployeeUseCaseImpl,
};

/// 設定から社員名簿 API クライアントを生成し、ルーターを構築する
pub fn build_app(config: &GatewayConfig) -> Router {
    let client = Arc::new(DirectoryApiClientImpl::new(&config.directory_api_url));
    build_router(client)
}

/// 任意のクライアントでルーターを構築する
///
/// クライアント → ユースケース → State → Router の順に組み立てる。
pub fn build_router(client: Arc<dyn DirectoryApiClient>) -> Router {
    let employee_state = Arc::new(EmployeeState {
        usecase: EmployeeUseCaseImpl::new(client),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/api/employees", get(list_employees).post(create_employee))
        .route(
            "/api/employees/search/{search_string}",
            get(search_employees),
        )
        .route("/api/employees/highestSalary", get(get_highest_salary))
        .route(
            "/api/employees/topTenHighestEarningEmployeeNames",
            get(get_top_ten_earner_names),
        )
        .route(
            "/api/employees/{id}",
            get(get_employee).delete(delete_employee),
        )
        .with_state(employee_state)
        // レイヤー順序: 下に書いたものが外側
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: request_id を含むスパンを作成
        // 3. CanonicalLogLineLayer: スパン内でリクエストのサマリを 1 行出力
        // 4. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 5. store_request_id: task-local に保存し、社員名簿 API へのヘッダー伝播に使用
        .layer(from_fn(store_request_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
