//! # OpenAPI 仕様定義
//!
//! utoipa を使用してゲートウェイの OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{employee, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meibo API",
        version = "0.1.0",
        description = "社員名簿ゲートウェイ Meibo の API"
    ),
    paths(
        // health
        health::health_check,
        // employees
        employee::list_employees,
        employee::search_employees,
        employee::get_highest_salary,
        employee::get_top_ten_earner_names,
        employee::get_employee,
        employee::create_employee,
        employee::delete_employee,
    ),
    components(schemas(
        meibo_shared::ErrorResponse,
    )),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "employees", description = "社員管理"),
    )
)]
pub struct ApiDoc;
