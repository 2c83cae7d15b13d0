//! # 社員 API ハンドラ
//!
//! ゲートウェイの社員エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/employees` - 社員一覧
//! - `GET /api/employees/search/{search_string}` - 名前の部分一致検索
//! - `GET /api/employees/highestSalary` - 最高給与額
//! - `GET /api/employees/topTenHighestEarningEmployeeNames` - 高給与の社員名（上位 10 名）
//! - `GET /api/employees/{id}` - 社員詳細
//! - `POST /api/employees` - 社員作成
//! - `DELETE /api/employees/{id}` - 社員削除（削除した社員名を返す）

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use meibo_domain::employee::{Employee, EmployeeCreateRequest};
use meibo_shared::{ApiResponse, ErrorResponse};

use crate::{error::ApiError, usecase::EmployeeUseCaseImpl};

/// 社員 API の共有状態
pub struct EmployeeState {
    pub usecase: EmployeeUseCaseImpl,
}

const EMPLOYEE_NOT_FOUND: &str = "社員が見つかりません";

/// GET /api/employees
///
/// 全社員を取得する。
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "社員一覧", body = ApiResponse<Vec<Employee>>),
        (status = 500, description = "上流 API エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = state.usecase.list_all().await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(employees))))
}

/// GET /api/employees/search/{search_string}
///
/// 名前の部分一致で社員を検索する。
#[utoipa::path(
    get,
    path = "/api/employees/search/{search_string}",
    tag = "employees",
    params(("search_string" = String, Path, description = "検索語（大文字小文字・空白・記号は無視）")),
    responses(
        (status = 200, description = "一致した社員", body = ApiResponse<Vec<Employee>>),
        (status = 500, description = "上流 API エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%search_string))]
pub async fn search_employees(
    State(state): State<Arc<EmployeeState>>,
    Path(search_string): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employees = state.usecase.search_by_name(&search_string).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(employees))))
}

/// GET /api/employees/{id}
///
/// ID で社員を取得する。
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "社員 ID")),
    responses(
        (status = 200, description = "社員詳細", body = ApiResponse<Employee>),
        (status = 404, description = "社員が見つからない", body = ErrorResponse),
        (status = 500, description = "上流 API エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = state
        .usecase
        .get_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(employee))))
}

/// GET /api/employees/highestSalary
///
/// 全社員の最高給与額を取得する。
#[utoipa::path(
    get,
    path = "/api/employees/highestSalary",
    tag = "employees",
    responses(
        (status = 200, description = "最高給与額", body = ApiResponse<i64>),
        (status = 404, description = "給与を持つ社員がいない", body = ErrorResponse),
        (status = 500, description = "上流 API エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_highest_salary(
    State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, ApiError> {
    let salary = state
        .usecase
        .highest_salary()
        .await?
        .ok_or_else(|| ApiError::NotFound("給与を持つ社員が存在しません".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(salary))))
}

/// GET /api/employees/topTenHighestEarningEmployeeNames
///
/// 給与の高い順に最大 10 名の社員名を取得する。
#[utoipa::path(
    get,
    path = "/api/employees/topTenHighestEarningEmployeeNames",
    tag = "employees",
    responses(
        (status = 200, description = "社員名（給与の降順）", body = ApiResponse<Vec<String>>),
        (status = 500, description = "上流 API エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_top_ten_earner_names(
    State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, ApiError> {
    let names = state.usecase.top_ten_by_earnings().await?;

    Ok((StatusCode::OK, Json(ApiResponse::new(names))))
}

/// POST /api/employees
///
/// 社員を作成する。
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = EmployeeCreateRequest,
    responses(
        (status = 201, description = "作成成功", body = ApiResponse<Employee>),
        (status = 400, description = "バリデーションエラー", body = ErrorResponse),
        (status = 500, description = "上流 API エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_employee(
    State(state): State<Arc<EmployeeState>>,
    Json(req): Json<EmployeeCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = state.usecase.create(req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(employee))))
}

/// DELETE /api/employees/{id}
///
/// 社員を削除し、削除した社員の名前を返す。
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "社員 ID")),
    responses(
        (status = 200, description = "削除した社員の名前", body = ApiResponse<String>),
        (status = 404, description = "社員が見つからない", body = ErrorResponse),
        (status = 500, description = "上流 API エラー", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let name = state
        .usecase
        .delete_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::new(name))))
}
